//! Task predicates and the filters built from them.
//!
//! # Invariants
//! - Filters never mutate input and always return fresh copies.
//! - Each filter is an independent predicate, so any combination is
//!   order-insensitive and re-applying a filter changes nothing.
//! - Day comparisons use `Task::due_day()` (UTC calendar day).

use crate::derivation::view::ViewOptionError;
use crate::model::task::{Priority, Task};
use chrono::NaiveDate;
use std::str::FromStr;

/// Priority option of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(priority) => priority.as_str(),
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = ViewOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "all" {
            return Ok(Self::All);
        }
        value.parse::<Priority>().map(Self::Only)
    }
}

/// Completion option of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ViewOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" => Ok(Self::All),
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            other => Err(ViewOptionError::new("status", other)),
        }
    }
}

/// Time-relative category of the home list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Window {
    #[default]
    All,
    /// Due on the current calendar day.
    Today,
    /// Due strictly after the current calendar day.
    Upcoming,
    Completed,
}

impl Window {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Upcoming => "upcoming",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for Window {
    type Err = ViewOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "upcoming" => Ok(Self::Upcoming),
            "completed" => Ok(Self::Completed),
            other => Err(ViewOptionError::new("window", other)),
        }
    }
}

pub fn matches_date(task: &Task, day: NaiveDate) -> bool {
    task.due_day() == day
}

pub fn matches_priority(task: &Task, filter: PriorityFilter) -> bool {
    match filter {
        PriorityFilter::All => true,
        PriorityFilter::Only(priority) => task.priority == priority,
    }
}

pub fn matches_status(task: &Task, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Completed => task.completed,
        StatusFilter::Pending => !task.completed,
    }
}

pub fn matches_window(task: &Task, window: Window, today: NaiveDate) -> bool {
    match window {
        Window::All => true,
        Window::Today => task.due_day() == today,
        Window::Upcoming => task.due_day() > today,
        Window::Completed => task.completed,
    }
}

/// Case-insensitive substring match on title or description.
///
/// `needle` must already be lowercased; an empty needle matches everything.
pub(crate) fn matches_search_lowered(task: &Task, needle: &str) -> bool {
    needle.is_empty()
        || task.title.to_lowercase().contains(needle)
        || task.description.to_lowercase().contains(needle)
}

pub fn matches_search(task: &Task, query: &str) -> bool {
    matches_search_lowered(task, &query.to_lowercase())
}

pub fn filter_by_date(tasks: &[Task], day: NaiveDate) -> Vec<Task> {
    collect_matching(tasks, |task| matches_date(task, day))
}

pub fn filter_by_priority(tasks: &[Task], filter: PriorityFilter) -> Vec<Task> {
    collect_matching(tasks, |task| matches_priority(task, filter))
}

pub fn filter_by_status(tasks: &[Task], filter: StatusFilter) -> Vec<Task> {
    collect_matching(tasks, |task| matches_status(task, filter))
}

pub fn filter_by_search(tasks: &[Task], query: &str) -> Vec<Task> {
    let needle = query.to_lowercase();
    collect_matching(tasks, |task| matches_search_lowered(task, &needle))
}

pub fn filter_by_window(tasks: &[Task], window: Window, today: NaiveDate) -> Vec<Task> {
    collect_matching(tasks, |task| matches_window(task, window, today))
}

fn collect_matching(tasks: &[Task], predicate: impl Fn(&Task) -> bool) -> Vec<Task> {
    tasks.iter().filter(|task| predicate(*task)).cloned().collect()
}
