//! Display orderings.
//!
//! Both orderings are stable: tasks that compare equal keep their relative
//! input order, whichever direction is requested.

use crate::derivation::view::ViewOptionError;
use crate::model::task::Task;
use std::cmp::Reverse;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Date,
    Priority,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Priority => "priority",
        }
    }
}

impl FromStr for SortBy {
    type Err = ViewOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "date" => Ok(Self::Date),
            "priority" => Ok(Self::Priority),
            other => Err(ViewOptionError::new("sortBy", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ViewOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ViewOptionError::new("sortDirection", other)),
        }
    }
}

/// Orders by `due_date` instant.
pub fn sort_by_due_date(tasks: &[Task], direction: SortDirection) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    match direction {
        SortDirection::Asc => sorted.sort_by_key(|task| task.due_date),
        SortDirection::Desc => sorted.sort_by_key(|task| Reverse(task.due_date)),
    }
    sorted
}

/// Orders by priority weight, highest first.
pub fn sort_by_priority_weight(tasks: &[Task]) -> Vec<Task> {
    sort_by_priority(tasks, SortDirection::Desc)
}

/// Orders by priority weight; `Asc` puts low priority first.
pub fn sort_by_priority(tasks: &[Task], direction: SortDirection) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    match direction {
        SortDirection::Asc => sorted.sort_by_key(|task| task.priority.weight()),
        SortDirection::Desc => sorted.sort_by_key(|task| Reverse(task.priority.weight())),
    }
    sorted
}
