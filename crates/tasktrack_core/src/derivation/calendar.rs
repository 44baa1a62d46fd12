//! Calendar projections: per-day markers and the selected-day panel.
//!
//! # Invariants
//! - Days are UTC calendar days of `due_date`.
//! - The selected day always has a marker, even without tasks.
//! - Marker colors follow task order, one swatch per task.

use crate::derivation::filter::filter_by_date;
use crate::derivation::stats::{compute_stats, Stats};
use crate::model::task::Task;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Marker shown on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DayMarker {
    /// One priority swatch per task due that day.
    pub colors: Vec<&'static str>,
    /// Whether at least one task is due that day.
    pub marked: bool,
    pub selected: bool,
}

/// Markers keyed by calendar day, in day order.
pub type CalendarMarks = BTreeMap<NaiveDate, DayMarker>;

pub fn build_calendar_marks(tasks: &[Task], selected: NaiveDate) -> CalendarMarks {
    let mut marks = CalendarMarks::new();
    marks.insert(
        selected,
        DayMarker {
            selected: true,
            ..DayMarker::default()
        },
    );

    for task in tasks {
        let marker = marks.entry(task.due_day()).or_default();
        marker.colors.push(task.priority.color());
        marker.marked = true;
    }

    marks
}

/// Everything the calendar screen shows for one selected day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub marks: CalendarMarks,
    /// Tasks due on `date`, in input order.
    pub tasks: Vec<Task>,
    /// Stats over `tasks`.
    pub stats: Stats,
}

pub fn calendar_day(tasks: &[Task], selected: NaiveDate) -> CalendarDay {
    let due = filter_by_date(tasks, selected);
    CalendarDay {
        date: selected,
        marks: build_calendar_marks(tasks, selected),
        stats: compute_stats(&due),
        tasks: due,
    }
}
