//! Aggregate counts over a task collection.

use crate::model::task::{Priority, Task};
use serde::Serialize;

/// Counts by completion and priority.
///
/// Priority counts ignore completion status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl Stats {
    pub fn pending(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }

    /// `completed / total`, or `0.0` for an empty collection.
    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64
    }

    /// Completion rate as a whole percentage, rounded half away from zero.
    pub fn completion_percent(&self) -> u32 {
        (self.completion_rate() * 100.0).round() as u32
    }
}

pub fn compute_stats(tasks: &[Task]) -> Stats {
    tasks.iter().fold(Stats::default(), |mut stats, task| {
        stats.total += 1;
        if task.completed {
            stats.completed += 1;
        }
        match task.priority {
            Priority::High => stats.high += 1,
            Priority::Medium => stats.medium += 1,
            Priority::Low => stats.low += 1,
        }
        stats
    })
}
