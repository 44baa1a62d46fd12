//! Single entry point turning a snapshot plus view options into a list.
//!
//! # Invariants
//! - All configured filters are combined with logical AND in one pass.
//! - Stats are computed over the filtered list, before sorting.
//! - Same snapshot, config and `today` always give the same result.

use crate::derivation::filter::{
    matches_date, matches_priority, matches_search_lowered, matches_status, matches_window,
    PriorityFilter, StatusFilter, Window,
};
use crate::derivation::sort::{sort_by_due_date, sort_by_priority, SortBy, SortDirection};
use crate::derivation::stats::{compute_stats, Stats};
use crate::model::task::Task;
use chrono::NaiveDate;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Unrecognized view option string.
///
/// Reported to the caller instead of falling back to a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptionError {
    pub option: &'static str,
    pub value: String,
}

impl ViewOptionError {
    pub(crate) fn new(option: &'static str, value: &str) -> Self {
        Self {
            option,
            value: value.to_string(),
        }
    }
}

impl Display for ViewOptionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unrecognized {} option `{}`", self.option, self.value)
    }
}

impl Error for ViewOptionError {}

/// Options of a list view. `Default` shows everything, newest due first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewConfig {
    /// Case-insensitive title/description substring; empty matches all.
    pub search: String,
    pub priority: PriorityFilter,
    pub status: StatusFilter,
    pub window: Window,
    /// Restricts to one calendar day when set.
    pub date: Option<NaiveDate>,
    pub sort_by: SortBy,
    pub sort_direction: SortDirection,
}

impl ViewConfig {
    /// Builds a config from wire option names.
    ///
    /// # Errors
    /// Returns the first option whose value is not recognized.
    pub fn from_options(
        search: impl Into<String>,
        priority: &str,
        status: &str,
        window: &str,
        date: Option<NaiveDate>,
        sort_by: &str,
        sort_direction: &str,
    ) -> Result<Self, ViewOptionError> {
        Ok(Self {
            search: search.into(),
            priority: priority.parse()?,
            status: status.parse()?,
            window: window.parse()?,
            date,
            sort_by: sort_by.parse()?,
            sort_direction: sort_direction.parse()?,
        })
    }
}

/// Filtered and sorted tasks plus stats over them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedView {
    pub tasks: Vec<Task>,
    pub stats: Stats,
}

/// Applies `config` to `tasks`; `today` anchors the time windows.
pub fn derive_view(tasks: &[Task], config: &ViewConfig, today: NaiveDate) -> DerivedView {
    let needle = config.search.to_lowercase();
    let filtered: Vec<Task> = tasks
        .iter()
        .filter(|task| {
            matches_search_lowered(task, &needle)
                && matches_priority(task, config.priority)
                && matches_status(task, config.status)
                && matches_window(task, config.window, today)
                && config.date.map_or(true, |day| matches_date(task, day))
        })
        .cloned()
        .collect();

    let stats = compute_stats(&filtered);
    let tasks = match config.sort_by {
        SortBy::Date => sort_by_due_date(&filtered, config.sort_direction),
        SortBy::Priority => sort_by_priority(&filtered, config.sort_direction),
    };

    DerivedView { tasks, stats }
}

#[cfg(test)]
mod tests {
    use super::{derive_view, ViewConfig};
    use crate::derivation::filter::{
        filter_by_priority, filter_by_search, filter_by_window, PriorityFilter, StatusFilter,
        Window,
    };
    use crate::derivation::sort::{SortBy, SortDirection};
    use crate::model::task::{Priority, Task};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn task(id: &str, title: &str, priority: Priority, completed: bool, day: u32) -> Task {
        let due = Utc.with_ymd_and_hms(2024, 1, day, 8, 0, 0).unwrap();
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            priority,
            completed,
            tags: Vec::new(),
            category: String::new(),
            due_date: due,
            created_at: due,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task("1", "Pay rent", Priority::High, false, 1),
            task("2", "Pay phone bill", Priority::Low, true, 1),
            task("3", "Plan trip", Priority::Medium, false, 5),
            task("4", "Pay taxes", Priority::High, false, 9),
        ]
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn default_config_returns_everything_newest_due_first() {
        let view = derive_view(&sample(), &ViewConfig::default(), today());
        let ids: Vec<_> = view.tasks.iter().map(|task| task.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "3", "1", "2"]);
        assert_eq!(view.stats.total, 4);
        assert_eq!(view.stats.completed, 1);
    }

    #[test]
    fn combined_filters_match_sequential_application_in_any_order() {
        let tasks = sample();
        let config = ViewConfig {
            search: "pay".to_string(),
            priority: PriorityFilter::Only(Priority::High),
            window: Window::Upcoming,
            sort_direction: SortDirection::Asc,
            ..ViewConfig::default()
        };
        let view = derive_view(&tasks, &config, today());

        let a = filter_by_window(
            &filter_by_priority(
                &filter_by_search(&tasks, "pay"),
                PriorityFilter::Only(Priority::High),
            ),
            Window::Upcoming,
            today(),
        );
        let b = filter_by_search(
            &filter_by_priority(
                &filter_by_window(&tasks, Window::Upcoming, today()),
                PriorityFilter::Only(Priority::High),
            ),
            "pay",
        );
        assert_eq!(a, b);
        assert_eq!(view.tasks, a);
        assert_eq!(view.tasks[0].id, "4");
        assert_eq!(view.stats.total, 1);
    }

    #[test]
    fn date_and_status_narrow_the_view() {
        let config = ViewConfig {
            date: Some(today()),
            status: StatusFilter::Pending,
            ..ViewConfig::default()
        };
        let view = derive_view(&sample(), &config, today());
        assert_eq!(view.tasks.len(), 1);
        assert_eq!(view.tasks[0].id, "1");
    }

    #[test]
    fn priority_sort_follows_direction() {
        let config = ViewConfig {
            sort_by: SortBy::Priority,
            sort_direction: SortDirection::Desc,
            ..ViewConfig::default()
        };
        let view = derive_view(&sample(), &config, today());
        let ids: Vec<_> = view.tasks.iter().map(|task| task.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4", "3", "2"]);
    }

    #[test]
    fn derivation_is_deterministic() {
        let config = ViewConfig {
            search: "p".to_string(),
            sort_by: SortBy::Priority,
            ..ViewConfig::default()
        };
        assert_eq!(
            derive_view(&sample(), &config, today()),
            derive_view(&sample(), &config, today())
        );
    }

    #[test]
    fn from_options_rejects_unknown_names() {
        let config = ViewConfig::from_options("", "all", "pending", "today", None, "priority", "asc")
            .unwrap();
        assert_eq!(config.status, StatusFilter::Pending);
        assert_eq!(config.window, Window::Today);

        let err = ViewConfig::from_options("", "all", "all", "all", None, "title", "asc")
            .unwrap_err();
        assert_eq!(err.option, "sortBy");
        assert_eq!(err.to_string(), "unrecognized sortBy option `title`");
    }
}
