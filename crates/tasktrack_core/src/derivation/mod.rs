//! Pure derivations over a task snapshot.
//!
//! # Responsibility
//! - Compute filtered subsets, display orderings, aggregate stats and
//!   calendar markers from an in-memory collection.
//!
//! # Invariants
//! - Nothing here touches storage, reads the clock or mutates its input.
//! - Outputs are fresh copies; no result aliases the caller's collection.
//! - Every function is deterministic in its arguments.

pub mod calendar;
pub mod filter;
pub mod sort;
pub mod stats;
pub mod view;

pub use calendar::{build_calendar_marks, calendar_day, CalendarDay, CalendarMarks, DayMarker};
pub use filter::{
    filter_by_date, filter_by_priority, filter_by_search, filter_by_status, filter_by_window,
    PriorityFilter, StatusFilter, Window,
};
pub use sort::{sort_by_due_date, sort_by_priority, sort_by_priority_weight, SortBy, SortDirection};
pub use stats::{compute_stats, Stats};
pub use view::{derive_view, DerivedView, ViewConfig, ViewOptionError};
