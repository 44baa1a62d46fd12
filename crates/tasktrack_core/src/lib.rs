//! Core task persistence and derivation for the task tracker.
//! This crate is the single source of truth for task records and the
//! views computed from them.

pub mod clock;
pub mod db;
pub mod derivation;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use derivation::{
    build_calendar_marks, calendar_day, compute_stats, derive_view, filter_by_date,
    filter_by_priority, filter_by_search, filter_by_status, filter_by_window, sort_by_due_date,
    sort_by_priority, sort_by_priority_weight, CalendarDay, CalendarMarks, DayMarker, DerivedView,
    PriorityFilter, SortBy, SortDirection, Stats, StatusFilter, ViewConfig, ViewOptionError,
    Window,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task::{Priority, Task, TaskDraft, TaskId, TaskValidationError};
pub use repo::slot_repo::{RepoError, RepoResult, SlotRepository, SqliteSlotRepository};
pub use repo::task_repo::{
    ReadError, StoreError, StoreResult, TaskSnapshot, TaskStore, WriteError, DEFAULT_SLOT_KEY,
};
pub use service::task_service::TaskService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
