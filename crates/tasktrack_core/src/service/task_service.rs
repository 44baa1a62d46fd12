//! Task use-case service consumed by presentation layers.
//!
//! # Responsibility
//! - Expose list/create/edit/remove as thin pass-throughs to the store.
//! - Compose store calls into screen-level actions (toggle, reschedule).
//! - Anchor pure derivations to the store's clock.
//!
//! # Invariants
//! - Service APIs never bypass store validation or persistence contracts.
//! - A full re-read is the only refresh primitive; nothing is cached here.

use crate::derivation::calendar::{calendar_day, CalendarDay};
use crate::derivation::view::{derive_view, DerivedView, ViewConfig};
use crate::model::task::{Task, TaskDraft};
use crate::repo::slot_repo::SlotRepository;
use crate::repo::task_repo::{StoreResult, TaskSnapshot, TaskStore};
use chrono::{DateTime, NaiveDate, Utc};

/// Use-case facade over one task store.
pub struct TaskService<R: SlotRepository> {
    store: TaskStore<R>,
}

impl<R: SlotRepository> TaskService<R> {
    pub fn new(store: TaskStore<R>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TaskStore<R> {
        &self.store
    }

    /// Loads the whole collection; unreadable data yields an empty,
    /// flagged snapshot.
    pub fn list_tasks(&self) -> TaskSnapshot {
        self.store.get_all()
    }

    pub fn create_task(&self, draft: TaskDraft) -> StoreResult<Task> {
        self.store.add(draft)
    }

    pub fn edit_task(&self, task: Task) -> StoreResult<Task> {
        self.store.update(task)
    }

    pub fn remove_task(&self, id: &str) -> StoreResult<()> {
        self.store.delete(id)
    }

    /// Finds one task by id.
    pub fn get_task(&self, id: &str) -> StoreResult<Option<Task>> {
        let tasks = self.store.try_get_all()?;
        Ok(tasks.into_iter().find(|task| task.id == id))
    }

    /// Flips `completed` and persists the result.
    ///
    /// Returns `None` when the id is unknown.
    pub fn toggle_completed(&self, id: &str) -> StoreResult<Option<Task>> {
        self.modify(id, |task| task.completed = !task.completed)
    }

    /// Moves a task to a new due instant.
    ///
    /// Returns `None` when the id is unknown.
    pub fn reschedule(&self, id: &str, due_date: DateTime<Utc>) -> StoreResult<Option<Task>> {
        self.modify(id, |task| task.due_date = due_date)
    }

    /// Removes every task.
    pub fn clear_all(&self) -> StoreResult<()> {
        self.store.clear()
    }

    /// Filters, sorts and aggregates `tasks` for a list screen.
    pub fn derive_view(&self, tasks: &[Task], config: &ViewConfig) -> DerivedView {
        derive_view(tasks, config, self.today())
    }

    /// Builds the calendar screen model for `selected`.
    pub fn calendar(&self, tasks: &[Task], selected: NaiveDate) -> CalendarDay {
        calendar_day(tasks, selected)
    }

    /// Current UTC calendar day per the store clock.
    pub fn today(&self) -> NaiveDate {
        self.store.clock().today()
    }

    fn modify(&self, id: &str, change: impl FnOnce(&mut Task)) -> StoreResult<Option<Task>> {
        let Some(mut task) = self.get_task(id)? else {
            return Ok(None);
        };
        change(&mut task);
        self.store.update(task).map(Some)
    }
}
