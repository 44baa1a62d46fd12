//! Task store over one named slot.
//!
//! # Responsibility
//! - Own the authoritative task collection and its JSON encoding.
//! - Provide create/read/update/delete with full-collection writes.
//!
//! # Invariants
//! - Every write replaces the whole collection (read-modify-write).
//! - Validation runs before any storage access; a rejected input never
//!   touches the slot.
//! - Generated ids never collide with an id in the current collection.
//! - Concurrent mutations are last-write-wins; there is no merge step.
//! - A mutation never writes over a collection it could not read, except
//!   when the stored payload is undecodable.

use crate::clock::{Clock, SystemClock};
use crate::model::task::{Task, TaskDraft, TaskId, TaskValidationError};
use crate::repo::slot_repo::{RepoError, SlotRepository};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;
use uuid::Uuid;

/// Slot holding the task collection unless overridden.
pub const DEFAULT_SLOT_KEY: &str = "@tasks";

pub type StoreResult<T> = Result<T, StoreError>;

/// Why the persisted collection could not be read.
#[derive(Debug)]
pub enum ReadError {
    Repo(RepoError),
    /// Slot exists but does not hold a valid task collection.
    Decode(serde_json::Error),
}

impl Display for ReadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Decode(err) => write!(f, "corrupted task collection: {err}"),
        }
    }
}

impl Error for ReadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Decode(err) => Some(err),
        }
    }
}

/// Why a mutation could not be durably committed.
#[derive(Debug)]
pub enum WriteError {
    Repo(RepoError),
    Encode(serde_json::Error),
}

impl Display for WriteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "task collection encoding failed: {err}"),
        }
    }
}

impl Error for WriteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

/// Store-level error surfaced to callers.
#[derive(Debug)]
pub enum StoreError {
    /// Input rejected before storage access.
    Validation(TaskValidationError),
    StorageRead(ReadError),
    /// The mutation was not saved; callers should re-read.
    StorageWrite(WriteError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::StorageRead(err) => write!(f, "failed to read tasks: {err}"),
            Self::StorageWrite(err) => write!(f, "failed to save tasks: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::StorageRead(err) => Some(err),
            Self::StorageWrite(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Result of a lenient collection read.
///
/// `tasks` is always usable. When the slot could not be read or decoded it
/// is empty and `read_error` carries the cause.
#[derive(Debug)]
pub struct TaskSnapshot {
    pub tasks: Vec<Task>,
    pub read_error: Option<StoreError>,
}

impl TaskSnapshot {
    pub fn is_degraded(&self) -> bool {
        self.read_error.is_some()
    }
}

/// Durable task collection bound to one slot.
pub struct TaskStore<R: SlotRepository> {
    repo: R,
    slot_key: String,
    clock: Box<dyn Clock>,
}

impl<R: SlotRepository> TaskStore<R> {
    /// Creates a store on the default slot using the system clock.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            slot_key: DEFAULT_SLOT_KEY.to_string(),
            clock: Box::new(SystemClock),
        }
    }

    /// Binds the store to another slot key.
    pub fn with_slot_key(mut self, slot_key: impl Into<String>) -> Self {
        self.slot_key = slot_key.into();
        self
    }

    /// Replaces the time source used for `created_at` and "today".
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Reads the full collection, failing on unreadable data.
    ///
    /// A slot that was never written reads as an empty collection.
    pub fn try_get_all(&self) -> StoreResult<Vec<Task>> {
        let raw = self
            .repo
            .read_slot(&self.slot_key)
            .map_err(|err| StoreError::StorageRead(ReadError::Repo(err)))?;

        match raw {
            Some(payload) => serde_json::from_str::<Vec<Task>>(&payload)
                .map_err(|err| StoreError::StorageRead(ReadError::Decode(err))),
            None => Ok(Vec::new()),
        }
    }

    /// Reads the full collection, substituting an empty one on failure.
    pub fn get_all(&self) -> TaskSnapshot {
        match self.try_get_all() {
            Ok(tasks) => TaskSnapshot {
                tasks,
                read_error: None,
            },
            Err(err) => {
                error!(
                    "event=task_read module=store status=error slot={} error_code=storage_read_failed error={err}",
                    self.slot_key
                );
                TaskSnapshot {
                    tasks: Vec::new(),
                    read_error: Some(err),
                }
            }
        }
    }

    /// Appends a new task and persists the whole collection.
    ///
    /// # Errors
    /// - `Validation` when the trimmed title is empty (nothing is read or written).
    /// - `StorageRead` when the slot could not be read (nothing is written).
    /// - `StorageWrite` when the collection could not be saved.
    pub fn add(&self, mut draft: TaskDraft) -> StoreResult<Task> {
        draft.normalize()?;
        let started_at = Instant::now();

        let mut tasks = self.base_collection("task_add")?;
        let task = Task::from_draft(generate_id(&tasks), self.clock.now(), draft);
        tasks.push(task.clone());
        self.persist(&tasks)?;

        info!(
            "event=task_add module=store status=ok task_id={} total={} duration_ms={}",
            task.id,
            tasks.len(),
            started_at.elapsed().as_millis()
        );
        Ok(task)
    }

    /// Replaces the stored task carrying the same id.
    ///
    /// All fields are taken from the input, `id` and `created_at` included.
    /// When no task matches, nothing is written and the (normalized) input
    /// is still returned.
    pub fn update(&self, mut task: Task) -> StoreResult<Task> {
        task.normalize()?;
        let started_at = Instant::now();

        let mut tasks = self.base_collection("task_update")?;
        let Some(slot) = tasks.iter_mut().find(|item| item.id == task.id) else {
            info!(
                "event=task_update module=store status=skipped reason=not_found task_id={}",
                task.id
            );
            return Ok(task);
        };
        *slot = task.clone();
        self.persist(&tasks)?;

        info!(
            "event=task_update module=store status=ok task_id={} duration_ms={}",
            task.id,
            started_at.elapsed().as_millis()
        );
        Ok(task)
    }

    /// Removes the task with `id`. Deleting an unknown id is a no-op.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let started_at = Instant::now();

        let mut tasks = self.base_collection("task_delete")?;
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        if tasks.len() == before {
            info!(
                "event=task_delete module=store status=skipped reason=not_found task_id={id}"
            );
            return Ok(());
        }
        self.persist(&tasks)?;

        info!(
            "event=task_delete module=store status=ok task_id={id} total={} duration_ms={}",
            tasks.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }

    /// Drops the whole collection. The next read is a cold start.
    pub fn clear(&self) -> StoreResult<()> {
        self.repo.remove_slot(&self.slot_key).map_err(|err| {
            error!(
                "event=task_clear module=store status=error slot={} error={err}",
                self.slot_key
            );
            StoreError::StorageWrite(WriteError::Repo(err))
        })?;
        info!(
            "event=task_clear module=store status=ok slot={}",
            self.slot_key
        );
        Ok(())
    }

    /// Snapshot a mutation builds on.
    ///
    /// An undecodable payload counts as empty so the next write replaces
    /// it. Any other read failure aborts the mutation before a write.
    fn base_collection(&self, event: &str) -> StoreResult<Vec<Task>> {
        match self.try_get_all() {
            Ok(tasks) => Ok(tasks),
            Err(StoreError::StorageRead(ReadError::Decode(err))) => {
                warn!(
                    "event={event} module=store status=degraded reason=unreadable_collection slot={} error={err}",
                    self.slot_key
                );
                Ok(Vec::new())
            }
            Err(err) => {
                error!(
                    "event={event} module=store status=error slot={} error_code=storage_read_failed error={err}",
                    self.slot_key
                );
                Err(err)
            }
        }
    }

    fn persist(&self, tasks: &[Task]) -> StoreResult<()> {
        let payload = serde_json::to_string(tasks)
            .map_err(|err| StoreError::StorageWrite(WriteError::Encode(err)))?;
        self.repo
            .write_slot(&self.slot_key, &payload)
            .map_err(|err| {
                error!(
                    "event=task_write module=store status=error slot={} error_code=storage_write_failed error={err}",
                    self.slot_key
                );
                StoreError::StorageWrite(WriteError::Repo(err))
            })
    }
}

fn generate_id(existing: &[Task]) -> TaskId {
    loop {
        let candidate = Uuid::new_v4().to_string();
        if existing.iter().all(|task| task.id != candidate) {
            return candidate;
        }
    }
}
