//! Persistence layer: named durable slots and the task store on top.
//!
//! # Responsibility
//! - Define the slot storage contract and its SQLite implementation.
//! - Own serialization of the task collection into one slot.
//!
//! # Invariants
//! - Nothing in this layer filters, sorts or aggregates tasks.
//! - Store APIs return semantic errors (`Validation`, `StorageRead`,
//!   `StorageWrite`) rather than raw transport errors.

pub mod slot_repo;
pub mod task_repo;
