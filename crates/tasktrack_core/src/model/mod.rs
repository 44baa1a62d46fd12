//! Domain model for the task tracker.
//!
//! # Responsibility
//! - Define the single persisted entity (`Task`) and its creation input.
//!
//! # Invariants
//! - Tasks form a flat collection: no parent/child or dependency links.
//! - Collection order carries no meaning; views compute their own order.

pub mod task;
