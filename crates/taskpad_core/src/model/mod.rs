//! Domain model for the task tracker.
//!
//! # Responsibility
//! - Define the canonical Task record used by core business logic.
//! - Own the flat-file record codec the persistence layer relies on.
//!
//! # Invariants
//! - Every task is identified by a `TaskId` that is never reassigned.
//! - The record codec is the single authority on the on-disk line format.

pub mod task;
