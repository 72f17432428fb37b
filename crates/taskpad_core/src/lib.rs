//! Core domain logic for taskpad, a single-user task tracker.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{RecordError, Task, TaskId, RECORD_DELIMITER};
pub use repo::file_repo::{FlatFileRepository, Snapshot, TaskRepository};
pub use service::task_service::{StoreError, StoreResult, TaskService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
