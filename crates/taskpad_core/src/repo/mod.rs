//! Persistence layer contracts and the flat-file implementation.
//!
//! # Responsibility
//! - Define the load/save seam between the store service and storage.
//! - Keep file-format and I/O details out of business orchestration.
//!
//! # Invariants
//! - Storage trouble never propagates as an error; loads degrade to the
//!   empty snapshot and saves report completion as a boolean.
//! - Malformed stored records are skipped and logged, never fatal.

pub mod file_repo;
