//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate the in-memory task collection behind stable operations.
//! - Keep UI layers decoupled from storage details.

pub mod task_service;
