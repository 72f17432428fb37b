//! Flat-file task repository.
//!
//! # Responsibility
//! - Translate between in-memory `(tasks, next_id)` state and the single
//!   on-disk record store.
//! - Absorb storage-format and I/O failures at this boundary.
//!
//! # Invariants
//! - A missing backing file is a normal empty-store startup, not an error.
//! - The first stored line is the id counter; every later line is one task
//!   record in collection order.
//! - `save` rewrites the whole file through a sibling temp file plus
//!   rename, so a crash mid-write leaves the previous store intact.

use crate::model::task::{Task, TaskId};
use log::{error, info, warn};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// In-memory image of the record store: the ordered task collection and
/// the id counter persisted alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub next_id: TaskId,
}

impl Default for Snapshot {
    /// The empty-store state: no tasks, counter at 1.
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

/// Persistence seam consumed by the store service.
pub trait TaskRepository {
    /// Reads the full record store.
    ///
    /// Infallible by contract: unreadable storage degrades to
    /// [`Snapshot::default`] and the condition is logged here.
    fn load(&self) -> Snapshot;

    /// Rewrites the full record store from the given state.
    ///
    /// Returns `false` when persistence did not complete; the failure
    /// itself is logged here, never raised to the caller.
    fn save(&self, tasks: &[Task], next_id: TaskId) -> bool;
}

/// Repository backed by one flat text file.
///
/// Stateless between calls: the file is opened, fully read or fully
/// written, and closed inside each operation.
pub struct FlatFileRepository {
    path: PathBuf,
}

impl FlatFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full rewrite through a sibling temp file; the rename keeps the old
    /// store readable if the write dies midway.
    fn write_replace(&self, payload: &str) -> std::io::Result<()> {
        let staging = self.path.with_extension("tmp");
        {
            let mut file = fs::File::create(&staging)?;
            file.write_all(payload.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&staging, &self.path)
    }
}

impl TaskRepository for FlatFileRepository {
    fn load(&self) -> Snapshot {
        if !self.path.exists() {
            info!(
                "event=store_load module=repo status=empty reason=missing_file path={}",
                self.path.display()
            );
            return Snapshot::default();
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                error!(
                    "event=store_load module=repo status=error path={} error={err}",
                    self.path.display()
                );
                return Snapshot::default();
            }
        };

        let mut lines = contents.lines();
        let next_id = match lines.next() {
            Some(first) => match first.parse::<TaskId>() {
                Ok(value) => value,
                Err(_) => {
                    warn!(
                        "event=store_load module=repo status=bad_counter fallback=1 line={first}"
                    );
                    1
                }
            },
            None => {
                warn!("event=store_load module=repo status=bad_counter fallback=1 line=");
                1
            }
        };

        let mut tasks = Vec::new();
        for line in lines {
            match Task::from_record(line) {
                Ok(task) => tasks.push(task),
                Err(err) => {
                    warn!(
                        "event=store_load module=repo status=skipped_record error={err} line={line}"
                    );
                }
            }
        }

        info!(
            "event=store_load module=repo status=ok count={} next_id={next_id} path={}",
            tasks.len(),
            self.path.display()
        );
        Snapshot { tasks, next_id }
    }

    fn save(&self, tasks: &[Task], next_id: TaskId) -> bool {
        let mut payload = String::new();
        payload.push_str(&next_id.to_string());
        payload.push('\n');
        for task in tasks {
            payload.push_str(&task.to_record());
            payload.push('\n');
        }

        match self.write_replace(&payload) {
            Ok(()) => {
                info!(
                    "event=store_save module=repo status=ok count={} next_id={next_id} path={}",
                    tasks.len(),
                    self.path.display()
                );
                true
            }
            Err(err) => {
                error!(
                    "event=store_save module=repo status=error path={} error={err}",
                    self.path.display()
                );
                false
            }
        }
    }
}
