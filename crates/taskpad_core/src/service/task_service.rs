//! Task store use-case service.
//!
//! # Responsibility
//! - Hold the authoritative in-memory task collection and id counter.
//! - Expose add/find/complete/delete/list operations to callers.
//! - Delegate load/save to a [`TaskRepository`] at the two lifecycle
//!   points (process start, process end).
//!
//! # Invariants
//! - No two held tasks share an id.
//! - `next_id` only ever increases; ids are never reused after delete, so
//!   the id sequence over a session is strictly increasing and may be
//!   sparse.
//! - Listing operations hand out independent copies; the internal
//!   collection is only mutated through this service.

use crate::model::task::{Task, TaskId};
use crate::repo::file_repo::TaskRepository;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Business-level error for store operations.
///
/// Storage-format and I/O conditions never surface here; they are
/// absorbed by the repository layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// No task with the requested id is currently held by the store.
    NotFound(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "no task found with id {id}"),
        }
    }
}

impl Error for StoreError {}

/// In-memory task store with pluggable persistence.
///
/// Single-threaded by design: one caller drives every operation, and the
/// repository is only touched by [`TaskService::load`] and
/// [`TaskService::save`].
pub struct TaskService<R: TaskRepository> {
    tasks: Vec<Task>,
    next_id: TaskId,
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates an empty store with the counter at 1.
    pub fn new(repo: R) -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            repo,
        }
    }

    /// Replaces the in-memory state with the repository snapshot.
    ///
    /// Called once at process start. Storage trouble degrades to the
    /// empty store inside the repository; this never fails.
    pub fn load(&mut self) {
        let snapshot = self.repo.load();
        self.tasks = snapshot.tasks;
        self.next_id = snapshot.next_id;
    }

    /// Flushes the in-memory state through the repository.
    ///
    /// Called once at process end. Returns `false` when persistence did
    /// not complete, so the caller can tell the user; the failure detail
    /// is already logged at the repository boundary.
    pub fn save(&self) -> bool {
        self.repo.save(&self.tasks, self.next_id)
    }

    /// Appends a new pending task and returns it.
    ///
    /// Consumes the current `next_id` and increments the counter.
    /// Description emptiness is the caller's concern; the store records
    /// what it is given.
    pub fn add_task(&mut self, description: impl Into<String>) -> &Task {
        let index = self.tasks.len();
        self.tasks.push(Task::new(self.next_id, description));
        self.next_id += 1;
        &self.tasks[index]
    }

    /// Looks up a task by id.
    ///
    /// Linear scan in insertion order; ids are unique so the first match
    /// is the only one.
    pub fn find(&self, id: TaskId) -> StoreResult<&Task> {
        self.tasks
            .iter()
            .find(|task| task.id() == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Marks the task with the given id as completed and returns it.
    ///
    /// The transition is one-way; completing an already-completed task is
    /// a no-op that still succeeds.
    pub fn mark_completed(&mut self, id: TaskId) -> StoreResult<&Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        task.mark_completed();
        Ok(task)
    }

    /// Removes the task with the given id from the collection.
    ///
    /// The id is retired permanently: `next_id` is untouched, so it will
    /// never be handed out again.
    pub fn delete_task(&mut self, id: TaskId) -> StoreResult<()> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        self.tasks.remove(index);
        Ok(())
    }

    /// Returns a snapshot copy of every task, in insertion order.
    pub fn list_all(&self) -> Vec<Task> {
        self.tasks.to_vec()
    }

    /// Returns a snapshot copy of every task the predicate selects, in
    /// insertion order.
    pub fn list_filtered<P>(&self, predicate: P) -> Vec<Task>
    where
        P: Fn(&Task) -> bool,
    {
        self.tasks
            .iter()
            .filter(|task| predicate(task))
            .cloned()
            .collect()
    }

    /// The id the next created task will receive.
    pub fn next_id(&self) -> TaskId {
        self.next_id
    }

    /// Number of tasks currently held.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}
