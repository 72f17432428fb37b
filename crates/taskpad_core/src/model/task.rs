//! Task domain model.
//!
//! # Responsibility
//! - Define the single unit-of-work record manipulated by the store.
//! - Provide the pipe-delimited encode/decode contract used for storage.
//!
//! # Invariants
//! - `id` is stable for the store lifetime and never reused after delete.
//! - `completed` only transitions `false -> true`, via `mark_completed`.
//! - `created_on` is assigned once and never mutated afterwards.

use chrono::{Local, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a task within one store lifetime.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = u32;

/// Field separator of the stored record format.
///
/// A record carries four fields; a description may itself contain the
/// separator, so decoding anchors on the outer fields instead of a plain
/// left-to-right split.
pub const RECORD_DELIMITER: char = '|';

const RECORD_FIELDS: usize = 4;
const RECORD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Error raised when a stored line cannot be decoded into a [`Task`].
///
/// This exists so the persistence layer can log the failure with context
/// and skip the line; a bad record never aborts a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Fewer than four delimited fields were present.
    MissingFields { found: usize },
    /// The id field is not a decimal integer.
    InvalidId(String),
    /// The completed field is not the literal `true` or `false`.
    InvalidCompleted(String),
    /// The date field is not a valid `YYYY-MM-DD` calendar date.
    InvalidDate(String),
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields { found } => {
                write!(f, "expected {RECORD_FIELDS} record fields, found {found}")
            }
            Self::InvalidId(value) => write!(f, "invalid task id `{value}`"),
            Self::InvalidCompleted(value) => {
                write!(f, "invalid completed flag `{value}`, expected true|false")
            }
            Self::InvalidDate(value) => {
                write!(f, "invalid creation date `{value}`, expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for RecordError {}

/// One trackable unit of work.
///
/// Fields are private so the completion flag can only move through
/// [`Task::mark_completed`] and identity fields stay frozen after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    description: String,
    completed: bool,
    created_on: NaiveDate,
}

impl Task {
    /// Creates a fresh task: pending, dated today.
    ///
    /// # Invariants
    /// - `completed` starts as `false`.
    /// - `created_on` is the current local calendar date.
    pub fn new(id: TaskId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
            created_on: Local::now().date_naive(),
        }
    }

    /// Reconstructs a task verbatim from previously stored fields.
    ///
    /// Used by the persistence layer when rehydrating the store; no field
    /// is defaulted or revalidated here.
    pub fn from_parts(
        id: TaskId,
        description: impl Into<String>,
        completed: bool,
        created_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            completed,
            created_on,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    /// Marks this task as completed. There is no reverse transition.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Encodes this task as one storage line:
    /// `id|description|completed|YYYY-MM-DD`.
    ///
    /// Total function of the fields; no failure modes.
    pub fn to_record(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{}",
            self.id,
            self.description,
            self.completed,
            self.created_on.format(RECORD_DATE_FORMAT),
            sep = RECORD_DELIMITER,
        )
    }

    /// Decodes one storage line produced by [`Task::to_record`].
    ///
    /// The id is read up to the first delimiter and the completed flag and
    /// date off the last two, so any further delimiters decode as part of
    /// the description.
    ///
    /// # Errors
    /// - [`RecordError::MissingFields`] when fewer than four fields result.
    /// - [`RecordError::InvalidId`] when the id is not a decimal integer.
    /// - [`RecordError::InvalidCompleted`] when the flag is not `true`/`false`.
    /// - [`RecordError::InvalidDate`] when the date is not ISO `YYYY-MM-DD`.
    pub fn from_record(line: &str) -> Result<Self, RecordError> {
        let found = line.splitn(RECORD_FIELDS, RECORD_DELIMITER).count();
        if found < RECORD_FIELDS {
            return Err(RecordError::MissingFields { found });
        }

        // At least three delimiters exist past this point, so both the
        // right-anchored split and the id split below always succeed.
        let mut tail = line.rsplitn(3, RECORD_DELIMITER);
        let date_text = tail.next().unwrap_or_default();
        let completed_text = tail.next().unwrap_or_default();
        let head = tail.next().unwrap_or_default();
        let (id_text, description) = head.split_once(RECORD_DELIMITER).unwrap_or((head, ""));

        let id = id_text
            .parse::<TaskId>()
            .map_err(|_| RecordError::InvalidId(id_text.to_string()))?;
        let completed = match completed_text {
            "true" => true,
            "false" => false,
            other => return Err(RecordError::InvalidCompleted(other.to_string())),
        };
        let created_on = NaiveDate::parse_from_str(date_text, RECORD_DATE_FORMAT)
            .map_err(|_| RecordError::InvalidDate(date_text.to_string()))?;

        Ok(Self::from_parts(id, description, completed, created_on))
    }
}

/// Console rendering only; storage goes through [`Task::to_record`].
impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let status = if self.completed {
            "[x] completed"
        } else {
            "[ ] pending"
        };
        write!(
            f,
            "ID: {:<3} | {:<13} | {} | {}",
            self.id,
            status,
            self.created_on.format("%d/%m/%Y"),
            self.description,
        )
    }
}
