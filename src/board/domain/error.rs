//! Error types for board domain validation and parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The due date is not strictly after the current calendar day.
    #[error("due date {due} must be after {today}")]
    DueDateNotInFuture {
        /// Requested due date.
        due: NaiveDate,
        /// Current calendar day at validation time.
        today: NaiveDate,
    },

    /// The member name is empty after trimming.
    #[error("member name must not be empty")]
    EmptyMemberName,
}

/// Error returned while parsing column identifiers from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown column: {0}")]
pub struct ParseColumnError(pub String);

/// Error returned while parsing priority levels from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
