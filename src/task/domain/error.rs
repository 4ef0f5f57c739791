//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task identifier is zero.
    #[error("invalid task identifier {0}, expected a positive integer")]
    InvalidTaskId(u64),

    /// The task identifier could not be parsed from text.
    #[error("task identifier '{0}' is not a positive integer")]
    UnparseableTaskId(String),
}
