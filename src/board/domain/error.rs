//! Error types for board domain validation and mutation.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// An identifier was empty after trimming.
    #[error("{kind} identifier must not be empty")]
    EmptyIdentifier {
        /// Identifier kind (`task`, `column` or `user`).
        kind: &'static str,
    },

    /// The referenced task does not exist on the board.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The referenced column does not exist on the board.
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),

    /// A task with the same identifier is already on the board.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// A column with the same identifier is already on the board.
    #[error("duplicate column identifier: {0}")]
    DuplicateColumn(ColumnId),

    /// A priority string did not name a known priority.
    #[error("unknown task priority: {0}")]
    UnknownPriority(String),
}
