//! Repository port for board state.

use crate::board::domain::{Board, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board repository operations.
pub type BoardRepositoryResult<T> = Result<T, BoardRepositoryError>;

/// Board state storage contract.
///
/// The board is read and written as a whole: mutations load a snapshot,
/// change it through the domain aggregate, and commit the result.
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Returns a snapshot of the current board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::Persistence`] when the backing store
    /// cannot be read.
    async fn load(&self) -> BoardRepositoryResult<Board>;

    /// Replaces the stored board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::Persistence`] when the backing store
    /// cannot be written.
    async fn save(&self, board: &Board) -> BoardRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_task(&self, id: &TaskId) -> BoardRepositoryResult<Option<Task>>;
}

/// Errors returned by board repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
