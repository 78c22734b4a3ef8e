//! In-memory repository holding the live board.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Board, Task, TaskId},
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};

/// Thread-safe in-memory board repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardRepository {
    state: Arc<RwLock<Board>>,
}

impl InMemoryBoardRepository {
    /// Creates a repository seeded with `board`.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self {
            state: Arc::new(RwLock::new(board)),
        }
    }
}

fn poisoned(err: &impl ToString) -> BoardRepositoryError {
    BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl BoardRepository for InMemoryBoardRepository {
    async fn load(&self) -> BoardRepositoryResult<Board> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.clone())
    }

    async fn save(&self, board: &Board) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        *state = board.clone();
        Ok(())
    }

    async fn find_task(&self, id: &TaskId) -> BoardRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.task(id).cloned())
    }
}
