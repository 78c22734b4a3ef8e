//! Board state store: the single source of truth for board contents and the
//! transient dialog and search selection.

use crate::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{
        Board, BoardDomainError, Column, ColumnId, DialogState, SearchQuery, Task, TaskDraft,
        TaskId, TaskPatch, User,
    },
    fixture::{self, FixtureResult},
    ports::{BoardRepository, BoardRepositoryError},
};
use mockable::Clock;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tokio::sync::Mutex;

/// Service-level errors for board store operations.
#[derive(Debug, Error)]
pub enum BoardStoreError {
    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The referenced column does not exist.
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(BoardDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),

    /// The selection state lock was poisoned by a panicking writer.
    #[error("board selection state is poisoned")]
    StatePoisoned,
}

impl From<BoardDomainError> for BoardStoreError {
    fn from(err: BoardDomainError) -> Self {
        match err {
            BoardDomainError::TaskNotFound(id) => Self::TaskNotFound(id),
            BoardDomainError::ColumnNotFound(id) => Self::ColumnNotFound(id),
            other => Self::Domain(other),
        }
    }
}

/// Result type for board store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

#[derive(Debug, Default)]
struct Selection {
    search: SearchQuery,
    dialog: DialogState,
}

/// Board state store.
///
/// Built once by the composition root and handed to the drag orchestrator
/// and editor by reference. Mutations load the board, change it through the
/// domain aggregate and commit it back in one call; a failed mutation leaves
/// the stored board untouched. Mutations are serialised so concurrent
/// writers never commit over each other's snapshots.
pub struct BoardStore<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    selection: RwLock<Selection>,
    writer: Mutex<()>,
}

impl<C> BoardStore<InMemoryBoardRepository, C>
where
    C: Clock + Send + Sync,
{
    /// Creates a store over an in-memory repository holding `board`.
    #[must_use]
    pub fn in_memory(board: Board, clock: Arc<C>) -> Self {
        Self::new(Arc::new(InMemoryBoardRepository::with_board(board)), clock)
    }

    /// Creates a store over the built-in seed board.
    ///
    /// # Errors
    ///
    /// Returns [`fixture::FixtureError::Parse`] if the embedded seed is
    /// malformed.
    pub fn seeded(clock: Arc<C>) -> FixtureResult<Self> {
        Ok(Self::in_memory(fixture::seed_board()?, clock))
    }
}

impl<R, C> BoardStore<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    /// Creates a board store.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            selection: RwLock::new(Selection::default()),
            writer: Mutex::new(()),
        }
    }

    /// Returns the store's clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns a snapshot of the whole board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Repository`] when the board cannot be read.
    pub async fn snapshot(&self) -> BoardStoreResult<Board> {
        Ok(self.repository.load().await?)
    }

    /// Returns the columns sorted for display.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Repository`] when the board cannot be read.
    pub async fn sorted_columns(&self) -> BoardStoreResult<Vec<Column>> {
        let board = self.snapshot().await?;
        Ok(board.sorted_columns().into_iter().cloned().collect())
    }

    /// Returns the users available for assignment.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Repository`] when the board cannot be read.
    pub async fn users(&self) -> BoardStoreResult<Vec<User>> {
        Ok(self.snapshot().await?.users().to_vec())
    }

    /// Returns the tasks matching the active search query.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Repository`] or
    /// [`BoardStoreError::StatePoisoned`].
    pub async fn visible_tasks(&self) -> BoardStoreResult<Vec<Task>> {
        let query = self.search_query()?;
        let board = self.snapshot().await?;
        Ok(board.visible_tasks(&query).into_iter().cloned().collect())
    }

    /// Returns the tasks of one column matching the active search query.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::ColumnNotFound`] for an unknown column,
    /// [`BoardStoreError::Repository`] or
    /// [`BoardStoreError::StatePoisoned`].
    pub async fn column_tasks(&self, column_id: &ColumnId) -> BoardStoreResult<Vec<Task>> {
        let query = self.search_query()?;
        let board = self.snapshot().await?;
        if board.column(column_id).is_none() {
            return Err(BoardStoreError::ColumnNotFound(column_id.clone()));
        }
        Ok(board
            .column_tasks(column_id, &query)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Finds a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Repository`] when the lookup fails.
    pub async fn find_task(&self, id: &TaskId) -> BoardStoreResult<Option<Task>> {
        Ok(self.repository.find_task(id).await?)
    }

    /// Moves a task to `index` within `column_id`.
    ///
    /// The task's `updated_at` is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::TaskNotFound`],
    /// [`BoardStoreError::ColumnNotFound`] or
    /// [`BoardStoreError::Repository`].
    pub async fn move_task(
        &self,
        id: &TaskId,
        column_id: &ColumnId,
        index: usize,
    ) -> BoardStoreResult<()> {
        let _writer = self.writer.lock().await;
        let mut board = self.repository.load().await?;
        board.move_task(id, column_id, index).inspect_err(|err| {
            tracing::warn!(task_id = %id, column_id = %column_id, error = %err, "task move rejected");
        })?;
        self.repository.save(&board).await?;
        tracing::debug!(task_id = %id, column_id = %column_id, index, "moved task");
        Ok(())
    }

    /// Creates a task from a draft, appends it to the board and closes the
    /// add dialog.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::ColumnNotFound`] when the draft targets an
    /// unknown column, [`BoardStoreError::Repository`] or
    /// [`BoardStoreError::StatePoisoned`].
    pub async fn add_task(&self, draft: TaskDraft) -> BoardStoreResult<Task> {
        let _writer = self.writer.lock().await;
        let mut board = self.repository.load().await?;
        let task = Task::from_draft(TaskId::generate(), draft, &*self.clock);
        board.push_task(task.clone())?;
        self.repository.save(&board).await?;
        tracing::debug!(task_id = %task.id(), column_id = %task.column_id(), "added task");
        self.set_is_adding_task(false)?;
        Ok(task)
    }

    /// Shallow-merges a patch onto a task and closes the edit dialog.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::TaskNotFound`],
    /// [`BoardStoreError::ColumnNotFound`] when the patch targets an unknown
    /// column, [`BoardStoreError::Repository`] or
    /// [`BoardStoreError::StatePoisoned`].
    pub async fn update_task(&self, id: &TaskId, patch: TaskPatch) -> BoardStoreResult<Task> {
        let _writer = self.writer.lock().await;
        let mut board = self.repository.load().await?;
        let updated = board.update_task(id, patch)?.clone();
        self.repository.save(&board).await?;
        tracing::debug!(task_id = %id, "updated task");
        self.set_editing_task(None)?;
        Ok(updated)
    }

    /// Removes a task. A dialog open on the removed task is closed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::TaskNotFound`],
    /// [`BoardStoreError::Repository`] or
    /// [`BoardStoreError::StatePoisoned`].
    pub async fn delete_task(&self, id: &TaskId) -> BoardStoreResult<Task> {
        let _writer = self.writer.lock().await;
        let mut board = self.repository.load().await?;
        let removed = board.remove_task(id)?;
        self.repository.save(&board).await?;
        tracing::debug!(task_id = %id, "deleted task");
        self.update_selection(|selection| {
            if selection.dialog.task() == Some(id) {
                selection.dialog = DialogState::Closed;
            }
        })?;
        Ok(removed)
    }

    /// Moves a column to `index` in the display order and renumbers every
    /// column's order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::ColumnNotFound`] or
    /// [`BoardStoreError::Repository`].
    pub async fn reorder_column(&self, id: &ColumnId, index: usize) -> BoardStoreResult<()> {
        let _writer = self.writer.lock().await;
        let mut board = self.repository.load().await?;
        board.reorder_column(id, index)?;
        self.repository.save(&board).await?;
        tracing::debug!(column_id = %id, index, "reordered column");
        Ok(())
    }

    /// Returns the active search query.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::StatePoisoned`] if the selection lock is
    /// poisoned.
    pub fn search_query(&self) -> BoardStoreResult<SearchQuery> {
        self.read_selection(|selection| selection.search.clone())
    }

    /// Replaces the active search query.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::StatePoisoned`] if the selection lock is
    /// poisoned.
    pub fn set_search_query(&self, text: impl Into<String>) -> BoardStoreResult<()> {
        let query = SearchQuery::new(text);
        self.update_selection(|selection| selection.search = query)
    }

    /// Returns the dialog selection.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::StatePoisoned`] if the selection lock is
    /// poisoned.
    pub fn dialog(&self) -> BoardStoreResult<DialogState> {
        self.read_selection(|selection| selection.dialog.clone())
    }

    /// Opens or closes the add-task dialog.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::StatePoisoned`] if the selection lock is
    /// poisoned.
    pub fn set_is_adding_task(&self, adding: bool) -> BoardStoreResult<()> {
        self.update_selection(|selection| {
            selection.dialog = std::mem::take(&mut selection.dialog).with_adding(adding);
        })
    }

    /// Selects a task for editing, or clears the edit selection.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::StatePoisoned`] if the selection lock is
    /// poisoned.
    pub fn set_editing_task(&self, task: Option<TaskId>) -> BoardStoreResult<()> {
        self.update_selection(|selection| {
            selection.dialog = std::mem::take(&mut selection.dialog).with_editing(task);
        })
    }

    /// Selects a task for viewing, or clears the view selection.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::StatePoisoned`] if the selection lock is
    /// poisoned.
    pub fn set_viewing_task(&self, task: Option<TaskId>) -> BoardStoreResult<()> {
        self.update_selection(|selection| {
            selection.dialog = std::mem::take(&mut selection.dialog).with_viewing(task);
        })
    }

    /// Closes the dialog whatever its mode.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::StatePoisoned`] if the selection lock is
    /// poisoned.
    pub fn close_dialog(&self) -> BoardStoreResult<()> {
        self.update_selection(|selection| selection.dialog = DialogState::Closed)
    }

    fn read_selection<T>(&self, read: impl FnOnce(&Selection) -> T) -> BoardStoreResult<T> {
        let selection = self
            .selection
            .read()
            .map_err(|_| BoardStoreError::StatePoisoned)?;
        Ok(read(&selection))
    }

    fn update_selection(&self, update: impl FnOnce(&mut Selection)) -> BoardStoreResult<()> {
        let mut selection = self
            .selection
            .write()
            .map_err(|_| BoardStoreError::StatePoisoned)?;
        update(&mut selection);
        Ok(())
    }
}
