//! Drag-and-drop orchestration: turns a pointer gesture into at most one
//! board mutation.

use super::store::{BoardStore, BoardStoreResult};
use crate::board::{
    adapters::geometry::ClosestCorners,
    domain::{Board, Column, ColumnId, SearchQuery, Task, TaskId},
    ports::{BoardRepository, CollisionStrategy, Droppable, Rect},
};
use mockable::Clock;

/// The entity picked up by the active gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    /// A task card.
    Task(Task),
    /// A whole column.
    Column(Column),
}

impl DragPayload {
    /// Returns the identifier of the dragged entity.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Task(task) => task.id().as_str(),
            Self::Column(column) => column.id().as_str(),
        }
    }
}

/// Gesture state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// An entity is being dragged.
    Dragging {
        /// The dragged entity, kept for overlay rendering.
        payload: DragPayload,
        /// The droppable currently under the pointer, if any.
        over: Option<String>,
    },
}

/// The mutation a drop resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropIntent {
    /// Move a task to a column-relative index.
    MoveTask {
        /// Task being moved.
        task_id: TaskId,
        /// Destination column.
        column_id: ColumnId,
        /// Index within the destination column's filtered task list.
        index: usize,
    },
    /// Move a column to a position in the sorted column list.
    ReorderColumn {
        /// Column being moved.
        column_id: ColumnId,
        /// Target position in the sorted column list.
        index: usize,
    },
    /// The drop changes nothing.
    None,
}

/// Resolves the intent of dropping `payload` onto the droppable `over_id`.
///
/// Task indices are computed against the tasks that match `query`, so a drop
/// position always refers to what is on screen.
#[must_use]
pub fn resolve_intent(
    board: &Board,
    query: &SearchQuery,
    payload: &DragPayload,
    over_id: Option<&str>,
) -> DropIntent {
    let Some(over_id) = over_id else {
        return DropIntent::None;
    };

    match payload {
        DragPayload::Task(task) => resolve_task_drop(board, query, task.id(), over_id),
        DragPayload::Column(column) => resolve_column_drop(board, column.id(), over_id),
    }
}

fn resolve_task_drop(
    board: &Board,
    query: &SearchQuery,
    task_id: &TaskId,
    over_id: &str,
) -> DropIntent {
    if let Some(column) = board.columns().iter().find(|c| c.id().as_str() == over_id) {
        return DropIntent::MoveTask {
            task_id: task_id.clone(),
            column_id: column.id().clone(),
            index: board.column_tasks(column.id(), query).len(),
        };
    }

    let Some(over_task) = board.tasks().iter().find(|t| t.id().as_str() == over_id) else {
        return DropIntent::None;
    };
    let column_id = over_task.column_id();
    let Some(index) = board
        .column_tasks(column_id, query)
        .iter()
        .position(|t| t.id() == over_task.id())
    else {
        return DropIntent::None;
    };

    DropIntent::MoveTask {
        task_id: task_id.clone(),
        column_id: column_id.clone(),
        index,
    }
}

fn resolve_column_drop(board: &Board, column_id: &ColumnId, over_id: &str) -> DropIntent {
    if column_id.as_str() == over_id {
        return DropIntent::None;
    }
    board
        .sorted_columns()
        .iter()
        .position(|c| c.id().as_str() == over_id)
        .map_or(DropIntent::None, |index| DropIntent::ReorderColumn {
            column_id: column_id.clone(),
            index,
        })
}

/// Drag-and-drop state machine over a [`BoardStore`].
///
/// `Idle -> Dragging -> Idle`. Only [`DragOrchestrator::end`] mutates the
/// board, and only once per gesture.
pub struct DragOrchestrator<'s, R, C, S = ClosestCorners>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
    S: CollisionStrategy,
{
    store: &'s BoardStore<R, C>,
    strategy: S,
    state: DragState,
}

impl<'s, R, C> DragOrchestrator<'s, R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    /// Creates an orchestrator using closest-corners collision detection.
    #[must_use]
    pub const fn new(store: &'s BoardStore<R, C>) -> Self {
        Self::with_strategy(store, ClosestCorners)
    }
}

impl<'s, R, C, S> DragOrchestrator<'s, R, C, S>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
    S: CollisionStrategy,
{
    /// Creates an orchestrator with a custom collision strategy.
    #[must_use]
    pub const fn with_strategy(store: &'s BoardStore<R, C>, strategy: S) -> Self {
        Self {
            store,
            strategy,
            state: DragState::Idle,
        }
    }

    /// Returns the gesture state.
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Returns the dragged entity while a gesture is active.
    #[must_use]
    pub const fn payload(&self) -> Option<&DragPayload> {
        match &self.state {
            DragState::Dragging { payload, .. } => Some(payload),
            DragState::Idle => None,
        }
    }

    /// Starts a gesture on `active_id`, matching tasks before columns.
    ///
    /// Unknown identifiers leave the orchestrator idle.
    ///
    /// # Errors
    ///
    /// Returns a store error when the board cannot be read.
    pub async fn start(&mut self, active_id: &str) -> BoardStoreResult<Option<&DragPayload>> {
        let board = self.store.snapshot().await?;
        let found = board
            .tasks()
            .iter()
            .find(|task| task.id().as_str() == active_id)
            .cloned()
            .map(DragPayload::Task)
            .or_else(|| {
                board
                    .columns()
                    .iter()
                    .find(|column| column.id().as_str() == active_id)
                    .cloned()
                    .map(DragPayload::Column)
            });

        self.state = match found {
            Some(payload) => {
                tracing::debug!(active_id, "drag started");
                DragState::Dragging {
                    payload,
                    over: None,
                }
            }
            None => {
                tracing::warn!(active_id, "drag started on unknown entity");
                DragState::Idle
            }
        };
        Ok(self.payload())
    }

    /// Picks the droppable nearest to the dragged rectangle and remembers it
    /// as the drop candidate.
    pub fn drag_over(&mut self, active: &Rect, droppables: &[Droppable]) -> Option<&str> {
        let candidate = self.strategy.detect(active, droppables).map(str::to_owned);
        self.hover(candidate)
    }

    /// Records `over_id` as the drop candidate. Ignored while idle.
    pub fn hover(&mut self, over_id: Option<String>) -> Option<&str> {
        match &mut self.state {
            DragState::Dragging { over, .. } => {
                *over = over_id;
                over.as_deref()
            }
            DragState::Idle => None,
        }
    }

    /// Ends the gesture over `over_id` and applies the resolved intent.
    ///
    /// The orchestrator returns to idle whether or not the drop mutates the
    /// board.
    ///
    /// # Errors
    ///
    /// Returns a store error when the board cannot be read or the mutation
    /// is rejected.
    pub async fn end(&mut self, over_id: Option<&str>) -> BoardStoreResult<DropIntent> {
        let DragState::Dragging { payload, .. } = std::mem::take(&mut self.state) else {
            return Ok(DropIntent::None);
        };

        let query = self.store.search_query()?;
        let board = self.store.snapshot().await?;
        let intent = resolve_intent(&board, &query, &payload, over_id);

        match &intent {
            DropIntent::MoveTask {
                task_id,
                column_id,
                index,
            } => self.store.move_task(task_id, column_id, *index).await?,
            DropIntent::ReorderColumn { column_id, index } => {
                self.store.reorder_column(column_id, *index).await?;
            }
            DropIntent::None => tracing::debug!(active_id = payload.id(), "drop ignored"),
        }
        Ok(intent)
    }

    /// Ends the gesture over the remembered drop candidate.
    ///
    /// # Errors
    ///
    /// See [`DragOrchestrator::end`].
    pub async fn drop_on_candidate(&mut self) -> BoardStoreResult<DropIntent> {
        let over = match &self.state {
            DragState::Dragging { over, .. } => over.clone(),
            DragState::Idle => None,
        };
        self.end(over.as_deref()).await
    }

    /// Aborts the gesture without touching the board.
    pub fn cancel(&mut self) {
        if let DragState::Dragging { payload, .. } = std::mem::take(&mut self.state) {
            tracing::debug!(active_id = payload.id(), "drag cancelled");
        }
    }
}
