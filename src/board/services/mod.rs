//! Application services for the kanban board.

mod drag;
mod editor;
mod store;

pub use drag::{DragOrchestrator, DragPayload, DragState, DropIntent, resolve_intent};
pub use editor::{
    AVAILABLE_LABELS, EditorError, EditorMode, EditorResult, EditorSession, TaskEditor, TaskForm,
};
pub use store::{BoardStore, BoardStoreError, BoardStoreResult};
