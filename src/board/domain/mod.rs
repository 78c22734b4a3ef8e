//! Domain model for the kanban board.
//!
//! The board domain models users, ordered columns, the flat task sequence and
//! the pure operations over it (moving, reordering, filtering) while keeping
//! all infrastructure concerns outside of the domain boundary.

mod board;
mod column;
mod dialog;
mod error;
mod filter;
mod ids;
mod task;
mod user;

pub use board::{Board, BoardData};
pub use column::Column;
pub use dialog::DialogState;
pub use error::BoardDomainError;
pub use filter::SearchQuery;
pub use ids::{ColumnId, TaskId, UserId};
pub use task::{Priority, Task, TaskDraft, TaskPatch};
pub use user::User;
