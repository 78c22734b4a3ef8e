//! Port contracts for the kanban board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod collision;
pub mod repository;

pub use collision::{CollisionStrategy, Droppable, Rect};
pub use repository::{BoardRepository, BoardRepositoryError, BoardRepositoryResult};
