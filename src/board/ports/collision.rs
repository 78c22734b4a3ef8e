//! Collision detection port for drag gestures.
//!
//! Picking the drop target under a dragged element is geometry owned by the
//! rendering layer. The orchestrator only needs the winning droppable id.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in integer layout units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i64,
    /// Top edge.
    pub y: i64,
    /// Width, expected non-negative.
    pub width: i64,
    /// Height, expected non-negative.
    pub height: i64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the corners clockwise from top-left.
    #[must_use]
    pub const fn corners(&self) -> [(i64, i64); 4] {
        let right = self.x.saturating_add(self.width);
        let bottom = self.y.saturating_add(self.height);
        [
            (self.x, self.y),
            (right, self.y),
            (right, bottom),
            (self.x, bottom),
        ]
    }
}

/// A registered drop target: a column container or a task slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Droppable {
    /// Identifier of the column or task that owns the target.
    pub id: String,
    /// Current bounding box.
    pub rect: Rect,
}

impl Droppable {
    /// Creates a droppable.
    #[must_use]
    pub fn new(id: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            rect,
        }
    }
}

/// Strategy choosing the droppable a dragged rectangle is over.
pub trait CollisionStrategy: Send + Sync {
    /// Returns the identifier of the winning droppable, or `None` when there
    /// are no candidates.
    fn detect<'a>(&self, active: &Rect, droppables: &'a [Droppable]) -> Option<&'a str>;
}
