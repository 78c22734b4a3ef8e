//! Board columns.

use super::ColumnId;
use serde::{Deserialize, Serialize};

/// A named, ordered lane grouping tasks by workflow stage.
///
/// `order` is only meaningful relative to other columns; values need not be
/// contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    title: String,
    order: i64,
}

impl Column {
    /// Creates a column.
    #[must_use]
    pub fn new(id: ColumnId, title: impl Into<String>, order: i64) -> Self {
        Self {
            id,
            title: title.into(),
            order,
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the column title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the relative sort key.
    #[must_use]
    pub const fn order(&self) -> i64 {
        self.order
    }

    pub(super) const fn set_order(&mut self, order: i64) {
        self.order = order;
    }
}
