//! Search filtering over tasks.

use super::Task;
use serde::{Deserialize, Serialize};

/// Case-insensitive search text applied to task titles, descriptions and
/// labels.
///
/// An empty query matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Creates a query from raw user input.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the query filters nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` when the task's title, description or any label
    /// contains the query, ignoring case.
    ///
    /// ```
    /// use swimlane::board::domain::SearchQuery;
    ///
    /// assert!(SearchQuery::new("").is_empty());
    /// assert_eq!(SearchQuery::new("Auth").as_str(), "Auth");
    /// ```
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if self.is_empty() {
            return true;
        }
        let needle = self.0.to_lowercase();
        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);
        contains(task.title())
            || contains(task.description())
            || task.labels().iter().any(|label| contains(label))
    }

    /// Returns the matching tasks in their stored relative order.
    pub fn apply<'a, 'q>(
        &'q self,
        tasks: &'a [Task],
    ) -> impl Iterator<Item = &'a Task> + use<'a, 'q> {
        tasks.iter().filter(move |task| self.matches(task))
    }
}
