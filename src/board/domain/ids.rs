//! Identifier types for the board domain.
//!
//! Identifiers are opaque, non-empty strings. Seeded records keep their
//! fixture identifiers (`task-1`, `todo`, `user-3`); tasks created at runtime
//! receive a generated `task-<uuid>` identifier.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! string_identifier {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a validated identifier.
            ///
            /// # Errors
            ///
            /// Returns [`BoardDomainError::EmptyIdentifier`] when the value is
            /// empty after trimming.
            pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
                let raw = value.into();
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(BoardDomainError::EmptyIdentifier { kind: $kind });
                }
                Ok(Self(trimmed.to_owned()))
            }

            /// Returns the identifier as `str`.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = BoardDomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

string_identifier!(
    /// Unique identifier of a task on the board.
    TaskId,
    "task"
);

string_identifier!(
    /// Unique identifier of a board column.
    ColumnId,
    "column"
);

string_identifier!(
    /// Unique identifier of a board user.
    UserId,
    "user"
);

impl TaskId {
    /// Generates a fresh `task-<uuid>` identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("task-{}", Uuid::new_v4()))
    }
}
