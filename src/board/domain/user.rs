//! Board users that can be assigned to tasks.

use super::UserId;
use serde::{Deserialize, Serialize};

/// A user who can be assigned to tasks. Immutable once seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    avatar: String,
}

impl User {
    /// Creates a user record.
    #[must_use]
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            avatar: avatar.into(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the avatar image reference.
    #[must_use]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    /// Returns the avatar fallback: the first character of each name part.
    ///
    /// ```
    /// use swimlane::board::domain::{User, UserId};
    ///
    /// let id = UserId::new("user-1").expect("valid user id");
    /// let user = User::new(id, "Sarah Chen", "sarah@example.com", "/sarah.png");
    /// assert_eq!(user.initials(), "SC");
    /// ```
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}
