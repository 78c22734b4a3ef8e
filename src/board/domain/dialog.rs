//! Dialog selection state.
//!
//! Adding, editing and viewing are modes of one dialog, so the selection is a
//! single enum rather than three independent flags.

use super::TaskId;

/// Which task, if any, currently drives the task dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum DialogState {
    /// No dialog is shown.
    #[default]
    Closed,
    /// A new task is being created.
    Adding,
    /// An existing task is being edited.
    Editing(TaskId),
    /// An existing task is shown read-only.
    Viewing(TaskId),
}

impl DialogState {
    /// Returns `true` unless the dialog is closed.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Returns `true` while a task is being created.
    #[must_use]
    pub const fn is_adding(&self) -> bool {
        matches!(self, Self::Adding)
    }

    /// Returns the task under edit, if any.
    #[must_use]
    pub const fn editing_task(&self) -> Option<&TaskId> {
        match self {
            Self::Editing(id) => Some(id),
            _ => None,
        }
    }

    /// Returns the task being viewed, if any.
    #[must_use]
    pub const fn viewing_task(&self) -> Option<&TaskId> {
        match self {
            Self::Viewing(id) => Some(id),
            _ => None,
        }
    }

    /// Returns the task the dialog refers to, in either edit or view mode.
    #[must_use]
    pub const fn task(&self) -> Option<&TaskId> {
        match self {
            Self::Editing(id) | Self::Viewing(id) => Some(id),
            Self::Closed | Self::Adding => None,
        }
    }

    /// Opens or closes the add mode. Closing only affects an add dialog.
    #[must_use]
    pub fn with_adding(self, adding: bool) -> Self {
        match (adding, self) {
            (true, _) => Self::Adding,
            (false, Self::Adding) => Self::Closed,
            (false, other) => other,
        }
    }

    /// Starts editing a task, replacing any view selection, or stops editing.
    #[must_use]
    pub fn with_editing(self, task: Option<TaskId>) -> Self {
        match (task, self) {
            (Some(id), _) => Self::Editing(id),
            (None, Self::Editing(_)) => Self::Closed,
            (None, other) => other,
        }
    }

    /// Starts viewing a task or stops viewing.
    #[must_use]
    pub fn with_viewing(self, task: Option<TaskId>) -> Self {
        match (task, self) {
            (Some(id), _) => Self::Viewing(id),
            (None, Self::Viewing(_)) => Self::Closed,
            (None, other) => other,
        }
    }
}
