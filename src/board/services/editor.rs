//! Task editor dialog: a form model in create, edit or view mode bound to
//! the board store's dialog selection.

use super::store::{BoardStore, BoardStoreError};
use crate::board::{
    domain::{ColumnId, DialogState, Priority, Task, TaskDraft, TaskId, TaskPatch, UserId},
    ports::BoardRepository,
};
use chrono::NaiveDate;
use mockable::Clock;
use thiserror::Error;

/// Labels offered by the editor. Tasks may also carry labels outside this
/// list.
pub const AVAILABLE_LABELS: [&str; 7] = [
    "Feature",
    "Bug",
    "Enhancement",
    "Documentation",
    "Design",
    "Backend",
    "Frontend",
];

/// Errors raised by editor operations.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The store's dialog selection is closed.
    #[error("no task dialog is open")]
    NoDialog,

    /// The session is in view mode.
    #[error("task is open read-only")]
    ReadOnly,

    /// The form title is blank.
    #[error("task title is required")]
    EmptyTitle,

    /// A new task has no column to go in.
    #[error("no column is selected for the task")]
    MissingColumn,

    /// The underlying store operation failed.
    #[error(transparent)]
    Store(#[from] BoardStoreError),
}

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// What an editor session does on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    /// Submitting creates a task.
    Create,
    /// Submitting updates the task.
    Edit(TaskId),
    /// The task is shown read-only.
    View(TaskId),
}

impl EditorMode {
    /// Returns the task the session is bound to, if any.
    #[must_use]
    pub const fn task_id(&self) -> Option<&TaskId> {
        match self {
            Self::Create => None,
            Self::Edit(id) | Self::View(id) => Some(id),
        }
    }
}

/// Editable task fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    title: String,
    description: String,
    priority: Priority,
    column_id: Option<ColumnId>,
    labels: Vec<String>,
    assignee_ids: Vec<UserId>,
    due_date: Option<NaiveDate>,
    estimated_time: String,
}

impl TaskForm {
    fn blank(column_id: Option<ColumnId>) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::Medium,
            column_id,
            labels: Vec::new(),
            assignee_ids: Vec::new(),
            due_date: None,
            estimated_time: String::new(),
        }
    }

    fn from_task(task: &Task) -> Self {
        Self {
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            priority: task.priority(),
            column_id: Some(task.column_id().clone()),
            labels: task.labels().to_vec(),
            assignee_ids: task.assignees().iter().map(|u| u.id().clone()).collect(),
            due_date: task.due_date(),
            estimated_time: task.estimated_time().unwrap_or_default().to_owned(),
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the selected column.
    #[must_use]
    pub const fn column_id(&self) -> Option<&ColumnId> {
        self.column_id.as_ref()
    }

    /// Returns the selected labels in selection order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the selected assignees in selection order.
    #[must_use]
    pub fn assignee_ids(&self) -> &[UserId] {
        &self.assignee_ids
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the estimated time text.
    #[must_use]
    pub fn estimated_time(&self) -> &str {
        &self.estimated_time
    }

    /// Sets the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Sets the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Sets the priority.
    pub const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Selects the column.
    pub fn set_column(&mut self, column_id: ColumnId) {
        self.column_id = Some(column_id);
    }

    /// Sets or clears the due date.
    pub const fn set_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.due_date = due_date;
    }

    /// Sets the estimated time. Blank text clears the estimate on submit.
    pub fn set_estimated_time(&mut self, estimated_time: impl Into<String>) {
        self.estimated_time = estimated_time.into();
    }

    /// Adds `label` when absent, removes it when present.
    pub fn toggle_label(&mut self, label: &str) {
        toggle(&mut self.labels, label.to_owned());
    }

    /// Adds `user_id` to the assignees when absent, removes it when present.
    pub fn toggle_assignee(&mut self, user_id: &UserId) {
        toggle(&mut self.assignee_ids, user_id.clone());
    }

    fn estimate(&self) -> Option<String> {
        let trimmed = self.estimated_time.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    }
}

fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if let Some(position) = items.iter().position(|existing| *existing == item) {
        items.remove(position);
    } else {
        items.push(item);
    }
}

/// An open dialog: its mode and form contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    mode: EditorMode,
    form: TaskForm,
}

impl EditorSession {
    /// Returns the session mode.
    #[must_use]
    pub const fn mode(&self) -> &EditorMode {
        &self.mode
    }

    /// Returns the form.
    #[must_use]
    pub const fn form(&self) -> &TaskForm {
        &self.form
    }

    /// Returns the form for editing.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::ReadOnly`] in view mode.
    pub fn form_mut(&mut self) -> EditorResult<&mut TaskForm> {
        if matches!(self.mode, EditorMode::View(_)) {
            return Err(EditorError::ReadOnly);
        }
        Ok(&mut self.form)
    }
}

/// Task dialog controller bound to a [`BoardStore`].
pub struct TaskEditor<'s, R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    store: &'s BoardStore<R, C>,
}

impl<'s, R, C> TaskEditor<'s, R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    /// Creates an editor over `store`.
    #[must_use]
    pub const fn new(store: &'s BoardStore<R, C>) -> Self {
        Self { store }
    }

    /// Opens a session matching the store's dialog selection.
    ///
    /// An add dialog starts blank with medium priority and the first sorted
    /// column; edit and view dialogs are prefilled from the task.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NoDialog`] when the dialog is closed and
    /// [`EditorError::Store`] when the selected task no longer exists.
    pub async fn open(&self) -> EditorResult<EditorSession> {
        match self.store.dialog()? {
            DialogState::Closed => Err(EditorError::NoDialog),
            DialogState::Adding => {
                let column_id = self
                    .store
                    .sorted_columns()
                    .await?
                    .first()
                    .map(|column| column.id().clone());
                Ok(EditorSession {
                    mode: EditorMode::Create,
                    form: TaskForm::blank(column_id),
                })
            }
            DialogState::Editing(id) => {
                let task = self.require_task(&id).await?;
                Ok(EditorSession {
                    mode: EditorMode::Edit(id),
                    form: TaskForm::from_task(&task),
                })
            }
            DialogState::Viewing(id) => {
                let task = self.require_task(&id).await?;
                Ok(EditorSession {
                    mode: EditorMode::View(id),
                    form: TaskForm::from_task(&task),
                })
            }
        }
    }

    /// Submits the form: creates a task or updates the edited one, then
    /// closes the dialog.
    ///
    /// Assignee identifiers that match no user are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::ReadOnly`] in view mode,
    /// [`EditorError::EmptyTitle`] for a blank title,
    /// [`EditorError::MissingColumn`] when no column is selected, and
    /// [`EditorError::Store`] when the store rejects the change.
    pub async fn submit(&self, session: &EditorSession) -> EditorResult<Task> {
        let form = &session.form;
        if let EditorMode::View(_) = session.mode {
            return Err(EditorError::ReadOnly);
        }
        if form.title.trim().is_empty() {
            return Err(EditorError::EmptyTitle);
        }
        let column_id = form.column_id.clone().ok_or(EditorError::MissingColumn)?;

        let users = self.store.users().await?;
        let assignees: Vec<_> = form
            .assignee_ids
            .iter()
            .filter_map(|id| users.iter().find(|user| user.id() == id).cloned())
            .collect();

        let task = match &session.mode {
            EditorMode::Edit(id) => {
                let patch = TaskPatch::new()
                    .with_title(form.title.clone())
                    .with_description(form.description.clone())
                    .with_priority(form.priority)
                    .with_column(column_id)
                    .with_labels(form.labels.clone())
                    .with_assignees(assignees)
                    .with_due_date(form.due_date)
                    .with_estimated_time(form.estimate())
                    .with_updated_at(self.store.clock().utc());
                self.store.update_task(id, patch).await?
            }
            EditorMode::Create | EditorMode::View(_) => {
                let mut draft = TaskDraft::new(form.title.clone(), column_id)
                    .with_description(form.description.clone())
                    .with_priority(form.priority)
                    .with_labels(form.labels.clone())
                    .with_assignees(assignees);
                if let Some(due_date) = form.due_date {
                    draft = draft.with_due_date(due_date);
                }
                if let Some(estimate) = form.estimate() {
                    draft = draft.with_estimated_time(estimate);
                }
                self.store.add_task(draft).await?
            }
        };
        self.store.close_dialog()?;
        Ok(task)
    }

    /// Deletes the session's task and closes the dialog.
    ///
    /// Create sessions have no task; they just close.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Store`] when the deletion fails.
    pub async fn delete(&self, session: &EditorSession) -> EditorResult<Option<Task>> {
        let removed = match session.mode.task_id() {
            Some(id) => Some(self.store.delete_task(id).await?),
            None => None,
        };
        self.close()?;
        Ok(removed)
    }

    /// Moves a view session into edit mode.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Store`] when the dialog selection cannot be
    /// updated.
    pub fn switch_to_edit(&self, session: &mut EditorSession) -> EditorResult<()> {
        if let EditorMode::View(id) = &session.mode {
            let task_id = id.clone();
            self.store.set_editing_task(Some(task_id.clone()))?;
            session.mode = EditorMode::Edit(task_id);
        }
        Ok(())
    }

    /// Closes the dialog.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Store`] when the dialog selection cannot be
    /// updated.
    pub fn close(&self) -> EditorResult<()> {
        Ok(self.store.close_dialog()?)
    }

    async fn require_task(&self, id: &TaskId) -> EditorResult<Task> {
        self.store
            .find_task(id)
            .await?
            .ok_or_else(|| EditorError::Store(BoardStoreError::TaskNotFound(id.clone())))
    }
}
