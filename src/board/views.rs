//! Render projections of the board.
//!
//! Views are plain serializable data recomputed from a board snapshot on
//! every call; they never hold on to the board.

use crate::board::domain::{Board, Column, ColumnId, SearchQuery, Task, TaskId, User, UserId};
use chrono::NaiveDate;
use serde::Serialize;

/// Placeholder shown in the detail view for tasks without a description.
pub const EMPTY_DESCRIPTION: &str = "No description provided.";

/// An assignee as shown on cards and in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeView {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Avatar fallback initials.
    pub initials: String,
}

impl From<&User> for AssigneeView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().clone(),
            name: user.name().to_owned(),
            initials: user.initials(),
        }
    }
}

/// Summary card for one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCardView {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Task description, possibly empty.
    pub description: String,
    /// Priority badge text.
    pub priority: &'static str,
    /// Title of the task's column.
    pub column_title: String,
    /// Labels in display order.
    pub labels: Vec<String>,
    /// Short due date label such as `Feb 15`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_label: Option<String>,
    /// Estimated time text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    /// Assignees in display order.
    pub assignees: Vec<AssigneeView>,
}

impl TaskCardView {
    /// Builds the card for `task`, resolving its column title on `board`.
    #[must_use]
    pub fn new(board: &Board, task: &Task) -> Self {
        Self {
            id: task.id().clone(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            priority: task.priority().as_str(),
            column_title: column_title(board, task.column_id()),
            labels: task.labels().to_vec(),
            due_label: task.due_date().map(short_date),
            estimated_time: task.estimated_time().map(str::to_owned),
            assignees: task.assignees().iter().map(AssigneeView::from).collect(),
        }
    }
}

/// One column with the cards that match the active search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    /// Column identifier.
    pub id: ColumnId,
    /// Column title.
    pub title: String,
    /// Sort key.
    pub order: i64,
    /// Number of visible cards, shown in the column header.
    pub task_count: usize,
    /// Whether the empty-column placeholder is shown.
    pub is_empty: bool,
    /// Visible cards in column order.
    pub cards: Vec<TaskCardView>,
}

impl ColumnView {
    /// Builds the view of `column`, keeping the tasks that match `query`.
    #[must_use]
    pub fn new(board: &Board, column: &Column, query: &SearchQuery) -> Self {
        let cards: Vec<TaskCardView> = board
            .column_tasks(column.id(), query)
            .into_iter()
            .map(|task| TaskCardView::new(board, task))
            .collect();
        Self {
            id: column.id().clone(),
            title: column.title().to_owned(),
            order: column.order(),
            task_count: cards.len(),
            is_empty: cards.is_empty(),
            cards,
        }
    }
}

/// Read-only dialog contents for one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetailView {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Description, or a placeholder when the task has none.
    pub description: String,
    /// Priority badge text.
    pub priority: &'static str,
    /// Title of the task's column.
    pub column_title: String,
    /// Labels in display order.
    pub labels: Vec<String>,
    /// Long due date label such as `February 15, 2024`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_label: Option<String>,
    /// Estimated time text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    /// Assignees in display order.
    pub assignees: Vec<AssigneeView>,
}

impl TaskDetailView {
    /// Builds the detail view for `task`.
    #[must_use]
    pub fn new(board: &Board, task: &Task) -> Self {
        let description = if task.description().is_empty() {
            EMPTY_DESCRIPTION.to_owned()
        } else {
            task.description().to_owned()
        };
        Self {
            id: task.id().clone(),
            title: task.title().to_owned(),
            description,
            priority: task.priority().as_str(),
            column_title: column_title(board, task.column_id()),
            labels: task.labels().to_vec(),
            due_label: task.due_date().map(long_date),
            estimated_time: task.estimated_time().map(str::to_owned),
            assignees: task.assignees().iter().map(AssigneeView::from).collect(),
        }
    }
}

/// Projects every column, in sorted order, filtered by `query`.
#[must_use]
pub fn board_view(board: &Board, query: &SearchQuery) -> Vec<ColumnView> {
    board
        .sorted_columns()
        .into_iter()
        .map(|column| ColumnView::new(board, column, query))
        .collect()
}

/// Projects the detail view of one task, if it exists.
#[must_use]
pub fn task_detail(board: &Board, id: &TaskId) -> Option<TaskDetailView> {
    board.task(id).map(|task| TaskDetailView::new(board, task))
}

/// Formats a card due date, e.g. `Feb 15`.
#[must_use]
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Formats a detail view due date, e.g. `February 15, 2024`.
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn column_title(board: &Board, id: &ColumnId) -> String {
    board
        .column(id)
        .map(|column| column.title().to_owned())
        .unwrap_or_default()
}
