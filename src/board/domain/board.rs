//! Board aggregate root: users, columns and the flat task sequence.

use super::{
    BoardDomainError, Column, ColumnId, SearchQuery, Task, TaskId, TaskPatch, User, UserId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Board aggregate root.
///
/// Tasks are kept in one flat sequence. The relative order of tasks sharing a
/// column identifier is their order within that column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    users: Vec<User>,
    columns: Vec<Column>,
    tasks: Vec<Task>,
}

/// Unvalidated board contents, as read from seed data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BoardData {
    /// Users available for assignment.
    #[serde(default)]
    pub users: Vec<User>,
    /// Board columns in any order.
    pub columns: Vec<Column>,
    /// Flat task sequence.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TryFrom<BoardData> for Board {
    type Error = BoardDomainError;

    fn try_from(data: BoardData) -> Result<Self, Self::Error> {
        Self::new(data.users, data.columns, data.tasks)
    }
}

impl Board {
    /// Creates a validated board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateColumn`] or
    /// [`BoardDomainError::DuplicateTask`] when identifiers repeat, and
    /// [`BoardDomainError::ColumnNotFound`] when a task references a column
    /// that is not on the board.
    pub fn new(
        users: Vec<User>,
        columns: Vec<Column>,
        tasks: Vec<Task>,
    ) -> Result<Self, BoardDomainError> {
        let mut column_ids = HashSet::new();
        for column in &columns {
            if !column_ids.insert(column.id()) {
                return Err(BoardDomainError::DuplicateColumn(column.id().clone()));
            }
        }

        let mut task_ids = HashSet::new();
        for task in &tasks {
            if !task_ids.insert(task.id()) {
                return Err(BoardDomainError::DuplicateTask(task.id().clone()));
            }
            if !column_ids.contains(task.column_id()) {
                return Err(BoardDomainError::ColumnNotFound(task.column_id().clone()));
            }
        }

        Ok(Self {
            users,
            columns,
            tasks,
        })
    }

    /// Returns the users available for assignment.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the columns in storage order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the flat task sequence.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the columns sorted by `order`, ties kept in storage order.
    #[must_use]
    pub fn sorted_columns(&self) -> Vec<&Column> {
        let mut sorted: Vec<&Column> = self.columns.iter().collect();
        sorted.sort_by_key(|column| column.order());
        sorted
    }

    /// Finds a column by identifier.
    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == id)
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Finds a user by identifier.
    #[must_use]
    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    /// Returns the tasks matching `query`, in stored order.
    #[must_use]
    pub fn visible_tasks(&self, query: &SearchQuery) -> Vec<&Task> {
        query.apply(&self.tasks).collect()
    }

    /// Returns the tasks of one column that match `query`, in stored order.
    #[must_use]
    pub fn column_tasks(&self, column_id: &ColumnId, query: &SearchQuery) -> Vec<&Task> {
        query
            .apply(&self.tasks)
            .filter(|task| task.column_id() == column_id)
            .collect()
    }

    /// Appends a task to the end of the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTask`] when the identifier is
    /// taken or [`BoardDomainError::ColumnNotFound`] when the task's column
    /// does not exist.
    pub fn push_task(&mut self, task: Task) -> Result<(), BoardDomainError> {
        if self.task(task.id()).is_some() {
            return Err(BoardDomainError::DuplicateTask(task.id().clone()));
        }
        self.require_column(task.column_id())?;
        self.tasks.push(task);
        Ok(())
    }

    /// Shallow-merges `patch` onto a task and returns the updated task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] for an unknown task and
    /// [`BoardDomainError::ColumnNotFound`] when the patch targets an unknown
    /// column. The board is unchanged on error.
    pub fn update_task(&mut self, id: &TaskId, patch: TaskPatch) -> Result<&Task, BoardDomainError> {
        if let Some(column_id) = patch.column_id() {
            self.require_column(column_id)?;
        }
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or_else(|| BoardDomainError::TaskNotFound(id.clone()))?;
        task.apply(patch);
        Ok(task)
    }

    /// Removes a task and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when no task has the
    /// identifier.
    pub fn remove_task(&mut self, id: &TaskId) -> Result<Task, BoardDomainError> {
        let position = self
            .position(id)
            .ok_or_else(|| BoardDomainError::TaskNotFound(id.clone()))?;
        Ok(self.tasks.remove(position))
    }

    /// Moves a task into `column_id` at `index` within that column.
    ///
    /// The index counts only tasks of the target column and is clamped to
    /// the column's size once the moved task has been taken out. Among the
    /// absolute positions that give the requested column position, the one
    /// nearest the task's previous slot is used, so moving a task to where
    /// it already is changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] or
    /// [`BoardDomainError::ColumnNotFound`]. The board is unchanged on error.
    pub fn move_task(
        &mut self,
        id: &TaskId,
        column_id: &ColumnId,
        index: usize,
    ) -> Result<(), BoardDomainError> {
        self.require_column(column_id)?;
        let from = self
            .position(id)
            .ok_or_else(|| BoardDomainError::TaskNotFound(id.clone()))?;

        let mut task = self.tasks.remove(from);
        task.set_column(column_id.clone());
        let at = insertion_point(&self.tasks, column_id, index, from);
        self.tasks.insert(at, task);
        Ok(())
    }

    /// Moves a column to `index` in the sorted column list and rewrites every
    /// column's order to its new position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnNotFound`] for an unknown column.
    pub fn reorder_column(&mut self, id: &ColumnId, index: usize) -> Result<(), BoardDomainError> {
        let mut sorted: Vec<Column> = self.sorted_columns().into_iter().cloned().collect();
        let from = sorted
            .iter()
            .position(|column| column.id() == id)
            .ok_or_else(|| BoardDomainError::ColumnNotFound(id.clone()))?;

        let column = sorted.remove(from);
        sorted.insert(index.min(sorted.len()), column);
        for (order, column) in (0_i64..).zip(sorted.iter_mut()) {
            column.set_order(order);
        }
        self.columns = sorted;
        Ok(())
    }

    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    fn require_column(&self, id: &ColumnId) -> Result<(), BoardDomainError> {
        if self.column(id).is_none() {
            return Err(BoardDomainError::ColumnNotFound(id.clone()));
        }
        Ok(())
    }
}

/// Chooses the absolute insertion point for a task entering `column_id` at
/// column-relative `index`, preferring `preferred` when it is a valid slot.
fn insertion_point(tasks: &[Task], column_id: &ColumnId, index: usize, preferred: usize) -> usize {
    let slots: Vec<usize> = tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| task.column_id() == column_id)
        .map(|(position, _)| position)
        .collect();
    let clamped = index.min(slots.len());

    let lower = clamped
        .checked_sub(1)
        .and_then(|previous| slots.get(previous))
        .map_or(0, |&position| position + 1);
    let upper = slots.get(clamped).copied().unwrap_or(tasks.len());

    preferred.max(lower).min(upper)
}
