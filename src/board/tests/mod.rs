//! Unit tests for the board module.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod store_tests;

use crate::board::{
    domain::{Board, ColumnId, TaskId, UserId},
    fixture::seed_board,
};

pub(super) fn seed() -> Board {
    seed_board().expect("built-in seed parses")
}

pub(super) fn task_id(value: &str) -> TaskId {
    TaskId::new(value).expect("valid task id")
}

pub(super) fn column_id(value: &str) -> ColumnId {
    ColumnId::new(value).expect("valid column id")
}

pub(super) fn user_id(value: &str) -> UserId {
    UserId::new(value).expect("valid user id")
}

/// Task identifiers of one column, in column order.
pub(super) fn column_order(board: &Board, column: &str) -> Vec<String> {
    board
        .tasks()
        .iter()
        .filter(|task| task.column_id().as_str() == column)
        .map(|task| task.id().to_string())
        .collect()
}

/// Every task identifier in flat sequence order.
pub(super) fn flat_order(board: &Board) -> Vec<String> {
    board.tasks().iter().map(|task| task.id().to_string()).collect()
}
