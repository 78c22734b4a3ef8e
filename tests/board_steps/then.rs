//! Then steps for board BDD scenarios.

use super::world::{BoardWorld, run_async, split_list};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use swimlane::board::{
    domain::{ColumnId, TaskId},
    services::EditorError,
};

#[then(r#"column "{column}" lists "{tasks}""#)]
fn column_lists(world: &BoardWorld, column: String, tasks: String) -> Result<(), eyre::Report> {
    let board = run_async(world.store.snapshot()).wrap_err("snapshot board")?;
    let actual: Vec<String> = board
        .tasks()
        .iter()
        .filter(|task| task.column_id().as_str() == column)
        .map(|task| task.id().to_string())
        .collect();
    let expected = split_list(&tasks);
    if actual != expected {
        return Err(eyre::eyre!(
            "expected column {column} to list {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"task "{task}" belongs to column "{column}""#)]
fn task_in_column(world: &BoardWorld, task: String, column: String) -> Result<(), eyre::Report> {
    let id = TaskId::new(task).wrap_err("parse task id")?;
    let expected = ColumnId::new(column).wrap_err("parse column id")?;
    let found = run_async(world.store.find_task(&id))
        .wrap_err("look up task")?
        .ok_or_else(|| eyre::eyre!("task {id} is missing"))?;
    if found.column_id() != &expected {
        return Err(eyre::eyre!(
            "expected task {id} in {expected}, found {}",
            found.column_id()
        ));
    }
    Ok(())
}

#[then(r#"the columns are ordered "{columns}""#)]
fn columns_ordered(world: &BoardWorld, columns: String) -> Result<(), eyre::Report> {
    let sorted = run_async(world.store.sorted_columns()).wrap_err("load columns")?;
    let actual: Vec<String> = sorted.iter().map(|c| c.id().to_string()).collect();
    let expected = split_list(&columns);
    if actual != expected {
        return Err(eyre::eyre!(
            "expected column order {expected:?}, found {actual:?}"
        ));
    }
    let orders: Vec<i64> = sorted.iter().map(|c| c.order()).collect();
    if !orders.windows(2).all(|pair| matches!(pair, [a, b] if a < b)) {
        return Err(eyre::eyre!("column orders are not increasing: {orders:?}"));
    }
    Ok(())
}

#[then("the board is unchanged")]
fn board_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    let initial = world
        .initial
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing initial board in scenario world"))?;
    let current = run_async(world.store.snapshot()).wrap_err("snapshot board")?;
    if &current != initial {
        return Err(eyre::eyre!("board changed unexpectedly"));
    }
    Ok(())
}

#[then(r#"the new task is last in column "{column}""#)]
fn new_task_last_in_column(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let created = world
        .last_submit
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing submit result in scenario world"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected submit failure: {err}"))?;
    let board = run_async(world.store.snapshot()).wrap_err("snapshot board")?;
    let last_in_column = board
        .tasks()
        .iter()
        .rev()
        .find(|task| task.column_id().as_str() == column)
        .ok_or_else(|| eyre::eyre!("column {column} is empty"))?;
    if last_in_column.id() != created.id() {
        return Err(eyre::eyre!(
            "expected {} last in {column}, found {}",
            created.id(),
            last_in_column.id()
        ));
    }
    Ok(())
}

#[then("submission fails because the title is required")]
fn submission_requires_title(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_submit
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing submit result in scenario world"))?;
    if !matches!(result, Err(EditorError::EmptyTitle)) {
        return Err(eyre::eyre!("expected empty title error, got {result:?}"));
    }
    Ok(())
}

#[then("the dialog is closed")]
fn dialog_closed(world: &BoardWorld) -> Result<(), eyre::Report> {
    let dialog = world.store.dialog().wrap_err("read dialog state")?;
    if dialog.is_open() {
        return Err(eyre::eyre!("expected closed dialog, found {dialog:?}"));
    }
    Ok(())
}
