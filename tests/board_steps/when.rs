//! When steps for board BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use swimlane::board::services::{DragOrchestrator, TaskEditor};

fn drop_on(world: &BoardWorld, active: &str, over: Option<&str>) -> Result<(), eyre::Report> {
    let mut drag = DragOrchestrator::new(&world.store);
    let started = run_async(drag.start(active))
        .wrap_err("start drag")?
        .is_some();
    if !started {
        return Err(eyre::eyre!("nothing to drag for {active}"));
    }
    run_async(drag.end(over)).wrap_err("drop")?;
    Ok(())
}

#[when(r#"task "{task}" is dropped on "{target}""#)]
fn task_dropped_on(
    world: &mut BoardWorld,
    task: String,
    target: String,
) -> Result<(), eyre::Report> {
    drop_on(world, &task, Some(&target))
}

#[when(r#"column "{column}" is dropped on "{target}""#)]
fn column_dropped_on(
    world: &mut BoardWorld,
    column: String,
    target: String,
) -> Result<(), eyre::Report> {
    drop_on(world, &column, Some(&target))
}

#[when(r#"task "{task}" is released outside any target"#)]
fn task_released_outside(world: &mut BoardWorld, task: String) -> Result<(), eyre::Report> {
    drop_on(world, &task, None)
}

#[when(r#"the form is submitted with title "{title}""#)]
fn submit_with_title(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let editor = TaskEditor::new(&world.store);
    let mut session = run_async(editor.open()).wrap_err("open editor session")?;
    session
        .form_mut()
        .wrap_err("form is editable")?
        .set_title(title);
    let result = run_async(editor.submit(&session));
    world.last_submit = Some(result);
    Ok(())
}

#[when("the task is deleted from the dialog")]
fn delete_from_dialog(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let editor = TaskEditor::new(&world.store);
    let session = run_async(editor.open()).wrap_err("open editor session")?;
    run_async(editor.delete(&session)).wrap_err("delete task")?;
    Ok(())
}
