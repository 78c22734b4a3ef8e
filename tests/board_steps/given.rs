//! Given steps for board BDD scenarios.

use std::sync::Arc;

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use swimlane::board::{domain::TaskId, services::BoardStore};

#[given("the seeded board")]
fn seeded_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.store = BoardStore::seeded(Arc::new(DefaultClock)).wrap_err("seed the board")?;
    world.initial = Some(run_async(world.store.snapshot()).wrap_err("snapshot seeded board")?);
    Ok(())
}

#[given(r#"the search query "{text}""#)]
fn search_query(world: &mut BoardWorld, text: String) -> Result<(), eyre::Report> {
    world
        .store
        .set_search_query(text)
        .wrap_err("set search query")?;
    Ok(())
}

#[given("the add task dialog is open")]
fn add_dialog_open(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world
        .store
        .set_is_adding_task(true)
        .wrap_err("open add dialog")?;
    Ok(())
}

#[given(r#"task "{task}" is open for viewing"#)]
fn task_open_for_viewing(world: &mut BoardWorld, task: String) -> Result<(), eyre::Report> {
    let id = TaskId::new(task).wrap_err("parse task id")?;
    world
        .store
        .set_viewing_task(Some(id))
        .wrap_err("open view dialog")?;
    Ok(())
}
