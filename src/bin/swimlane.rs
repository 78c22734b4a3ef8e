//! Renders a kanban board as JSON.
//!
//! Usage:
//!
//! ```text
//! swimlane [--config PATH] [--fixture PATH] [--search TEXT] [--log-level LEVEL]
//! ```
//!
//! The board is seeded from the built-in fixture unless a JSON fixture is
//! named on the command line or in the config file. The sorted columns, each
//! with its visible task cards, are written to stdout.

use clap::Parser;
use mockable::DefaultClock;
use std::io::Write;
use std::sync::Arc;
use swimlane::board::{domain::Board, fixture, services::BoardStore, views};
use swimlane::config::{BoardConfig, CliArgs};
use swimlane::telemetry;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = CliArgs::parse();
    let config = BoardConfig::load(&cli)?;
    if !telemetry::init(&config.log_level) {
        tracing::warn!("tracing subscriber already installed; log level not applied");
    }

    let board = load_board(&config)?;
    tracing::info!(
        columns = board.columns().len(),
        tasks = board.tasks().len(),
        "board seeded"
    );

    let store = BoardStore::in_memory(board, Arc::new(DefaultClock));
    store.set_search_query(config.search.as_str())?;

    let query = store.search_query()?;
    let snapshot = store.snapshot().await?;
    let rendered = views::board_view(&snapshot, &query);

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &rendered)?;
    writeln!(stdout)?;
    Ok(())
}

fn load_board(config: &BoardConfig) -> Result<Board, fixture::FixtureError> {
    match config.fixture.as_deref() {
        Some(path) => fixture::load_board(path),
        None => fixture::seed_board(),
    }
}
