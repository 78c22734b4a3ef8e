//! Shared world state for board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use swimlane::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{Board, Task},
    services::{BoardStore, EditorError},
};

/// Store type used by the BDD world.
pub type TestBoardStore = BoardStore<InMemoryBoardRepository, DefaultClock>;

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub store: TestBoardStore,
    pub initial: Option<Board>,
    pub last_submit: Option<Result<Task, EditorError>>,
}

impl BoardWorld {
    /// Creates a world over an empty board; a given step seeds it.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: BoardStore::in_memory(Board::default(), Arc::new(DefaultClock)),
            initial: None,
            last_submit: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Splits a comma-separated step argument into trimmed items.
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
