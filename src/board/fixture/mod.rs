//! Seed data for the board.
//!
//! The built-in seed holds four users, the `todo`, `in-progress`, `review`
//! and `done` columns, and eight tasks spread across them. A fixture file
//! with the same camelCase JSON shape can replace it.

use crate::board::domain::Board;
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

const SEED_JSON: &str = include_str!("seed.json");

/// Result type for fixture loading.
pub type FixtureResult<T> = Result<T, FixtureError>;

/// Errors returned while loading seed data.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read fixture {path}: {source}")]
    Read {
        /// Path that was attempted.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The fixture is not valid board JSON or violates board invariants.
    #[error("invalid fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Returns the built-in seed board.
///
/// # Errors
///
/// Returns [`FixtureError::Parse`] if the embedded seed is malformed.
pub fn seed_board() -> FixtureResult<Board> {
    parse_board(SEED_JSON)
}

/// Parses board JSON.
///
/// Tasks referencing unknown columns and repeated identifiers are rejected.
///
/// # Errors
///
/// Returns [`FixtureError::Parse`] for malformed JSON or invalid boards.
pub fn parse_board(json: &str) -> FixtureResult<Board> {
    Ok(serde_json::from_str(json)?)
}

/// Loads a board from a JSON fixture file.
///
/// # Errors
///
/// Returns [`FixtureError::Read`] when the file cannot be read and
/// [`FixtureError::Parse`] when its contents are not a valid board.
pub fn load_board(path: &Utf8Path) -> FixtureResult<Board> {
    let json = crate::files::read_to_string(path).map_err(|source| FixtureError::Read {
        path: path.to_owned(),
        source,
    })?;
    let board = parse_board(&json)?;
    tracing::info!(
        %path,
        columns = board.columns().len(),
        tasks = board.tasks().len(),
        "loaded board fixture"
    );
    Ok(board)
}
