//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive that overrides the
/// configured level.
pub const LOG_ENV: &str = "SWIMLANE_LOG";

/// Builds the event filter.
///
/// `SWIMLANE_LOG` wins, then `RUST_LOG`, then `level`. An unparsable level
/// falls back to `info`.
#[must_use]
pub fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_LEVEL))
}

/// Installs the global fmt subscriber writing to stderr.
///
/// Returns `false` when a global subscriber was already installed.
#[must_use]
pub fn init(level: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
