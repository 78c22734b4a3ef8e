//! Configuration for the board binary.
//!
//! Values are layered, highest priority first:
//! 1. CLI arguments (and the environment variables clap maps onto them)
//! 2. The TOML file named by `--config`
//! 3. Compiled defaults

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use thiserror::Error;

/// Log filter used when neither the CLI nor the file sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

/// TOML file contents. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct BoardConfigFile {
    log_level: Option<String>,
    fixture: Option<Utf8PathBuf>,
    search: Option<String>,
}

/// CLI arguments for the board binary.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Render a kanban board as JSON")]
pub struct CliArgs {
    /// Path to a TOML config file.
    #[arg(short, long, env = "SWIMLANE_CONFIG")]
    pub config: Option<Utf8PathBuf>,

    /// Initial search query applied to the board.
    #[arg(short, long)]
    pub search: Option<String>,

    /// JSON board fixture replacing the built-in seed.
    #[arg(short, long)]
    pub fixture: Option<Utf8PathBuf>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, env = "SWIMLANE_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Log filter directive.
    pub log_level: String,
    /// Board fixture file; the built-in seed is used when absent.
    pub fixture: Option<Utf8PathBuf>,
    /// Initial search query.
    pub search: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            fixture: None,
            search: String::new(),
        }
    }
}

impl BoardConfig {
    /// Loads configuration from the CLI arguments and the optional config
    /// file they name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be read or parsed.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = match cli.config.as_deref() {
            Some(path) => load_config_file(path)?,
            None => BoardConfigFile::default(),
        };
        Ok(Self::resolve(cli, file))
    }

    /// Parses configuration from TOML text with no CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseToml`] for malformed TOML or unknown keys.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let file = toml::from_str(text)?;
        Ok(Self::resolve(&CliArgs::default(), file))
    }

    fn resolve(cli: &CliArgs, file: BoardConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            log_level: cli
                .log_level
                .clone()
                .or(file.log_level)
                .unwrap_or(defaults.log_level),
            fixture: cli.fixture.clone().or(file.fixture),
            search: cli
                .search
                .clone()
                .or(file.search)
                .unwrap_or(defaults.search),
        }
    }
}

fn load_config_file(path: &Utf8Path) -> Result<BoardConfigFile, ConfigError> {
    let contents = crate::files::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_owned(),
        source,
    })?;
    Ok(toml::from_str(&contents)?)
}
