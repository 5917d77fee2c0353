//! Driver configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the terminal driver.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RewindConfig {
    /// Fallback `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Symbol drawn for player A's marks.
    #[serde(default = "default_mark_a_symbol")]
    mark_a_symbol: String,

    /// Symbol drawn for player B's marks.
    #[serde(default = "default_mark_b_symbol")]
    mark_b_symbol: String,

    /// Print the move list after every command.
    #[serde(default = "default_show_history")]
    show_history: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_mark_a_symbol() -> String {
    "♟️".to_string()
}

fn default_mark_b_symbol() -> String {
    "⚜️".to_string()
}

fn default_show_history() -> bool {
    true
}

impl Default for RewindConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            mark_a_symbol: default_mark_a_symbol(),
            mark_b_symbol: default_mark_b_symbol(),
            show_history: default_show_history(),
        }
    }
}

impl RewindConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(log_filter = %config.log_filter, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string; missing keys take defaults.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Builder-style override of both mark symbols.
    pub fn with_symbols(mut self, mark_a: impl Into<String>, mark_b: impl Into<String>) -> Self {
        self.mark_a_symbol = mark_a.into();
        self.mark_b_symbol = mark_b.into();
        self
    }

    /// Builder-style toggle for the move list.
    pub fn with_show_history(mut self, show_history: bool) -> Self {
        self.show_history = show_history;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
