//! # Configuration
//!
//! Settings for the `castlequest` binary, read from a TOML file.
//!
//! ```toml
//! [game]
//! journal_file = "game_log.txt"
//! backpack_capacity = 5
//! # seed = 42
//!
//! [logging]
//! level = "warn"
//! # file = "castlequest.log"
//! ```
//!
//! Every key has a default, so a partial file (or none at all) still yields a
//! playable configuration. CLI flags override file values.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::adventure::{GameError, DEFAULT_BACKPACK_CAPACITY, DEFAULT_JOURNAL_FILE};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Where the session journal is written; truncated at every start.
    #[serde(default = "default_journal_file")]
    pub journal_file: String,
    #[serde(default = "default_backpack_capacity")]
    pub backpack_capacity: usize,
    /// Fixed seed for reproducible combat rolls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Send diagnostics here instead of stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_journal_file() -> String {
    DEFAULT_JOURNAL_FILE.to_string()
}

fn default_backpack_capacity() -> usize {
    DEFAULT_BACKPACK_CAPACITY
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            journal_file: default_journal_file(),
            backpack_capacity: default_backpack_capacity(),
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed `level`; unknown names fall back to `warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path.display(), e))?;

        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration file
    pub fn create_default(path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(&Config::default())
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path.display(), e))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.game.backpack_capacity == 0 {
            return Err(GameError::InvalidConfig(
                "game.backpack_capacity must be at least 1".to_string(),
            ));
        }
        if self.game.journal_file.trim().is_empty() {
            return Err(GameError::InvalidConfig(
                "game.journal_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
