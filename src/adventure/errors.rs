use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a game session.
///
/// Gameplay failures (full backpack, locked doors, unknown commands) are never
/// errors; they are reported to the player and the session continues.
#[derive(Debug, Error)]
pub enum GameError {
    /// The journal file could not be created or truncated at startup.
    #[error("cannot open journal {path}: {source}")]
    JournalOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to the console failed.
    #[error("console io error: {0}")]
    Console(#[from] std::io::Error),

    /// Configuration values that cannot produce a playable session.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
