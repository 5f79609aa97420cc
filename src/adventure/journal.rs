//! Append-only record of notable game events.
//!
//! One plain sentence per line. A file journal is truncated when the session
//! starts; after that, write failures are logged and play continues.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::errors::GameError;

pub const DEFAULT_JOURNAL_FILE: &str = "game_log.txt";

enum Sink {
    File {
        path: PathBuf,
        writer: BufWriter<File>,
    },
    Memory(Vec<String>),
}

pub struct Journal {
    sink: Sink,
}

impl Journal {
    /// Create (or truncate) the journal file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Journal, GameError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| GameError::JournalOpen {
            path: path.clone(),
            source,
        })?;
        debug!("journal opened at {}", path.display());
        Ok(Journal {
            sink: Sink::File {
                path,
                writer: BufWriter::new(file),
            },
        })
    }

    /// Keep entries in memory instead of a file.
    pub fn in_memory() -> Journal {
        Journal {
            sink: Sink::Memory(Vec::new()),
        }
    }

    pub fn record(&mut self, entry: &str) {
        debug!("journal: {}", entry);
        match &mut self.sink {
            Sink::File { path, writer } => {
                // Flushed per line so the file is current if the process dies.
                if let Err(e) = writeln!(writer, "{}", entry).and_then(|_| writer.flush()) {
                    warn!("journal write to {} failed: {}", path.display(), e);
                }
            }
            Sink::Memory(entries) => entries.push(entry.to_string()),
        }
    }

    /// In-memory entries; empty for a file journal.
    pub fn entries(&self) -> &[String] {
        match &self.sink {
            Sink::Memory(entries) => entries,
            Sink::File { .. } => &[],
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.sink {
            Sink::File { path, .. } => Some(path),
            Sink::Memory(_) => None,
        }
    }
}

impl std::fmt::Debug for Journal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.sink {
            Sink::File { path, .. } => f.debug_struct("Journal").field("path", path).finish(),
            Sink::Memory(entries) => f
                .debug_struct("Journal")
                .field("entries", &entries.len())
                .finish(),
        }
    }
}
