//! Snapshot persistence: the whole [`AppState`] in one JSON blob.
//!
//! Last write wins. Every save overwrites the full snapshot; there is no
//! partial write, no transaction, and no cross-process coordination. A
//! missing or unreadable snapshot is not an error condition: loading falls
//! back silently to the built-in default state.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::model::AppState;

/// Versioned storage key. Changes only on breaking schema changes; there is
/// no migration beyond the rename.
pub const STORAGE_KEY: &str = "linkpulse_master_state_v4";

/// Error from writing a snapshot. Loading never fails.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write snapshot to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize application state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File-backed store for the application snapshot.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// A store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The store at the per-user default location,
    /// `<data_dir>/linkpulse/<STORAGE_KEY>.json`.
    pub fn at_default_location() -> Self {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("linkpulse");
        path.push(format!("{STORAGE_KEY}.json"));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the snapshot, falling back to [`AppState::default`] when the
    /// file is missing or does not parse. Corruption is logged for
    /// diagnostics but never surfaced.
    pub fn load(&self) -> AppState {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                debug!(path = %self.path.display(), error = %err, "no snapshot, starting fresh");
                return AppState::default();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(state) => state,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "corrupt snapshot, using defaults");
                AppState::default()
            }
        }
    }

    /// Serializes and overwrites the full snapshot.
    pub fn save(&self, state: &AppState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let contents = serde_json::to_string(state)?;
        fs::write(&self.path, contents).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
