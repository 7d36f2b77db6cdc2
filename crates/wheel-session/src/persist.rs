//! JSON persistence of a wheel session.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SessionError, SessionResult};
use crate::log::OutcomeLog;
use crate::store::EntryStore;

/// Everything about a session that survives between runs.
///
/// The wheel orientation is deliberately absent: it lives only as long as
/// the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    /// Entries in slice order.
    #[serde(default)]
    pub entries: EntryStore,
    /// The admin's remove-winner setting.
    #[serde(default = "default_remove_after")]
    pub remove_after_spin: bool,
    /// Spin history, newest first.
    #[serde(default)]
    pub log: OutcomeLog,
    /// Whether the admin PIN was entered.
    #[serde(default)]
    pub admin: bool,
}

fn default_remove_after() -> bool {
    true
}

impl Default for SavedState {
    fn default() -> Self {
        Self {
            entries: EntryStore::default(),
            remove_after_spin: default_remove_after(),
            log: OutcomeLog::new(),
            admin: false,
        }
    }
}

impl SavedState {
    /// Load state from `path`, or the defaults if the file does not exist.
    pub fn load(path: &Path) -> SessionResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no state file; using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let state: Self = serde_json::from_str(&content).map_err(|source| SessionError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            entries = state.entries.len(),
            records = state.log.len(),
            "loaded state"
        );
        Ok(state)
    }

    /// Write state to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> SessionResult<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| SessionError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "saved state");
        Ok(())
    }
}
