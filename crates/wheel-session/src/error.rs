//! Error types for wheel sessions.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while managing a wheel session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The operation is reserved for the admin.
    #[error("admin access required (log in with the admin PIN)")]
    AdminRequired,

    /// The entries or spin settings cannot change while the wheel turns.
    #[error("the wheel is spinning; try again when it stops")]
    Spinning,

    /// The supplied PIN did not match.
    #[error("wrong PIN")]
    WrongPin,

    /// An entry label was empty after trimming.
    #[error("entry label cannot be empty")]
    EmptyLabel,

    /// An entry index does not exist.
    #[error("no entry at index {index} (wheel has {len} entries)")]
    NoSuchEntry {
        /// The requested index.
        index: usize,
        /// Number of entries on the wheel.
        len: usize,
    },

    /// A demo wheel name was not recognized.
    #[error("unknown demo wheel: \"{0}\". Use: classroom, giveaway, teams")]
    UnknownDemo(String),

    /// Reading or writing a file failed.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The state file could not be parsed or written as JSON.
    #[error("invalid state file {}: {source}", path.display())]
    Json {
        /// The file involved.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}
