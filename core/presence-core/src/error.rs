//! Error types for presence-core operations.
//!
//! The merge/resolve path is total and never errors; only configuration and
//! snapshot I/O can. Nothing here is ever shown to an end user — a failure
//! upstream manifests as an employee rendering Offline.

use std::path::PathBuf;

/// All errors that can occur in presence-core operations.
#[derive(Debug, thiserror::Error)]
pub enum PresenceError {
    #[error("Configuration file malformed: {path}: {details}")]
    ConfigMalformed { path: PathBuf, details: String },

    #[error("Configuration write failed: {path}: {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using PresenceError.
pub type Result<T> = std::result::Result<T, PresenceError>;

// Conversion for string error compatibility
impl From<PresenceError> for String {
    fn from(err: PresenceError) -> String {
        err.to_string()
    }
}
