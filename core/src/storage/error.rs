//! Error types for preference storage

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a storage backend.
///
/// These never reach callers of `PreferenceStore`; they are logged and the
/// caller's fallback is used instead.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,

    #[error("storage quota exceeded while writing {key}")]
    QuotaExceeded { key: String },

    #[error("failed to access preference file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("preference file {path} is corrupt")]
    CorruptFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode value for {key}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode value for {key}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage backend error: {0}")]
    Backend(String),
}
