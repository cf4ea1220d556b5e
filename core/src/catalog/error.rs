//! Error types for loading source data

use std::path::PathBuf;
use thiserror::Error;

/// Errors while reading a catalog document
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not valid JSON")]
    Parse(#[from] serde_json::Error),
}
