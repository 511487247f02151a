//! Line data loading errors.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that can occur when loading line data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading the data file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data is not a valid line list
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Data parsed but is inconsistent
    #[error("invalid line data: {0}")]
    Domain(#[from] DomainError),
}
