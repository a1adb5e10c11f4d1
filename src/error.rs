use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for dataset loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type returned by loading functions.
///
/// Loading is the only fallible stage: once a [`crate::types::DataSet`] exists, classification
/// always succeeds.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The delimited text could not be read (bad quoting, ragged rows, invalid UTF-8, ...).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The JSON document could not be parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input parsed but is not tabular (no header, duplicate column names, non-object rows, ...).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// The input format could not be determined from the path.
    #[error("unsupported format for path ({})", path.display())]
    UnsupportedFormat { path: PathBuf },
}

impl LoadError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
