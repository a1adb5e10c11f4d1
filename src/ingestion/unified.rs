//! Path-based loading.
//!
//! [`load_from_path`] picks a reader from [`LoadOptions::format`] or the file extension, reads
//! the whole file into a [`DataSet`] and, when an observer is set, hands it a [`LoadReport`]
//! (or the error).

use std::path::Path;
use std::sync::Arc;

use crate::error::{LoadError, LoadResult};
use crate::types::DataSet;

use super::observability::{LoadObserver, LoadReport};
use super::{csv, json};

/// Input formats [`load_from_path`] can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFormat {
    /// Comma-separated values.
    Csv,
    /// Tab-separated values.
    Tsv,
    /// JSON array of objects, a single object, or NDJSON.
    Json,
}

impl LoadFormat {
    /// Format for a file extension (case-insensitive), if it is one this crate reads.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "tsv" | "tab" => Some(Self::Tsv),
            "json" | "ndjson" | "jsonl" => Some(Self::Json),
            _ => None,
        }
    }

    /// Format implied by the extension of `path`.
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
    }

    fn read(self, path: &Path) -> LoadResult<DataSet> {
        match self {
            Self::Csv => csv::load_csv_from_path(path),
            Self::Tsv => csv::load_delimited_from_path(path, b'\t'),
            Self::Json => json::load_json_from_path(path),
        }
    }
}

/// Options for [`load_from_path`].
#[derive(Clone, Default)]
pub struct LoadOptions {
    /// Read as this format instead of going by the extension.
    pub format: Option<LoadFormat>,
    /// Receives the [`LoadReport`] or the failure.
    pub observer: Option<Arc<dyn LoadObserver>>,
}

/// Load a dataset from `path`.
///
/// # Errors
///
/// [`LoadError::UnsupportedFormat`] when no format is given and the extension is not one of
/// `csv`, `tsv`/`tab`, `json`/`ndjson`/`jsonl`; otherwise whatever the reader fails with. Every
/// error is passed to the observer before it is returned.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use rust_column_classifier::ingestion::{load_from_path, LoadOptions, TracingObserver};
///
/// # fn main() -> Result<(), rust_column_classifier::LoadError> {
/// let opts = LoadOptions {
///     observer: Some(Arc::new(TracingObserver)),
///     ..Default::default()
/// };
/// let ds = load_from_path("customers.csv", &opts)?;
/// println!("columns={}", ds.column_count());
/// # Ok(())
/// # }
/// ```
pub fn load_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> LoadResult<DataSet> {
    let path = path.as_ref();
    let outcome = options
        .format
        .map_or_else(|| LoadFormat::from_path(path), Ok)
        .and_then(|format| format.read(path).map(|ds| (format, ds)));

    let Some(observer) = options.observer.as_deref() else {
        return outcome.map(|(_, ds)| ds);
    };

    match outcome {
        Ok((format, ds)) => {
            observer.on_loaded(&LoadReport::new(path, format, &ds));
            Ok(ds)
        }
        Err(err) => {
            observer.on_failed(path, &err);
            Err(err)
        }
    }
}
