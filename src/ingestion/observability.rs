//! Load-time reporting.
//!
//! After a successful load, [`super::load_from_path`] hands a [`LoadReport`] to the configured
//! [`LoadObserver`]: the shape of the dataset plus, per column, the physical type the loader
//! settled on and how many cells are missing. These are the same missing counts the classifier
//! reports later, so a caller can log them before classification starts.

use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::types::{Column, DataSet, DataType};

use super::unified::LoadFormat;

/// What the loader produced for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnProfile {
    /// Column name.
    pub name: String,
    /// Physical type shared by every non-missing cell; `None` when the column has no
    /// non-missing cells or mixes types (possible with JSON input).
    pub data_type: Option<DataType>,
    /// Missing cells, as counted by [`Column::null_count`].
    pub missing: usize,
}

impl ColumnProfile {
    fn of(column: &Column) -> Self {
        let mut types = column.values.iter().filter(|v| !v.is_null()).filter_map(|v| v.data_type());
        let data_type = types.next().filter(|first| types.all(|t| t == *first));

        Self {
            name: column.name.clone(),
            data_type,
            missing: column.null_count(),
        }
    }
}

/// Summary of one successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// The input path.
    pub path: PathBuf,
    /// Format the file was read as.
    pub format: LoadFormat,
    /// Number of data rows (header excluded).
    pub rows: usize,
    /// One profile per column, in dataset order.
    pub columns: Vec<ColumnProfile>,
}

impl LoadReport {
    /// Profile `dataset` as loaded from `path`.
    pub fn new(path: &Path, format: LoadFormat, dataset: &DataSet) -> Self {
        Self {
            path: path.to_path_buf(),
            format,
            rows: dataset.row_count(),
            columns: dataset.columns.iter().map(ColumnProfile::of).collect(),
        }
    }

    /// Missing cells across all columns.
    pub fn missing_cells(&self) -> usize {
        self.columns.iter().map(|c| c.missing).sum()
    }

    /// Columns where every cell is missing.
    pub fn empty_columns(&self) -> impl Iterator<Item = &ColumnProfile> {
        self.columns.iter().filter(move |c| c.missing == self.rows)
    }
}

/// Receives load outcomes.
pub trait LoadObserver: Send + Sync {
    /// Called once the dataset is in memory.
    fn on_loaded(&self, _report: &LoadReport) {}

    /// Called when the load fails, including when no format could be determined for `path`.
    fn on_failed(&self, _path: &Path, _error: &LoadError) {}
}

/// Forwards load outcomes to `tracing`.
///
/// A load logs one `info` event, one `debug` event per column, and a `warn` per column with no
/// values. Failures log at `error`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl LoadObserver for TracingObserver {
    fn on_loaded(&self, report: &LoadReport) {
        tracing::info!(
            path = %report.path.display(),
            format = ?report.format,
            rows = report.rows,
            columns = report.columns.len(),
            missing = report.missing_cells(),
            "dataset loaded"
        );
        for column in &report.columns {
            tracing::debug!(column = %column.name, data_type = ?column.data_type, missing = column.missing, "column loaded");
        }
        for column in report.empty_columns() {
            tracing::warn!(column = %column.name, "column has no values");
        }
    }

    fn on_failed(&self, path: &Path, error: &LoadError) {
        tracing::error!(path = %path.display(), %error, "dataset load failed");
    }
}
