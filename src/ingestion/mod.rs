//! Dataset loading.
//!
//! Most callers should use [`load_from_path`] (from [`unified`]) which:
//!
//! - auto-detects format by file extension (or you can override via [`LoadOptions`])
//! - loads the whole file into an in-memory [`crate::types::DataSet`]
//! - optionally hands a per-column [`LoadReport`] (or the error) to a [`LoadObserver`]
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - [`json`]

pub mod csv;
pub mod json;
pub mod observability;
pub mod unified;

pub use observability::{ColumnProfile, LoadObserver, LoadReport, TracingObserver};
pub use unified::{load_from_path, LoadFormat, LoadOptions};
