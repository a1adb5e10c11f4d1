//! `rust-column-classifier` infers a semantic type for every column of a tabular dataset.
//!
//! A column is labeled with one of eight [`classify::ColumnTypeLabel`]s: Date, Price,
//! Telephone Number, Email Address, Link (URL), Country, City, or the fallback Name or Text.
//! Alongside the labels, a [`classify::ClassificationResult`] carries per-label column counts
//! and per-column missing-value counts.
//!
//! ## Quick example: load and classify
//!
//! ```no_run
//! use rust_column_classifier::classify::classify;
//! use rust_column_classifier::ingestion::{load_from_path, LoadOptions};
//! use rust_column_classifier::report::render_text;
//!
//! # fn main() -> Result<(), rust_column_classifier::LoadError> {
//! // Auto-detects by extension (.csv/.tsv/.json/.ndjson).
//! let ds = load_from_path("data1.csv", &LoadOptions::default())?;
//! let result = classify(&ds);
//! print!("{}", render_text(&result));
//! # Ok(())
//! # }
//! ```
//!
//! ## Classification rules
//!
//! Rules are tried in this order; the first one that **any** cell of the column satisfies wins:
//!
//! 1. Date: a string cell that parses as a calendar date (numbers never count)
//! 2. Price: `^[$€]?\d+(\.\d{1,3})?[$€]?$`
//! 3. Telephone Number: `^(\+?[0-9() -]{7,15})$`
//! 4. Email Address: `local@domain.tld`
//! 5. Link (URL): optional scheme, optional `www.`, dotted host, optional path
//! 6. Country: the title-cased cell is a country name the [`geo::GeoLookup`] recognizes
//! 7. City: same, for city names (a name that is also a country is a Country)
//!
//! Missing cells ([`types::Value::Null`]) never satisfy a rule.
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV/TSV/JSON loading into a [`types::DataSet`]
//! - [`types`]: in-memory dataset types
//! - [`classify`]: the classifier, labels, results and advisories
//! - [`geo`]: country/city recognition
//! - [`report`]: text and JSON rendering
//! - [`error`]: error types used across loading

pub mod classify;
pub mod error;
pub mod geo;
pub mod ingestion;
pub mod report;
pub mod types;

pub use classify::{classify, ClassificationResult, ColumnClassifier, ColumnTypeLabel};
pub use error::{LoadError, LoadResult};
