//! Column type classification.
//!
//! Each column is tested against an ordered list of rules (see [`ColumnTypeLabel`] for the
//! order). A rule holds for a column when **any** of its cells satisfies it; the first rule that
//! holds decides the label, and a column that satisfies none is
//! [`ColumnTypeLabel::NameOrText`].
//!
//! ```rust
//! use rust_column_classifier::classify::{classify, ColumnTypeLabel};
//! use rust_column_classifier::types::{Column, DataSet};
//!
//! let ds = DataSet::new(vec![
//!     Column::new("amount", vec!["10.50", "20.00", "$5"]),
//!     Column::new("country", vec!["France", "Germany"]),
//! ]);
//!
//! let result = classify(&ds);
//! assert_eq!(result.label_of("amount"), Some(ColumnTypeLabel::Price));
//! assert_eq!(result.label_of("country"), Some(ColumnTypeLabel::Country));
//! assert_eq!(result.count_of(ColumnTypeLabel::Price), 1);
//! ```

mod advisory;
pub mod datetime;
mod label;
mod rules;

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::geo::{GeoLexicon, GeoLookup};
use crate::types::{Column, DataSet};

pub use advisory::{check_type, Advisory, EMAIL_COLUMN_THRESHOLD};
pub use label::ColumnTypeLabel;

use rules::RULES;

/// Outcome of one classification run.
///
/// All three mappings keep dataset column order where order applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    #[serde(serialize_with = "ordered_map")]
    column_types: Vec<(String, ColumnTypeLabel)>,
    type_counts: BTreeMap<ColumnTypeLabel, usize>,
    #[serde(serialize_with = "ordered_map")]
    missing_values: Vec<(String, usize)>,
}

impl ClassificationResult {
    fn empty() -> Self {
        Self {
            column_types: Vec::new(),
            type_counts: ColumnTypeLabel::ALL.iter().map(|label| (*label, 0)).collect(),
            missing_values: Vec::new(),
        }
    }

    fn record(&mut self, name: &str, label: ColumnTypeLabel, missing: usize) {
        self.column_types.push((name.to_string(), label));
        *self.type_counts.entry(label).or_insert(0) += 1;
        if missing > 0 {
            self.missing_values.push((name.to_string(), missing));
        }
    }

    /// Column name and label pairs, in dataset order.
    pub fn column_types(&self) -> &[(String, ColumnTypeLabel)] {
        &self.column_types
    }

    /// Label of the first column named `name`.
    pub fn label_of(&self, name: &str) -> Option<ColumnTypeLabel> {
        self.column_types
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, label)| *label)
    }

    /// Per-label column counts. Every label is present, in priority order.
    pub fn type_counts(&self) -> &BTreeMap<ColumnTypeLabel, usize> {
        &self.type_counts
    }

    /// Number of columns classified as `label`.
    pub fn count_of(&self, label: ColumnTypeLabel) -> usize {
        self.type_counts.get(&label).copied().unwrap_or(0)
    }

    /// Columns with at least one missing cell, with their missing-cell counts.
    pub fn missing_values(&self) -> &[(String, usize)] {
        &self.missing_values
    }

    /// Missing-cell count of the first column named `name` (zero when it has none).
    pub fn missing_of(&self, name: &str) -> usize {
        self.missing_values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Returns `true` if any column has a missing cell.
    pub fn has_missing_values(&self) -> bool {
        !self.missing_values.is_empty()
    }

    /// Number of classified columns.
    pub fn total_columns(&self) -> usize {
        self.column_types.len()
    }

    /// Advisories derived from the label counts. See [`check_type`].
    pub fn advisories(&self) -> Vec<Advisory> {
        check_type(self)
    }
}

fn ordered_map<K, V, S>(pairs: &[(K, V)], serializer: S) -> Result<S::Ok, S::Error>
where
    K: Serialize,
    V: Serialize,
    S: Serializer,
{
    serializer.collect_map(pairs.iter().map(|(k, v)| (k, v)))
}

/// Assigns a [`ColumnTypeLabel`] to every column of a [`DataSet`].
///
/// The classifier holds no per-run state: classifying the same dataset twice yields equal
/// results.
#[derive(Debug, Clone)]
pub struct ColumnClassifier<G = &'static GeoLexicon> {
    geo: G,
}

impl ColumnClassifier {
    /// Classifier backed by the built-in [`GeoLexicon`].
    pub fn new() -> Self {
        Self {
            geo: GeoLexicon::builtin(),
        }
    }
}

impl Default for ColumnClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GeoLookup> ColumnClassifier<G> {
    /// Classifier that answers the Country and City rules with `geo`.
    pub fn with_geo(geo: G) -> Self {
        Self { geo }
    }

    /// Label for a single column.
    pub fn classify_column(&self, column: &Column) -> ColumnTypeLabel {
        RULES
            .iter()
            .find(|(_, holds)| column.values.iter().any(|v| holds(v, &self.geo)))
            .map(|(label, _)| *label)
            .unwrap_or(ColumnTypeLabel::NameOrText)
    }

    /// Classify every column, in dataset order.
    pub fn classify(&self, dataset: &DataSet) -> ClassificationResult {
        let mut result = ClassificationResult::empty();

        for column in &dataset.columns {
            let label = self.classify_column(column);
            let missing = column.null_count();
            tracing::debug!(column = %column.name, %label, missing, "column classified");
            result.record(&column.name, label, missing);
        }

        tracing::info!(
            columns = result.total_columns(),
            with_missing = result.missing_values.len(),
            "classification finished"
        );
        result
    }
}

/// Classify `dataset` with the default [`ColumnClassifier`].
pub fn classify(dataset: &DataSet) -> ClassificationResult {
    ColumnClassifier::new().classify(dataset)
}
