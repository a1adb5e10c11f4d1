//! CSV ingestion implementation.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::types::{Column, DataSet, DataType, Value};

/// Cell contents treated as missing, in addition to empty cells.
pub const DEFAULT_NULL_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Load a comma-separated file into an in-memory [`DataSet`].
///
/// Rules:
///
/// - The first row is the header and names the columns.
/// - Header names must be non-empty and unique.
/// - Every record must have as many fields as the header.
/// - Cells are trimmed; empty cells and [`DEFAULT_NULL_MARKERS`] become [`Value::Null`].
/// - Each column gets one physical type, inferred over its non-null cells.
pub fn load_csv_from_path(path: impl AsRef<Path>) -> LoadResult<DataSet> {
    load_delimited_from_path(path, b',')
}

/// Like [`load_csv_from_path`] but with an explicit field delimiter (e.g. `b'\t'`).
pub fn load_delimited_from_path(path: impl AsRef<Path>, delimiter: u8) -> LoadResult<DataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_path(path)?;
    load_csv_from_reader(&mut rdr)
}

/// Load CSV data from an existing CSV reader.
pub fn load_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> LoadResult<DataSet> {
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_owned()).collect();
    validate_headers(&headers)?;

    let mut raw_columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for result in rdr.records() {
        let record = result?;
        for (idx, column) in raw_columns.iter_mut().enumerate() {
            column.push(normalize_cell(record.get(idx).unwrap_or("")));
        }
    }

    let rows = raw_columns.first().map(Vec::len).unwrap_or(0);
    let columns = headers
        .into_iter()
        .zip(raw_columns)
        .map(|(name, cells)| {
            let data_type = infer_column_type(&cells);
            let values = cells
                .into_iter()
                .map(|cell| typed_value(cell, data_type))
                .collect::<Vec<Value>>();
            Column { name, values }
        })
        .collect();

    tracing::debug!(rows, "csv records read");
    Ok(DataSet::new(columns))
}

fn validate_headers(headers: &[String]) -> LoadResult<()> {
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::invalid("csv input has no header row"));
    }

    let mut seen = HashSet::with_capacity(headers.len());
    for (idx, h) in headers.iter().enumerate() {
        if h.is_empty() {
            return Err(LoadError::invalid(format!(
                "empty column name at position {}. headers={headers:?}",
                idx + 1
            )));
        }
        if !seen.insert(h.as_str()) {
            return Err(LoadError::invalid(format!(
                "duplicate column name '{h}'. headers={headers:?}"
            )));
        }
    }
    Ok(())
}

fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || DEFAULT_NULL_MARKERS.contains(&trimmed) {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Pick the narrowest type every non-null cell parses as.
fn infer_column_type(cells: &[Option<String>]) -> DataType {
    let present = || cells.iter().flatten();

    if present().next().is_none() {
        return DataType::Utf8;
    }
    if present().all(|s| s.parse::<i64>().is_ok()) {
        DataType::Int64
    } else if present().all(|s| parse_float(s).is_some()) {
        DataType::Float64
    } else if present().all(|s| parse_bool(s).is_some()) {
        DataType::Bool
    } else {
        DataType::Utf8
    }
}

fn typed_value(cell: Option<String>, data_type: DataType) -> Value {
    let Some(s) = cell else {
        return Value::Null;
    };

    // Inference guarantees the parse succeeds; fall back to text if it ever doesn't.
    match data_type {
        DataType::Int64 => s.parse::<i64>().map(Value::Int64).unwrap_or(Value::Utf8(s)),
        DataType::Float64 => parse_float(&s).map(Value::Float64).unwrap_or(Value::Utf8(s)),
        DataType::Bool => parse_bool(&s).map(Value::Bool).unwrap_or(Value::Utf8(s)),
        DataType::Utf8 => Value::Utf8(s),
    }
}

// Rust accepts "inf"/"infinity" spellings that a CSV author means as text.
fn parse_float(s: &str) -> Option<f64> {
    let v = s.parse::<f64>().ok()?;
    v.is_finite().then_some(v)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
