//! JSON ingestion implementation.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"a":1}, {"a":2}]`
//! - A single JSON object (one row)
//! - Newline-delimited JSON (NDJSON): `{"a":1}\n{"a":2}\n`
//!
//! Columns are the union of keys across rows, in first-seen order. Nested objects are flattened
//! into dot paths (`{"user":{"name":"Ada"}}` yields a `user.name` column).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Map;

use crate::error::{LoadError, LoadResult};
use crate::types::{Column, DataSet, Value};

/// Load JSON into an in-memory [`DataSet`].
pub fn load_json_from_path(path: impl AsRef<Path>) -> LoadResult<DataSet> {
    let text = fs::read_to_string(path)?;
    load_json_from_str(&text)
}

/// Load JSON from an in-memory string into a [`DataSet`].
pub fn load_json_from_str(input: &str) -> LoadResult<DataSet> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LoadError::invalid("json input is empty"));
    }

    if trimmed.starts_with('[') {
        return match serde_json::from_str::<serde_json::Value>(trimmed)? {
            serde_json::Value::Array(items) => load_json_values(&items),
            _ => Err(LoadError::invalid("json must be an object, an array of objects, or NDJSON")),
        };
    }

    // A single object, or NDJSON when the whole text is not one value.
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        match v {
            serde_json::Value::Object(_) => load_json_values(std::slice::from_ref(&v)),
            _ => Err(LoadError::invalid(
                "json must be an object, an array of objects, or NDJSON",
            )),
        }
    } else {
        // Fall back to NDJSON.
        let mut values = Vec::new();
        for (i, line) in trimmed.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let v = serde_json::from_str::<serde_json::Value>(line)
                .map_err(|e| LoadError::invalid(format!("invalid ndjson at line {}: {}", i + 1, e)))?;
            values.push(v);
        }
        load_json_values(&values)
    }
}

fn load_json_values(values: &[serde_json::Value]) -> LoadResult<DataSet> {
    let mut columns: Vec<Column> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (row_idx, v) in values.iter().enumerate() {
        let obj = v
            .as_object()
            .ok_or_else(|| LoadError::invalid(format!("row {} is not a json object", row_idx + 1)))?;

        let mut cells = Vec::new();
        flatten_object(obj, None, &mut cells);

        for (path, value) in cells {
            let col_idx = *index.entry(path.clone()).or_insert_with(|| {
                // Columns first seen on a later row are missing from all earlier rows.
                columns.push(Column {
                    name: path,
                    values: vec![Value::Null; row_idx],
                });
                columns.len() - 1
            });
            let column = &mut columns[col_idx];
            if column.values.len() > row_idx {
                return Err(LoadError::invalid(format!(
                    "row {} has duplicate field '{}'",
                    row_idx + 1,
                    column.name
                )));
            }
            column.values.push(value);
        }

        for column in columns.iter_mut() {
            if column.values.len() == row_idx {
                column.values.push(Value::Null);
            }
        }
    }

    Ok(DataSet::new(columns))
}

fn flatten_object(
    obj: &Map<String, serde_json::Value>,
    prefix: Option<&str>,
    out: &mut Vec<(String, Value)>,
) {
    for (key, v) in obj {
        let path = match prefix {
            Some(p) => format!("{p}.{key}"),
            None => key.clone(),
        };
        match v {
            serde_json::Value::Object(inner) if !inner.is_empty() => flatten_object(inner, Some(&path), out),
            _ => out.push((path, convert_json_value(v))),
        }
    }
}

fn convert_json_value(v: &serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int64(i),
            None => n.as_f64().map(Value::Float64).unwrap_or_else(|| Value::Utf8(n.to_string())),
        },
        serde_json::Value::String(s) => Value::Utf8(s.clone()),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Value::Utf8(v.to_string()),
    }
}
