//! Core data model types.
//!
//! A [`DataSet`] is an ordered list of named [`Column`]s, each holding its cells as [`Value`]s.
//! Storage is column-major because every consumer in this crate walks one column at a time.

use std::fmt;

/// Physical type of a loaded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
}

/// A single cell in a [`Column`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value. A NaN [`Value::Float64`] also counts as missing, see
    /// [`Value::is_null`].
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Physical type of this value, or `None` for [`Value::Null`].
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Value::Null => None,
            Value::Int64(_) => Some(DataType::Int64),
            Value::Float64(_) => Some(DataType::Float64),
            Value::Bool(_) => Some(DataType::Bool),
            Value::Utf8(_) => Some(DataType::Utf8),
        }
    }

    /// Returns `true` for missing values: [`Value::Null`] and NaN floats.
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Float64(v) => v.is_nan(),
            _ => false,
        }
    }

    /// Returns the string slice if this value is genuinely textual.
    ///
    /// Numbers and booleans return `None`; use [`Value::as_text`] to coerce them.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Textual form of the value, or `None` for [`Value::Null`].
    ///
    /// - integers render in decimal (`42`)
    /// - floats use the shortest round-trip digits, with one fractional digit for integral values
    ///   (`1.0`) and scientific notation for very large or small magnitudes (`1e+16`, `1e-05`)
    /// - booleans render as `True` / `False`
    pub fn as_text(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Int64(v) => Some(v.to_string()),
            Value::Float64(v) => Some(float_text(*v)),
            Value::Bool(true) => Some("True".to_string()),
            Value::Bool(false) => Some("False".to_string()),
            Value::Utf8(s) => Some(s.clone()),
        }
    }
}

// Positional form for decimal exponents in [-4, 16), scientific (`1e+16`, `1.5e-05`) outside it.
fn float_text(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }

    // `{:e}` gives the shortest round-trip digits, e.g. "1.5e-5".
    let sci = format!("{v:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..16).contains(&exp) {
        let text = v.to_string();
        if text.contains('.') { text } else { format!("{text}.0") }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_text() {
            Some(text) => f.write_str(&text),
            None => f.write_str("null"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Utf8(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Utf8(s)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// A named, ordered sequence of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name (the header).
    pub name: String,
    /// Cells in row order.
    pub values: Vec<Value>,
}

impl Column {
    /// Create a new column.
    pub fn new<V: Into<Value>>(name: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of missing cells ([`Value::is_null`]).
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }
}

/// In-memory tabular dataset.
///
/// Columns keep their load order. Columns are expected to share one length but nothing here
/// enforces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet {
    /// Ordered columns.
    pub columns: Vec<Column>,
}

impl DataSet {
    /// Create a dataset from columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows (the length of the longest column).
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(Column::len).max().unwrap_or(0)
    }

    /// Iterate column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Returns the first column named `name`, if present.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}
