//! Rendering of [`ClassificationResult`]s.
//!
//! The text form is meant for people; the JSON form carries the same fields for tools.

use std::io::{self, Write};

use serde::Serialize;

use crate::classify::ClassificationResult;

/// Message printed when no column has a missing cell.
pub const NO_MISSING_VALUES: &str = "No missing values found in any column.";

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a ClassificationResult,
    advisories: Vec<&'static str>,
}

/// Render the human-readable report.
///
/// ```text
/// Name: Name or Text
/// Email: Email Address
///
/// Data Type Counts:
/// Date: 0
/// ...
///
/// No missing values found in any column.
/// ```
///
/// followed by one line per advisory.
pub fn render_text(result: &ClassificationResult) -> String {
    let mut out = String::new();

    for (name, label) in result.column_types() {
        out.push_str(&format!("{name}: {label}\n"));
    }

    out.push_str("\nData Type Counts:\n");
    for (label, count) in result.type_counts() {
        out.push_str(&format!("{label}: {count}\n"));
    }

    if result.has_missing_values() {
        out.push_str("\nMissing Value Counts:\n");
        for (name, missing) in result.missing_values() {
            out.push_str(&format!(
                "Columns name is {name}, and it has {missing} missing values\n"
            ));
        }
    } else {
        out.push('\n');
        out.push_str(NO_MISSING_VALUES);
        out.push('\n');
    }

    for advisory in result.advisories() {
        out.push_str(advisory.message());
        out.push('\n');
    }

    out
}

/// Serialize the result (plus advisory messages) as pretty-printed JSON.
pub fn render_json(result: &ClassificationResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&json_report(result))
}

/// Write [`render_text`] output to `w`.
pub fn write_text<W: Write>(mut w: W, result: &ClassificationResult) -> io::Result<()> {
    w.write_all(render_text(result).as_bytes())?;
    w.flush()
}

/// Write [`render_json`] output to `w`, followed by a newline.
pub fn write_json<W: Write>(mut w: W, result: &ClassificationResult) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut w, &json_report(result))?;
    writeln!(w)?;
    w.flush()
}

fn json_report(result: &ClassificationResult) -> JsonReport<'_> {
    JsonReport {
        result,
        advisories: result.advisories().iter().map(|a| a.message()).collect(),
    }
}
