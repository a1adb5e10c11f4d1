use std::fmt;

use serde::Serialize;

/// Semantic type assigned to a column.
///
/// Variants are declared in classification priority order: when a column satisfies several
/// rules, the earliest variant wins. [`ColumnTypeLabel::NameOrText`] is the fallback and is
/// never tested directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ColumnTypeLabel {
    #[serde(rename = "Date")]
    Date,
    #[serde(rename = "Price")]
    Price,
    #[serde(rename = "Telephone Number")]
    TelephoneNumber,
    #[serde(rename = "Email Address")]
    EmailAddress,
    #[serde(rename = "Link (URL)")]
    Url,
    #[serde(rename = "Country")]
    Country,
    #[serde(rename = "City")]
    City,
    #[serde(rename = "Name or Text")]
    NameOrText,
}

impl ColumnTypeLabel {
    /// All labels, in priority order.
    pub const ALL: [ColumnTypeLabel; 8] = [
        ColumnTypeLabel::Date,
        ColumnTypeLabel::Price,
        ColumnTypeLabel::TelephoneNumber,
        ColumnTypeLabel::EmailAddress,
        ColumnTypeLabel::Url,
        ColumnTypeLabel::Country,
        ColumnTypeLabel::City,
        ColumnTypeLabel::NameOrText,
    ];

    /// Human-readable name used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnTypeLabel::Date => "Date",
            ColumnTypeLabel::Price => "Price",
            ColumnTypeLabel::TelephoneNumber => "Telephone Number",
            ColumnTypeLabel::EmailAddress => "Email Address",
            ColumnTypeLabel::Url => "Link (URL)",
            ColumnTypeLabel::Country => "Country",
            ColumnTypeLabel::City => "City",
            ColumnTypeLabel::NameOrText => "Name or Text",
        }
    }
}

impl fmt::Display for ColumnTypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
