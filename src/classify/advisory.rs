use std::fmt;

use super::label::ColumnTypeLabel;
use super::ClassificationResult;

/// Email-column count above which [`Advisory::ManyEmailColumns`] is raised.
pub const EMAIL_COLUMN_THRESHOLD: usize = 4;

/// Informational observation derived from the per-label counts.
///
/// Advisories are computed after classification and never change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// More than [`EMAIL_COLUMN_THRESHOLD`] columns hold email addresses.
    ManyEmailColumns { count: usize },
    /// The dataset has both email-address and telephone-number columns.
    EmailsAndPhones { emails: usize, phones: usize },
}

impl Advisory {
    /// Advisory message as printed in the text report.
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::ManyEmailColumns { .. } => "There are 4 or more email addresses.",
            Advisory::EmailsAndPhones { .. } => "More than 0 emails and phone numbers",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Evaluate every advisory against `result`, in a fixed order.
pub fn check_type(result: &ClassificationResult) -> Vec<Advisory> {
    let emails = result.count_of(ColumnTypeLabel::EmailAddress);
    let phones = result.count_of(ColumnTypeLabel::TelephoneNumber);

    let mut out = Vec::new();
    if emails > EMAIL_COLUMN_THRESHOLD {
        out.push(Advisory::ManyEmailColumns { count: emails });
    }
    if emails > 0 && phones > 0 {
        out.push(Advisory::EmailsAndPhones { emails, phones });
    }
    out
}
