//! Permissive date/date-time recognition for the Date rule.
//!
//! Only the question "is this a calendar date?" matters here, so every accepted form is
//! normalized to a [`NaiveDateTime`] (midnight for date-only forms, first of the month for
//! year-month forms).
//!
//! Ambiguous day/month orders are resolved US-first: `03/04/2024` is March 4th. Strings made
//! only of digits (optionally with a sign or decimal point) are never dates, so numeric text
//! such as `"123456"` or `"10.50"` stays available to the later rules.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M %p",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%b-%Y %H:%M:%S", // 15-Jan-2024 10:30:00
    "%d-%b-%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%b %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y", // US first
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%m/%d/%y",
    "%d/%m/%y",
    "%d-%b-%Y",  // 15-Jan-2024
    "%d-%B-%Y",  // 15-January-2024
    "%Y-%b-%d",  // 2024-Jan-15
    "%b %d, %Y", // Jan 15, 2024
    "%B %d, %Y", // January 15, 2024
    "%b %d %Y",
    "%B %d %Y",
    "%d %b %Y", // 15 Jan 2024
    "%d %B %Y", // 15 January 2024
    "%A, %B %d, %Y",
    "%a, %b %d, %Y",
];

// Parsed by appending " 01" and "%d", since chrono needs a day to build a date.
const YEAR_MONTH_FORMATS: &[&str] = &["%Y-%m", "%Y/%m", "%m/%Y", "%b %Y", "%B %Y"];

/// Parse `value` as a calendar date or date-time.
///
/// Returns `None` for anything that is not recognizably a date, including empty and purely
/// numeric strings.
pub fn parse_date_like(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() || is_numeric_literal(value) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.naive_utc());
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Some(dt);
    }

    if let Some(d) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
    {
        return Some(d.and_time(NaiveTime::MIN));
    }

    let padded = format!("{value} 01");
    YEAR_MONTH_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&padded, &format!("{fmt} %d")).ok())
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Returns `true` if `value` parses as a date or date-time.
pub fn is_date_like(value: &str) -> bool {
    parse_date_like(value).is_some()
}

fn is_numeric_literal(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty()
        && digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
}

#[cfg(test)]
mod tests {
    use super::{is_date_like, parse_date_like};
    use chrono::{Datelike, Timelike};

    #[test]
    fn iso_and_rfc_forms() {
        let dt = parse_date_like("2024-01-15T10:30:00").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2024, 1, 15, 10));
        assert!(is_date_like("2024-01-15"));
        assert!(is_date_like("2024-01-15T10:30:00Z"));
        assert!(is_date_like("Tue, 1 Jul 2003 10:52:37 +0200"));
    }

    #[test]
    fn named_month_and_slash_forms() {
        assert!(is_date_like("Jan 15, 2024"));
        assert!(is_date_like("15 January 2024"));
        assert!(is_date_like("15-Jan-2024"));
        assert!(is_date_like("2024-03"));
        assert!(is_date_like("March 2024"));
    }

    #[test]
    fn us_order_wins_when_ambiguous() {
        let d = parse_date_like("03/04/2024").unwrap();
        assert_eq!((d.month(), d.day()), (3, 4));
        let d = parse_date_like("25/12/2024").unwrap();
        assert_eq!((d.month(), d.day()), (12, 25));
    }

    #[test]
    fn rejects_non_dates() {
        for s in [
            "", "   ", "Alice", "123456", "10.50", "20.00", "$5", "+1-202-555-0191", "2024-13-01",
            "a@x.com", "France",
        ] {
            assert!(!is_date_like(s), "{s:?} should not parse as a date");
        }
    }
}
