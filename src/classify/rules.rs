//! Cell-level predicates and the ordered rule table.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::geo::{title_case, GeoLookup, Places};
use crate::types::Value;

use super::datetime::is_date_like;
use super::label::ColumnTypeLabel;

static PRICE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[$€]?\d+(\.\d{1,3})?[$€]?$").expect("Invalid regex: price"));

static TELEPHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+?[0-9() -]{7,15})$").expect("Invalid regex: telephone"));

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Invalid regex: email")
});

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?(www\.)?[\w\-]+(\.[\w\-]+)+([\w\-.,@?^=%&:/~+#]*[\w\-@?^=%&/~+#])?$")
        .expect("Invalid regex: url")
});

/// Decides whether one cell is evidence for a label.
pub(crate) type CellPredicate = fn(&Value, &dyn GeoLookup) -> bool;

/// Rules in priority order. A column gets the label of the first rule any of its cells
/// satisfies; [`ColumnTypeLabel::NameOrText`] has no rule.
pub(crate) const RULES: [(ColumnTypeLabel, CellPredicate); 7] = [
    (ColumnTypeLabel::Date, is_date_cell),
    (ColumnTypeLabel::Price, is_price_cell),
    (ColumnTypeLabel::TelephoneNumber, is_telephone_cell),
    (ColumnTypeLabel::EmailAddress, is_email_cell),
    (ColumnTypeLabel::Url, is_url_cell),
    (ColumnTypeLabel::Country, is_country_cell),
    (ColumnTypeLabel::City, is_city_cell),
];

// Only genuine strings count; numbers are never coerced into dates.
fn is_date_cell(value: &Value, _geo: &dyn GeoLookup) -> bool {
    value.as_str().is_some_and(is_date_like)
}

fn is_price_cell(value: &Value, _geo: &dyn GeoLookup) -> bool {
    text_matches(value, &PRICE)
}

fn is_telephone_cell(value: &Value, _geo: &dyn GeoLookup) -> bool {
    text_matches(value, &TELEPHONE)
}

fn is_email_cell(value: &Value, _geo: &dyn GeoLookup) -> bool {
    text_matches(value, &EMAIL)
}

fn is_url_cell(value: &Value, _geo: &dyn GeoLookup) -> bool {
    text_matches(value, &URL)
}

fn is_country_cell(value: &Value, geo: &dyn GeoLookup) -> bool {
    names_place(value, geo, |places| &places.countries)
}

fn is_city_cell(value: &Value, geo: &dyn GeoLookup) -> bool {
    names_place(value, geo, |places| &places.cities)
}

fn text_matches(value: &Value, re: &Regex) -> bool {
    value.as_text().is_some_and(|text| re.is_match(&text))
}

/// The whole (trimmed, title-cased) cell must be one of the names the lookup recognizes in it.
fn names_place(value: &Value, geo: &dyn GeoLookup, pick: fn(&Places) -> &Vec<String>) -> bool {
    let Some(text) = value.as_text() else {
        return false;
    };
    let text = text.trim();
    if text.is_empty() {
        return false;
    }

    let title = title_case(text);
    pick(&geo.places(text)).iter().any(|name| *name == title)
}
