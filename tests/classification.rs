use rust_column_classifier::classify::{classify, Advisory, ColumnClassifier, ColumnTypeLabel};
use rust_column_classifier::geo::{GeoLexicon, GeoLookup, Places};
use rust_column_classifier::types::{Column, DataSet, Value};

fn single(values: Vec<Value>) -> ColumnTypeLabel {
    let ds = DataSet::new(vec![Column::new("col", values)]);
    classify(&ds).label_of("col").unwrap()
}

fn strings(values: &[&str]) -> Vec<Value> {
    values.iter().map(|s| Value::from(*s)).collect()
}

/// Recognizes every input as both a country and a city.
struct Ambiguous;

impl GeoLookup for Ambiguous {
    fn places(&self, text: &str) -> Places {
        Places {
            countries: vec![text.to_string()],
            cities: vec![text.to_string()],
        }
    }
}

#[test]
fn contact_sheet_scenario() {
    let ds = DataSet::new(vec![
        Column::new("Name", vec!["Alice", "Bob"]),
        Column::new(
            "Email",
            vec!["a@x.com", "b@y.com", "c@z.com", "d@w.com", "e@v.com"],
        ),
        Column::new("Phone", vec!["+1-202-555-0191"]),
    ]);

    let result = classify(&ds);
    assert_eq!(result.label_of("Name"), Some(ColumnTypeLabel::NameOrText));
    assert_eq!(result.label_of("Email"), Some(ColumnTypeLabel::EmailAddress));
    assert_eq!(result.label_of("Phone"), Some(ColumnTypeLabel::TelephoneNumber));
    assert_eq!(result.count_of(ColumnTypeLabel::EmailAddress), 1);
    assert_eq!(result.count_of(ColumnTypeLabel::TelephoneNumber), 1);
    assert_eq!(result.count_of(ColumnTypeLabel::NameOrText), 1);
    assert_eq!(
        result.advisories(),
        vec![Advisory::EmailsAndPhones { emails: 1, phones: 1 }]
    );
}

#[test]
fn many_email_columns_raise_advisory() {
    let columns = (0..5)
        .map(|i| Column::new(format!("email_{i}"), vec![format!("user{i}@example.com")]))
        .collect();
    let result = classify(&DataSet::new(columns));

    assert_eq!(result.count_of(ColumnTypeLabel::EmailAddress), 5);
    assert_eq!(result.advisories(), vec![Advisory::ManyEmailColumns { count: 5 }]);
}

#[test]
fn four_email_columns_do_not_raise_advisory() {
    let columns = (0..4)
        .map(|i| Column::new(format!("email_{i}"), vec![format!("user{i}@example.com")]))
        .collect();
    assert!(classify(&DataSet::new(columns)).advisories().is_empty());
}

#[test]
fn price_column_with_mixed_forms() {
    assert_eq!(single(strings(&["10.50", "20.00", "$5"])), ColumnTypeLabel::Price);
}

#[test]
fn price_wins_over_telephone() {
    assert_eq!(single(strings(&["123456"])), ColumnTypeLabel::Price);
    assert_eq!(single(vec![Value::Int64(5_551_234)]), ColumnTypeLabel::Price);
}

#[test]
fn integers_are_never_dates() {
    let label = single(vec![Value::Int64(1), Value::Int64(2), Value::Int64(3)]);
    assert_ne!(label, ColumnTypeLabel::Date);
    assert_eq!(label, ColumnTypeLabel::Price);

    assert_eq!(single(vec![Value::Int64(20240115)]), ColumnTypeLabel::Price);
}

#[test]
fn date_strings_are_dates() {
    assert_eq!(single(strings(&["2024-01-15", "not a date"])), ColumnTypeLabel::Date);
    assert_eq!(single(strings(&["Jan 15, 2024"])), ColumnTypeLabel::Date);
}

#[test]
fn float_column_is_price() {
    assert_eq!(
        single(vec![Value::Float64(10.5), Value::Float64(20.0)]),
        ColumnTypeLabel::Price
    );
}

#[test]
fn huge_floats_render_in_scientific_form_and_are_not_prices() {
    assert_eq!(single(vec![Value::Float64(1e16)]), ColumnTypeLabel::NameOrText);
    assert_eq!(single(vec![Value::Float64(1e15)]), ColumnTypeLabel::Price);
}

#[test]
fn any_matching_cell_decides() {
    assert_eq!(
        single(strings(&["hello", "world", "someone@example.com"])),
        ColumnTypeLabel::EmailAddress
    );
}

#[test]
fn url_column() {
    assert_eq!(
        single(strings(&["https://www.rust-lang.org/learn", "crates.io"])),
        ColumnTypeLabel::Url
    );
}

#[test]
fn countries_and_cities() {
    assert_eq!(single(strings(&["France", "Germany"])), ColumnTypeLabel::Country);
    assert_eq!(single(strings(&["Paris", "Lyon"])), ColumnTypeLabel::City);
    assert_eq!(single(strings(&["france", "germany"])), ColumnTypeLabel::NameOrText);
}

#[test]
fn country_checked_before_city() {
    let classifier = ColumnClassifier::with_geo(Ambiguous);
    let column = Column::new("place", vec!["Atlantis"]);
    assert_eq!(classifier.classify_column(&column), ColumnTypeLabel::Country);

    let lexicon = GeoLexicon::from_names(["France"], ["France", "Lyon"]);
    let classifier = ColumnClassifier::with_geo(&lexicon);
    let column = Column::new("place", vec!["France"]);
    assert_eq!(classifier.classify_column(&column), ColumnTypeLabel::Country);
}

#[test]
fn booleans_are_text() {
    assert_eq!(
        single(vec![Value::Bool(true), Value::Bool(false)]),
        ColumnTypeLabel::NameOrText
    );
}

#[test]
fn all_null_column_is_text_and_fully_missing() {
    let ds = DataSet::new(vec![Column::new("empty", vec![Value::Null, Value::Null, Value::Null])]);
    let result = classify(&ds);

    assert_eq!(result.label_of("empty"), Some(ColumnTypeLabel::NameOrText));
    assert_eq!(result.missing_of("empty"), 3);
    assert!(result.has_missing_values());
}

#[test]
fn nan_floats_are_missing() {
    let ds = DataSet::new(vec![Column::new(
        "score",
        vec![Value::Float64(f64::NAN), Value::Float64(1.5)],
    )]);
    let result = classify(&ds);

    assert_eq!(result.missing_of("score"), 1);
    assert_eq!(result.label_of("score"), Some(ColumnTypeLabel::Price));
}

#[test]
fn zero_length_column_is_text_without_missing_entry() {
    let ds = DataSet::new(vec![Column::new("nothing", Vec::<Value>::new())]);
    let result = classify(&ds);

    assert_eq!(result.label_of("nothing"), Some(ColumnTypeLabel::NameOrText));
    assert!(result.missing_values().is_empty());
}

#[test]
fn missing_values_only_list_columns_with_nulls() {
    let ds = DataSet::new(vec![
        Column::new("a", vec![Some("x"), None]),
        Column::new("b", vec!["y", "z"]),
        Column::new("c", vec![None::<&str>, None]),
    ]);
    let result = classify(&ds);

    assert_eq!(
        result.missing_values().to_vec(),
        vec![("a".to_string(), 1), ("c".to_string(), 2)]
    );
    assert_eq!(result.missing_of("b"), 0);
}

#[test]
fn counts_cover_every_label_and_sum_to_column_count() {
    let datasets = vec![
        DataSet::default(),
        DataSet::new(vec![Column::new("x", vec!["a"])]),
        DataSet::new(vec![
            Column::new("d", vec!["2024-01-01"]),
            Column::new("p", vec!["$1"]),
            Column::new("t", vec!["555-123-4567"]),
            Column::new("e", vec!["a@b.co"]),
            Column::new("u", vec!["example.com"]),
            Column::new("k", vec!["Japan"]),
            Column::new("c", vec!["Tokyo"]),
            Column::new("n", vec!["hello"]),
        ]),
    ];

    for ds in datasets {
        let result = classify(&ds);
        assert_eq!(result.type_counts().len(), ColumnTypeLabel::ALL.len());
        assert_eq!(result.type_counts().values().sum::<usize>(), ds.column_count());
        assert_eq!(result.total_columns(), ds.column_count());
    }
}

#[test]
fn one_column_per_label() {
    let ds = DataSet::new(vec![
        Column::new("d", vec!["2024-01-01"]),
        Column::new("p", vec!["$1"]),
        Column::new("t", vec!["555-123-4567"]),
        Column::new("e", vec!["a@b.co"]),
        Column::new("u", vec!["example.com"]),
        Column::new("k", vec!["Japan"]),
        Column::new("c", vec!["Tokyo"]),
        Column::new("n", vec!["hello"]),
    ]);
    let result = classify(&ds);

    let labels: Vec<ColumnTypeLabel> = result.column_types().iter().map(|(_, l)| *l).collect();
    assert_eq!(labels, ColumnTypeLabel::ALL.to_vec());
    for label in ColumnTypeLabel::ALL {
        assert_eq!(result.count_of(label), 1, "{label}");
    }
}

#[test]
fn classification_is_idempotent() {
    let ds = DataSet::new(vec![
        Column::new("when", vec![Some("2024-05-01"), None]),
        Column::new("where", vec!["Berlin", "Rome"]),
        Column::new("who", vec!["Ada", "Grace"]),
    ]);
    let classifier = ColumnClassifier::new();

    assert_eq!(classifier.classify(&ds), classifier.classify(&ds));
    assert_eq!(classify(&ds), classifier.classify(&ds));
}

#[test]
fn column_order_is_preserved() {
    let ds = DataSet::new(vec![
        Column::new("zeta", vec!["a"]),
        Column::new("alpha", vec!["b"]),
        Column::new("mid", vec!["c"]),
    ]);
    let names: Vec<String> = classify(&ds)
        .column_types()
        .iter()
        .map(|(n, _)| n.clone())
        .collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}
