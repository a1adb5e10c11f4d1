//! Geographic named-entity lookup.
//!
//! The classifier only needs one question answered: "which country and city names does this
//! text mention?". [`GeoLookup`] is that contract; [`GeoLexicon`] is the built-in answer, backed
//! by embedded name lists.
//!
//! Recognition works on capitalized word runs: `"Paris"` and `"New York"` are candidates,
//! `"paris"` and `"PARIS"` are not. Lexicon membership is case-insensitive.
//!
//! A run stops at any word that is not capitalized, so names with lowercase connectors
//! (`"Bosnia and Herzegovina"`, `"Rio de Janeiro"`) split into pieces and are never
//! recognized. The embedded lists leave such names out.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

const BUILTIN_COUNTRIES: &str = include_str!("data/countries.txt");
const BUILTIN_CITIES: &str = include_str!("data/cities.txt");

static CAPITALIZED_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\p{Lu}\p{Ll}+(?:[ \-]\p{Lu}\p{Ll}+)*").expect("Invalid regex: capitalized run")
});

static CAPITALIZED_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Lu}\p{Ll}+").expect("Invalid regex: capitalized word"));

static BUILTIN: Lazy<GeoLexicon> = Lazy::new(|| {
    GeoLexicon::from_names(lexicon_lines(BUILTIN_COUNTRIES), lexicon_lines(BUILTIN_CITIES))
});

/// Place names recognized in a piece of text, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Places {
    /// Recognized country names, as written in the text.
    pub countries: Vec<String>,
    /// Recognized city names, as written in the text. Never contains a country name.
    pub cities: Vec<String>,
}

/// A named-entity lookup for countries and cities.
pub trait GeoLookup: Send + Sync {
    /// Recognize place names in `text`. Unrecognized or empty text yields empty [`Places`].
    fn places(&self, text: &str) -> Places;
}

impl<T: GeoLookup + ?Sized> GeoLookup for &T {
    fn places(&self, text: &str) -> Places {
        (**self).places(text)
    }
}

/// Lexicon-backed [`GeoLookup`].
#[derive(Debug, Clone, Default)]
pub struct GeoLexicon {
    countries: HashSet<String>,
    cities: HashSet<String>,
    max_words: usize,
}

impl GeoLexicon {
    /// The embedded lexicon shipped with the crate.
    pub fn builtin() -> &'static GeoLexicon {
        &BUILTIN
    }

    /// Build a lexicon from explicit name lists.
    pub fn from_names<C, I, S>(countries: C, cities: I) -> Self
    where
        C: IntoIterator<Item = S>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let countries: HashSet<String> = countries.into_iter().map(|s| normalize(s.as_ref())).collect();
        let cities: HashSet<String> = cities.into_iter().map(|s| normalize(s.as_ref())).collect();
        let max_words = countries
            .iter()
            .chain(cities.iter())
            .map(|name| name.split([' ', '-']).count())
            .max()
            .unwrap_or(0);

        Self {
            countries,
            cities,
            max_words,
        }
    }

    /// Returns `true` if `name` is a known country (case-insensitive).
    pub fn is_country(&self, name: &str) -> bool {
        self.countries.contains(&normalize(name))
    }

    /// Returns `true` if `name` is a known city (case-insensitive).
    pub fn is_city(&self, name: &str) -> bool {
        self.cities.contains(&normalize(name))
    }
}

impl GeoLookup for GeoLexicon {
    fn places(&self, text: &str) -> Places {
        let mut places = Places::default();
        if self.max_words == 0 {
            return places;
        }

        for run in CAPITALIZED_RUN.find_iter(text) {
            let run = run.as_str();
            let words: Vec<(usize, usize)> = CAPITALIZED_WORD
                .find_iter(run)
                .map(|m| (m.start(), m.end()))
                .collect();

            // Longest match first at each word, so "New York" wins over "York".
            let mut i = 0;
            while i < words.len() {
                let longest = (i + self.max_words).min(words.len());
                let hit = (i + 1..=longest).rev().find_map(|j| {
                    let candidate = &run[words[i].0..words[j - 1].1];
                    let key = normalize(candidate);
                    if self.countries.contains(&key) {
                        Some((j, candidate, true))
                    } else if self.cities.contains(&key) {
                        Some((j, candidate, false))
                    } else {
                        None
                    }
                });

                match hit {
                    Some((next, candidate, true)) => {
                        places.countries.push(candidate.to_string());
                        i = next;
                    }
                    Some((next, candidate, false)) => {
                        places.cities.push(candidate.to_string());
                        i = next;
                    }
                    None => i += 1,
                }
            }
        }

        places
    }
}

/// Title-case `text`: a letter following a non-letter is upper-cased, any other letter is
/// lower-cased (`"new york"` becomes `"New York"`, `"o'neil"` becomes `"O'Neil"`).
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for ch in text.chars() {
        if prev_is_letter {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        prev_is_letter = ch.is_alphabetic();
    }
    out
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

fn lexicon_lines(text: &'static str) -> impl Iterator<Item = &'static str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

#[cfg(test)]
mod tests {
    use super::{lexicon_lines, title_case, GeoLexicon, GeoLookup, Places, BUILTIN_CITIES, BUILTIN_COUNTRIES};

    #[test]
    fn title_case_matches_word_boundaries() {
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case("NEW YORK"), "New York");
        assert_eq!(title_case("guinea-bissau"), "Guinea-Bissau");
        assert_eq!(title_case("3rd street"), "3Rd Street");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn longest_match_wins() {
        let lex = GeoLexicon::from_names(["Peru"], ["York", "New York"]);
        let places = lex.places("New York");
        assert_eq!(places.cities, vec!["New York".to_string()]);
        assert!(places.countries.is_empty());
    }

    #[test]
    fn country_shadows_city() {
        let lex = GeoLexicon::from_names(["Singapore"], ["Singapore"]);
        let places = lex.places("Singapore");
        assert_eq!(places.countries, vec!["Singapore".to_string()]);
        assert!(places.cities.is_empty());
    }

    #[test]
    fn lowercase_text_is_not_a_candidate() {
        let lex = GeoLexicon::builtin();
        assert!(lex.is_country("france"));
        assert!(lex.places("france").countries.is_empty());
        assert!(lex.places("").countries.is_empty());
    }

    #[test]
    fn empty_lexicon_recognizes_nothing() {
        let lex = GeoLexicon::from_names(Vec::<&str>::new(), Vec::<&str>::new());
        assert_eq!(lex.places("Paris"), Places::default());
    }

    #[test]
    fn every_builtin_name_is_recognized() {
        let lex = GeoLexicon::builtin();

        for name in lexicon_lines(BUILTIN_COUNTRIES) {
            assert_eq!(lex.places(name).countries, vec![name.to_string()], "country {name}");
            assert_eq!(title_case(name), name, "country {name}");
        }
        for name in lexicon_lines(BUILTIN_CITIES).filter(|name| !lex.is_country(name)) {
            assert_eq!(lex.places(name).cities, vec![name.to_string()], "city {name}");
            assert_eq!(title_case(name), name, "city {name}");
        }
    }

    #[test]
    fn lowercase_connectors_split_the_name() {
        let lex = GeoLexicon::from_names(["Bosnia and Herzegovina"], ["Rio de Janeiro"]);
        assert_eq!(lex.places("Bosnia and Herzegovina"), Places::default());
        assert_eq!(lex.places("Rio de Janeiro"), Places::default());
    }
}
