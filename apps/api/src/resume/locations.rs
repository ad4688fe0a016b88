//! Location extraction — four independent passes unioned into one list.
//!
//! The policy favors recall: passes are OR-ed, never intersected, and every
//! admitted hit goes through the same normalization and stop-word gate. The
//! output preserves first-discovery order across passes A→B→C→D so parse
//! results are stable and reproducible.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::resume::entities::EntityRecognizer;
use crate::vocab::{LOCATION_INDICATORS, STOP_WORDS, UK_ALIASES, UK_PLACES, USA_ALIASES, US_STATES};

/// Minimum normalized length for an admitted location. "KY" alone is too
/// ambiguous; "Lexington, KY" survives as "lexington ky".
const MIN_LOCATION_LEN: usize = 3;

/// Canonical form of a location string: lower-cased, periods and commas
/// stripped, whitespace collapsed. Idempotent.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .replace(['.', ','], "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Admits a raw hit into the location list: normalize, then drop anything
/// too short, any stop-word, and any duplicate.
fn admit(locations: &mut Vec<String>, raw: &str) {
    let norm = normalize(raw);
    if norm.len() >= MIN_LOCATION_LEN
        && !STOP_WORDS.contains(&norm.as_str())
        && !locations.contains(&norm)
    {
        locations.push(norm);
    }
}

/// Runs all four passes over the span and returns the unioned location list.
pub fn extract_locations(span: &str, recognizer: &dyn EntityRecognizer) -> Vec<String> {
    let mut locations = Vec::new();
    pass_named_places(span, recognizer, &mut locations);
    pass_city_state_pairs(span, &mut locations);
    pass_indicator_contexts(span, &mut locations);
    pass_region_aliases(span, &mut locations);
    locations
}

/// Pass A: place hits from the entity recognizer.
fn pass_named_places(span: &str, recognizer: &dyn EntityRecognizer, out: &mut Vec<String>) {
    for hit in recognizer.places(span) {
        admit(out, &hit.text);
    }
}

/// `City, ST` — capitalized phrase followed by a two-letter uppercase code.
static CITY_STATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z][a-zA-Z]+(?:[ ][A-Z][a-zA-Z]+){0,2}),[ ]?([A-Z]{2})\b").unwrap()
});

/// The inverse `ST - City` form sometimes used in listing-style résumés.
static STATE_CITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z]{2})[ ]?-[ ]?([A-Z][a-zA-Z]+(?:[ ][A-Z][a-zA-Z]+){0,2})\b").unwrap()
});

/// Pass B: structured city/state pairs. Both forms are admitted in the same
/// canonical "city st" shape so they collapse into one entry.
fn pass_city_state_pairs(span: &str, out: &mut Vec<String>) {
    for caps in CITY_STATE_RE.captures_iter(span) {
        admit(out, &format!("{} {}", &caps[1], &caps[2]));
    }
    for caps in STATE_CITY_RE.captures_iter(span) {
        admit(out, &format!("{} {}", &caps[2], &caps[1]));
    }
}

/// An indicator word immediately followed by a capitalized place-like
/// phrase, with an optional `, ST` suffix captured along.
static INDICATOR_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = LOCATION_INDICATORS
        .iter()
        .map(|i| regex::escape(i))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"\b(?i:{alternation})[ ]+([A-Z][a-zA-Z]+(?:[ ][A-Z][a-zA-Z]+){{0,3}}(?:,[ ]?[A-Z]{{2}})?)"
    ))
    .unwrap()
});

/// Pass C: indicator-word contexts ("based in X", "relocated to Y", ...).
fn pass_indicator_contexts(span: &str, out: &mut Vec<String>) {
    for caps in INDICATOR_RE.captures_iter(span) {
        admit(out, &caps[1]);
    }
}

/// Word-bounded alternation over a set of fixed aliases. The trailing
/// boundary is only emitted for aliases that end in a word character
/// ("u.s.a." would otherwise never match).
fn alias_regex(tables: &[&[&str]]) -> Regex {
    let alternation = tables
        .iter()
        .flat_map(|t| t.iter())
        .map(|alias| {
            let mut p = String::from(r"\b");
            p.push_str(&regex::escape(alias));
            if alias.chars().last().is_some_and(|c| c.is_alphanumeric()) {
                p.push_str(r"\b");
            }
            p
        })
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){alternation}")).unwrap()
}

static USA_ALIAS_RE: Lazy<Regex> = Lazy::new(|| alias_regex(&[USA_ALIASES, US_STATES]));
static UK_ALIAS_RE: Lazy<Regex> = Lazy::new(|| alias_regex(&[UK_ALIASES, UK_PLACES]));

/// Pass D: fixed USA/UK region and country aliases.
fn pass_region_aliases(span: &str, out: &mut Vec<String>) {
    for m in USA_ALIAS_RE.find_iter(span) {
        admit(out, m.as_str());
    }
    for m in UK_ALIAS_RE.find_iter(span) {
        admit(out, m.as_str());
    }
}
