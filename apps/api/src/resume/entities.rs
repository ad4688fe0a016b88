//! Entity recognition seam.
//!
//! The extraction passes only ever talk to the `EntityRecognizer` trait, so
//! the backend can be swapped (e.g. for an external NER service) without
//! touching any pass. The default backend is a deterministic gazetteer and
//! capitalization matcher: no model, same output for the same input, fully
//! testable offline.
//!
//! Known false-positive tendency of the default backend: a capitalized
//! sentence-initial word directly before an organization name is swallowed
//! into the hit ("Joined Acme Corp" → "Joined Acme Corp"). The contextual
//! work-cue filter downstream keeps most of these from mattering.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::vocab::{ORG_SUFFIXES, UK_PLACES, US_CITIES, US_STATES};

/// A single entity occurrence in a text span. `offset` is the byte offset of
/// the hit, used by callers that inspect the surrounding context.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityHit {
    pub text: String,
    pub offset: usize,
}

/// Recognizes place and organization names in free text.
///
/// Carried in `AppState` as `Arc<dyn EntityRecognizer>`.
pub trait EntityRecognizer: Send + Sync {
    fn places(&self, text: &str) -> Vec<EntityHit>;
    fn organizations(&self, text: &str) -> Vec<EntityHit>;
}

/// All concrete place names the default recognizer knows, compiled into one
/// word-bounded alternation, longest term first. An optional uppercase
/// state code is kept in the hit so "Austin" and "Austin, TX" normalize to
/// the same admitted location.
static PLACE_RE: Lazy<Regex> = Lazy::new(|| {
    let terms: BTreeSet<&str> = US_CITIES
        .iter()
        .chain(US_STATES)
        .chain(UK_PLACES)
        .copied()
        .collect();
    let mut terms: Vec<&str> = terms.into_iter().collect();
    terms.sort_by_key(|t| std::cmp::Reverse(t.len()));
    let alternation = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?i:{alternation})\b(?:,[ ]?[A-Z]{{2}})?")).unwrap()
});

/// A capitalized phrase of up to four words — candidate organization name.
static PROPER_PHRASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-zA-Z&]+(?:[ ][A-Z][a-zA-Z&]+){0,3}\b").unwrap());

/// Default recognizer: places come from the gazetteer alternation;
/// a capitalized phrase is an organization if its last word is a known
/// company suffix.
pub struct GazetteerRecognizer;

impl EntityRecognizer for GazetteerRecognizer {
    fn places(&self, text: &str) -> Vec<EntityHit> {
        PLACE_RE
            .find_iter(text)
            .map(|m| EntityHit {
                text: m.as_str().to_string(),
                offset: m.start(),
            })
            .collect()
    }

    fn organizations(&self, text: &str) -> Vec<EntityHit> {
        PROPER_PHRASE_RE
            .find_iter(text)
            .filter(|m| {
                let words: Vec<&str> = m.as_str().split_whitespace().collect();
                words.len() >= 2
                    && words
                        .last()
                        .map(|w| ORG_SUFFIXES.contains(&w.to_lowercase().as_str()))
                        .unwrap_or(false)
            })
            .map(|m| EntityHit {
                text: m.as_str().to_string(),
                offset: m.start(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_gazetteer_city() {
        let hits = GazetteerRecognizer.places("Visited Louisville last spring.");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "Louisville");
    }

    #[test]
    fn test_place_hit_keeps_state_suffix() {
        let hits = GazetteerRecognizer.places("Worked in Austin, TX for two years.");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "Austin, TX");
    }

    #[test]
    fn test_unknown_capitalized_word_is_not_a_place() {
        let hits = GazetteerRecognizer.places("Reported to Margaret every Monday.");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_multi_word_city() {
        let hits = GazetteerRecognizer.places("Based near Bowling Green since 2019.");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "Bowling Green");
    }

    #[test]
    fn test_org_requires_company_suffix() {
        let hits = GazetteerRecognizer.organizations("Two years at Acme Corp as an engineer.");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "Acme Corp");

        let none = GazetteerRecognizer.organizations("Two years at Acme as an engineer.");
        assert!(none.is_empty());
    }

    #[test]
    fn test_org_offset_points_at_hit() {
        let text = "Role at Beta Labs in 2020.";
        let hits = GazetteerRecognizer.organizations(text);
        assert_eq!(hits.len(), 1);
        assert_eq!(
            &text[hits[0].offset..hits[0].offset + hits[0].text.len()],
            "Beta Labs"
        );
    }
}
