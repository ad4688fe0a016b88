//! Fuzzy location matching between a candidate profile and a listing
//! location string.
//!
//! Listing locations arrive as free text ("Louisville / Lexington, KY",
//! "London (hybrid)"), so the listing side is split into fragments and each
//! fragment is compared against each candidate location by substring
//! containment or bounded edit distance.

use strsim::levenshtein;

use crate::resume::locations::normalize;

/// Maximum Levenshtein distance still considered a match. Tolerates minor
/// typos and abbreviation drift ("louisville" vs "louisvile") without letting
/// unrelated short strings collide — which is also why fragments of
/// normalized length ≤ 2 are discarded before comparison. Tunable; has not
/// been validated for long place names.
pub const MAX_EDIT_DISTANCE: usize = 2;

/// Characters that separate fragments in a listing location string.
const FRAGMENT_DELIMITERS: &[char] = &['/', ',', ';', '(', ')', '&'];

/// Splits a listing location into normalized fragments, dropping anything
/// too short to compare meaningfully.
fn fragments(listing_location: &str) -> Vec<String> {
    listing_location
        .split(FRAGMENT_DELIMITERS)
        .map(normalize)
        .filter(|f| f.len() > 2)
        .collect()
}

/// True if the candidate's locations are compatible with the listing's
/// location string.
///
/// An empty candidate set always matches: absence of signal must never
/// exclude a listing. Otherwise any (candidate, fragment) pair matches by
/// substring containment in either direction, or by edit distance within
/// `MAX_EDIT_DISTANCE`. Candidate locations are expected pre-normalized (as
/// produced by the profile extractor); fragments are normalized here, so the
/// comparison is case- and punctuation-insensitive on both sides.
pub fn locations_match(candidate_locations: &[String], listing_location: &str) -> bool {
    if candidate_locations.is_empty() {
        return true;
    }

    let frags = fragments(listing_location);
    candidate_locations.iter().any(|cand| {
        frags.iter().any(|frag| {
            frag.contains(cand.as_str())
                || cand.contains(frag.as_str())
                || levenshtein(cand, frag) <= MAX_EDIT_DISTANCE
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cands(locs: &[&str]) -> Vec<String> {
        locs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_profile_always_matches() {
        assert!(locations_match(&[], "Boston, MA"));
        assert!(locations_match(&[], "anywhere at all"));
        assert!(locations_match(&[], ""));
    }

    #[test]
    fn test_exact_fragment_match() {
        assert!(locations_match(&cands(&["louisville"]), "Louisville, KY"));
    }

    #[test]
    fn test_typo_within_edit_distance() {
        assert!(locations_match(&cands(&["louisville"]), "Louisvile, KY"));
    }

    #[test]
    fn test_unrelated_city_does_not_match() {
        assert!(!locations_match(&cands(&["louisville"]), "Boston, MA"));
    }

    #[test]
    fn test_substring_containment_either_direction() {
        // candidate inside fragment
        assert!(locations_match(
            &cands(&["lexington"]),
            "Greater Lexington Area"
        ));
        // fragment inside candidate
        assert!(locations_match(&cands(&["lexington ky"]), "Lexington"));
    }

    #[test]
    fn test_fragment_splitting_on_delimiters() {
        let listing = "Louisville / Lexington; Frankfort (KY) & Newport";
        assert!(locations_match(&cands(&["lexington"]), listing));
        assert!(locations_match(&cands(&["frankfort"]), listing));
        assert!(!locations_match(&cands(&["denver"]), listing));
    }

    #[test]
    fn test_short_fragments_are_discarded() {
        // "KY" normalizes to two characters and is dropped, so a candidate
        // "ky" has nothing to collide with.
        assert!(!locations_match(&cands(&["denver"]), "KY"));
    }

    #[test]
    fn test_edit_distance_boundary_is_two() {
        // distance 2: match
        assert!(locations_match(&cands(&["louisville"]), "Luisvile"));
        // distance 3: no match
        assert!(!locations_match(&cands(&["memphis"]), "Camphill"));
    }

    #[test]
    fn test_match_is_symmetric() {
        let pairs = [("louisville", "Louisvile"), ("austin tx", "Austin, TX")];
        for (a, b) in pairs {
            assert_eq!(
                locations_match(&cands(&[a]), b),
                locations_match(&cands(&[&normalize(b)]), a),
                "asymmetry for {a:?} vs {b:?}"
            );
        }
    }
}
