//! Listing classifier — deterministic, precedence-ordered.
//!
//! 1. Kentucky patterns against the location. A hit short-circuits: the
//!    listing is `Kentucky`/`USA` no matter what else its text says.
//! 2. Remote vs hybrid keywords over description + location. Hybrid wins
//!    when both match.
//! 3. Region aliases, independent of step 2.
//!
//! Total over any input strings; unmatched text degrades to
//! `OnSite`/`Unknown`, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::listings::model::{ClassifiedListing, JobType, Listing, Region};
use crate::vocab::{
    HYBRID_KEYWORDS, KENTUCKY_PATTERNS, REMOTE_KEYWORDS, UK_ALIASES, UK_PLACES, USA_ALIASES,
    US_STATES,
};

/// Word-bounded alternation over alias tables, case-insensitive. A trailing
/// boundary is only emitted for entries ending in a word character so
/// dotted aliases like "u.s.a." stay matchable.
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

static KENTUCKY_RE: Lazy<Regex> = Lazy::new(|| alias_regex(&[KENTUCKY_PATTERNS]));
static USA_REGION_RE: Lazy<Regex> = Lazy::new(|| alias_regex(&[USA_ALIASES, US_STATES]));
static UK_REGION_RE: Lazy<Regex> = Lazy::new(|| alias_regex(&[UK_ALIASES, UK_PLACES]));

/// Classifies one description/location pair.
pub fn classify(description: &str, location: &str) -> (JobType, Region) {
    // Kentucky takes absolute precedence; region is implied.
    if KENTUCKY_RE.is_match(location) {
        return (JobType::Kentucky, Region::Usa);
    }

    let haystack = format!("{} {}", description, location).to_lowercase();

    let is_remote = REMOTE_KEYWORDS.iter().any(|k| haystack.contains(k));
    let is_hybrid = HYBRID_KEYWORDS.iter().any(|k| haystack.contains(k));

    let job_type = if is_remote && !is_hybrid {
        JobType::Remote
    } else if is_hybrid {
        JobType::Hybrid
    } else {
        JobType::OnSite
    };

    let region = if USA_REGION_RE.is_match(&haystack) {
        Region::Usa
    } else if UK_REGION_RE.is_match(&haystack) {
        Region::Uk
    } else {
        Region::Unknown
    };

    (job_type, region)
}

/// Annotates a listing without mutating it.
pub fn classify_listing(listing: Listing) -> ClassifiedListing {
    let (job_type, region) = classify(&listing.description, &listing.location);
    ClassifiedListing {
        listing,
        job_type,
        region,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kentucky_beats_remote() {
        let (job_type, region) = classify("Great role", "Remote - Louisville, KY");
        assert_eq!(job_type, JobType::Kentucky);
        assert_eq!(region, Region::Usa);
    }

    #[test]
    fn test_kentucky_beats_hybrid() {
        let (job_type, _) = classify("Hybrid schedule, flexible hours", "Lexington, KY");
        assert_eq!(job_type, JobType::Kentucky);
    }

    #[test]
    fn test_kentucky_scenario_from_description_hq() {
        let (job_type, region) = classify(
            "Fully remote engineering role, HQ in Lexington, KY",
            "Lexington, KY",
        );
        assert_eq!(job_type, JobType::Kentucky);
        assert_eq!(region, Region::Usa);
    }

    #[test]
    fn test_kentucky_city_patterns() {
        for loc in [
            "Louisville, KY",
            "Elizabethtown, KY",
            "Bowling Green, KY",
            "somewhere in Kentucky",
        ] {
            let (job_type, region) = classify("", loc);
            assert_eq!(job_type, JobType::Kentucky, "location {loc:?}");
            assert_eq!(region, Region::Usa, "location {loc:?}");
        }
    }

    #[test]
    fn test_ky_requires_word_boundary() {
        let (job_type, _) = classify("", "Tokyo, Japan");
        assert_eq!(job_type, JobType::OnSite);
    }

    #[test]
    fn test_remote_without_hybrid() {
        let (job_type, region) = classify("Fully remote, work from anywhere", "Remote");
        assert_eq!(job_type, JobType::Remote);
        assert_eq!(region, Region::Unknown);
    }

    #[test]
    fn test_hybrid_beats_remote() {
        let (job_type, _) = classify("Remote okay but hybrid preferred", "Boston, MA");
        assert_eq!(job_type, JobType::Hybrid);
    }

    #[test]
    fn test_hybrid_alone() {
        let (job_type, _) = classify("Flexible schedule available", "London");
        assert_eq!(job_type, JobType::Hybrid);
    }

    #[test]
    fn test_default_is_on_site() {
        let (job_type, region) = classify("Forklift operator, day shift", "Springfield");
        assert_eq!(job_type, JobType::OnSite);
        assert_eq!(region, Region::Unknown);
    }

    #[test]
    fn test_region_usa_from_description() {
        let (_, region) = classify("Must be authorized to work in the United States", "Remote");
        assert_eq!(region, Region::Usa);
    }

    #[test]
    fn test_region_uk_from_city() {
        let (job_type, region) = classify("On-site role", "Manchester");
        assert_eq!(job_type, JobType::OnSite);
        assert_eq!(region, Region::Uk);
    }

    #[test]
    fn test_region_is_independent_of_job_type() {
        let (job_type, region) = classify("Fully remote within England", "Remote");
        assert_eq!(job_type, JobType::Remote);
        assert_eq!(region, Region::Uk);
    }

    #[test]
    fn test_kentucky_alias_in_description_sets_usa_region_only() {
        // Kentucky in the description (not location) does not trigger the
        // Kentucky category, but still counts as a USA region alias.
        let (job_type, region) = classify("HQ relocated from Kentucky", "Remote");
        assert_eq!(job_type, JobType::Remote);
        assert_eq!(region, Region::Usa);
    }

    #[test]
    fn test_empty_inputs_degrade_gracefully() {
        let (job_type, region) = classify("", "");
        assert_eq!(job_type, JobType::OnSite);
        assert_eq!(region, Region::Unknown);
    }
}
