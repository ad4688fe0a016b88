//! Profile-vs-listings filter policy.
//!
//! A listing survives the filter when its location fuzzy-matches the
//! candidate's locations, OR when it is a remote listing and the candidate
//! either has remote experience or explicitly opted into remote results.
//! The two criteria are OR-ed: location and remote are independent routes in.

use serde::Deserialize;

use crate::listings::classify::classify_listing;
use crate::listings::model::{ClassifiedListing, Listing};
use crate::matching::fuzzy::locations_match;
use crate::resume::profile::CandidateProfile;

/// Caller-controlled filter switches.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Include remote listings even when the profile shows no remote
    /// experience.
    #[serde(default)]
    pub include_remote: bool,
}

/// Filters and classifies listings against a candidate profile.
/// Annotation happens after filtering so excluded listings are never
/// classified needlessly.
pub fn filter_listings(
    listings: Vec<Listing>,
    profile: &CandidateProfile,
    options: FilterOptions,
) -> Vec<ClassifiedListing> {
    listings
        .into_iter()
        .filter(|listing| {
            let location_matches = locations_match(&profile.locations, &listing.location);
            let remote_matches = (profile.has_remote_experience || options.include_remote)
                && listing.location.to_lowercase().contains("remote");
            location_matches || remote_matches
        })
        .map(classify_listing)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::model::JobType;

    fn listing(name: &str, location: &str, description: &str) -> Listing {
        Listing {
            name: name.into(),
            location: location.into(),
            description: description.into(),
            url: None,
            extra: Default::default(),
        }
    }

    fn profile(locations: &[&str], remote: bool) -> CandidateProfile {
        CandidateProfile {
            locations: locations.iter().map(|s| s.to_string()).collect(),
            has_remote_experience: remote,
            organizations: vec![],
        }
    }

    #[test]
    fn test_empty_profile_keeps_everything() {
        let listings = vec![
            listing("A", "Boston, MA", ""),
            listing("B", "London", ""),
        ];
        let kept = filter_listings(listings, &profile(&[], false), FilterOptions::default());
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_location_route() {
        let listings = vec![
            listing("A", "Louisville, KY", ""),
            listing("B", "Boston, MA", ""),
        ];
        let kept = filter_listings(
            listings,
            &profile(&["louisville"], false),
            FilterOptions::default(),
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].listing.name, "A");
        assert_eq!(kept[0].job_type, JobType::Kentucky);
    }

    #[test]
    fn test_remote_route_requires_remote_experience() {
        let listings = vec![listing("A", "Remote", "work from anywhere")];

        let without = filter_listings(
            listings.clone(),
            &profile(&["denver"], false),
            FilterOptions::default(),
        );
        assert!(without.is_empty());

        let with = filter_listings(
            listings,
            &profile(&["denver"], true),
            FilterOptions::default(),
        );
        assert_eq!(with.len(), 1);
        assert_eq!(with[0].job_type, JobType::Remote);
    }

    #[test]
    fn test_include_remote_option_overrides_missing_experience() {
        let listings = vec![listing("A", "Remote", "")];
        let kept = filter_listings(
            listings,
            &profile(&["denver"], false),
            FilterOptions {
                include_remote: true,
            },
        );
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_remote_option_does_not_admit_on_site_listings() {
        let listings = vec![listing("A", "Boston, MA", "on-site only")];
        let kept = filter_listings(
            listings,
            &profile(&["denver"], true),
            FilterOptions {
                include_remote: true,
            },
        );
        assert!(kept.is_empty());
    }

    #[test]
    fn test_kept_listings_are_classified() {
        let listings = vec![listing("A", "Lexington, KY", "hybrid schedule")];
        let kept = filter_listings(
            listings,
            &profile(&["lexington"], false),
            FilterOptions::default(),
        );
        // Kentucky precedence applies during annotation too.
        assert_eq!(kept[0].job_type, JobType::Kentucky);
    }
}
