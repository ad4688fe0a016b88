//! CandidateProfile — the structured output of a résumé parse.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::resume::entities::EntityRecognizer;
use crate::resume::extract::{extract_text, MediaType};
use crate::resume::locations::extract_locations;
use crate::resume::organizations::extract_organizations;
use crate::resume::remote::has_remote_experience;
use crate::resume::sections::experience_section;

/// Normalized facts derived from one résumé. Immutable after creation;
/// consumed by the fuzzy location matcher when filtering listings.
///
/// `locations` and `organizations` are deduplicated and kept in
/// first-discovery order so repeated parses of the same document produce
/// identical output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub locations: Vec<String>,
    pub has_remote_experience: bool,
    pub organizations: Vec<String>,
}

/// Runs the extraction passes over an experience span.
/// Total over any well-formed string: adversarial text degrades to an empty
/// profile, never an error.
pub fn extract_profile(span: &str, recognizer: &dyn EntityRecognizer) -> CandidateProfile {
    CandidateProfile {
        locations: extract_locations(span, recognizer),
        has_remote_experience: has_remote_experience(span),
        organizations: extract_organizations(span, recognizer),
    }
}

/// Full pipeline for one uploaded document:
/// decode → segment experience section → extract profile.
pub fn parse_resume(
    buffer: &[u8],
    media_type: MediaType,
    recognizer: &dyn EntityRecognizer,
) -> Result<CandidateProfile, AppError> {
    let text = extract_text(buffer, media_type)?;
    let span = experience_section(&text);
    let profile = extract_profile(span, recognizer);
    tracing::debug!(
        locations = profile.locations.len(),
        organizations = profile.organizations.len(),
        remote = profile.has_remote_experience,
        "parsed résumé"
    );
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::entities::GazetteerRecognizer;

    #[test]
    fn test_full_scenario_remote_acme_austin() {
        let span = "Worked remotely for Acme Corp, based in Austin, TX";
        let profile = extract_profile(span, &GazetteerRecognizer);
        assert_eq!(profile.locations, vec!["austin tx".to_string()]);
        assert!(profile.has_remote_experience);
        assert_eq!(profile.organizations, vec!["acme corp".to_string()]);
    }

    #[test]
    fn test_stop_word_only_span_yields_empty_profile() {
        let profile = extract_profile("The team. The company. The experience!", &GazetteerRecognizer);
        assert!(profile.locations.is_empty());
        assert!(profile.organizations.is_empty());
        assert!(!profile.has_remote_experience);
    }

    #[test]
    fn test_profile_is_reproducible() {
        let span = "Engineer at Beta Labs in Louisville, KY. Worked remotely from Denver.";
        let a = extract_profile(span, &GazetteerRecognizer);
        let b = extract_profile(span, &GazetteerRecognizer);
        assert_eq!(a, b);
    }

    #[test]
    fn test_serializes_with_camel_case_flag() {
        let profile = CandidateProfile {
            locations: vec!["lexington ky".into()],
            has_remote_experience: true,
            organizations: vec![],
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("hasRemoteExperience").is_some());
        assert_eq!(json["locations"][0], "lexington ky");
    }
}
