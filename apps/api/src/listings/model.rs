//! Listing data model.

use serde::{Deserialize, Serialize};

/// Work-arrangement classification of a listing.
///
/// `Kentucky` is a dedicated regional category, not a location hint: it is a
/// business-priority signal that must never be masked by a generic remote or
/// hybrid keyword elsewhere in the listing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "On-site")]
    OnSite,
    Remote,
    Hybrid,
    Kentucky,
}

/// Coarse region signal derived from location/description aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "USA")]
    Usa,
    #[serde(rename = "UK")]
    Uk,
    Unknown,
}

/// One employer/job record as stored on disk. The classifier treats this as
/// read-only input; fields beyond description/location are carried opaquely
/// through `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A listing plus its derived annotation. Recomputed on every classification
/// call — derived values are never written back into the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub job_type: JobType,
    pub region: Region,
}
