use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::listings::classify::classify_listing;
use crate::listings::feed::refresh_once;
use crate::listings::model::ClassifiedListing;
use crate::matching::filter::{filter_listings, FilterOptions};
use crate::resume::profile::CandidateProfile;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    pub profile: CandidateProfile,
    #[serde(default)]
    pub include_remote: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub refreshed: usize,
}

/// GET /api/v1/jobs
/// All stored listings, each annotated with job type and region.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClassifiedListing>>, AppError> {
    let classified = state
        .store
        .all()
        .await
        .into_iter()
        .map(classify_listing)
        .collect();
    Ok(Json(classified))
}

/// POST /api/v1/jobs/filter
/// Listings filtered against a candidate profile.
pub async fn handle_filter_jobs(
    State(state): State<AppState>,
    Json(req): Json<FilterRequest>,
) -> Result<Json<Vec<ClassifiedListing>>, AppError> {
    let listings = state.store.all().await;
    let kept = filter_listings(
        listings,
        &req.profile,
        FilterOptions {
            include_remote: req.include_remote,
        },
    );
    Ok(Json(kept))
}

/// POST /api/v1/jobs/refresh
/// Triggers an immediate fetch from the configured feed.
pub async fn handle_refresh_jobs(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, AppError> {
    let feed = state
        .feed
        .as_ref()
        .ok_or_else(|| AppError::NotFound("no listing feed configured".to_string()))?;
    let refreshed = refresh_once(feed.as_ref(), state.store.as_ref()).await?;
    Ok(Json(RefreshResponse { refreshed }))
}
