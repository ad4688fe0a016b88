pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::listings::handlers as jobs;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        // Résumé API
        .route("/api/v1/resume/parse", post(resume::handle_parse_resume))
        // Jobs API
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/filter", post(jobs::handle_filter_jobs))
        .route("/api/v1/jobs/refresh", post(jobs::handle_refresh_jobs))
        .layer(DefaultBodyLimit::max(max_upload))
        .with_state(state)
}
