use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::errors::AppError;
use crate::resume::extract::MediaType;
use crate::resume::profile::{parse_resume, CandidateProfile};
use crate::state::AppState;

/// POST /api/v1/resume/parse
/// Accepts a multipart upload with a `file` field holding a PDF or DOCX
/// document and returns the extracted candidate profile.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CandidateProfile>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field
            .content_type()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("file field has no content type".to_string()))?;
        let media_type = MediaType::from_mime(&content_type)
            .ok_or_else(|| AppError::UnsupportedMediaType(content_type.clone()))?;

        let buffer = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {}", e)))?;
        if buffer.len() > state.config.max_upload_bytes {
            return Err(AppError::Validation(format!(
                "upload exceeds {} byte limit",
                state.config.max_upload_bytes
            )));
        }

        tracing::info!(media_type = ?media_type, bytes = buffer.len(), "parsing uploaded résumé");
        let profile = parse_resume(&buffer, media_type, state.recognizer.as_ref())?;
        return Ok(Json(profile));
    }

    Err(AppError::Validation(
        "multipart body is missing a `file` field".to_string(),
    ))
}
