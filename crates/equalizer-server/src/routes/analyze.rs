//! Risk analysis endpoints.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use equalizer_core::ModelRequest;

use crate::error::ApiResult;
use crate::prompts;
use crate::routes::upload::read_upload;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
}

/// Analyze pasted text for risky clauses.
pub async fn analyze_text(
    State(state): State<AppState>,
    Json(payload): Json<AnalysisRequest>,
) -> ApiResult<Json<AnalysisResponse>> {
    let text = crate::routes::require_text(&payload.text)?;

    let request = ModelRequest::new(prompts::risk_analysis()).with_text(text);
    let response = state.model.generate(&request).await?;

    Ok(Json(AnalysisResponse {
        analysis: response.content,
        truncated: None,
    }))
}

/// Analyze an uploaded document for risky clauses.
pub async fn analyze_file(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<AnalysisResponse>> {
    let upload = read_upload(multipart).await?;
    info!(filename = %upload.filename, bytes = upload.bytes.len(), "analyzing upload");

    let bundle = state
        .pipeline
        .build_bundle(
            &upload.bytes,
            &upload.filename,
            upload.content_type.as_deref(),
        )
        .await?;

    let request = ModelRequest::new(prompts::risk_analysis()).with_parts(bundle.parts.clone());
    let response = state.model.generate(&request).await?;

    Ok(Json(AnalysisResponse {
        analysis: response.content,
        truncated: Some(bundle.was_truncated),
    }))
}
