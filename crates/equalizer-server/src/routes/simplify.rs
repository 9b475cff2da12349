//! Plain-language simplification endpoints.

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
pub struct SimplifyRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SimplifyResponse {
    pub simplified: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
}

/// Rewrite pasted text in plain language.
pub async fn simplify_text(
    State(state): State<AppState>,
    Json(payload): Json<SimplifyRequest>,
) -> ApiResult<Json<SimplifyResponse>> {
    let text = crate::routes::require_text(&payload.text)?;

    let request = ModelRequest::new(prompts::simplify()).with_text(text);
    let response = state.model.generate(&request).await?;

    Ok(Json(SimplifyResponse {
        simplified: response.content,
        truncated: None,
    }))
}

/// Rewrite an uploaded document in plain language.
pub async fn simplify_file(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<SimplifyResponse>> {
    let upload = read_upload(multipart).await?;
    info!(filename = %upload.filename, bytes = upload.bytes.len(), "simplifying upload");

    let bundle = state
        .pipeline
        .build_bundle(
            &upload.bytes,
            &upload.filename,
            upload.content_type.as_deref(),
        )
        .await?;

    let request = ModelRequest::new(prompts::simplify()).with_parts(bundle.parts.clone());
    let response = state.model.generate(&request).await?;

    Ok(Json(SimplifyResponse {
        simplified: response.content,
        truncated: Some(bundle.was_truncated),
    }))
}
