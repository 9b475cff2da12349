//! Translation of advice into a target language.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use equalizer_core::ModelRequest;

use crate::error::{ApiError, ApiResult};
use crate::prompts;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_language: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translation: String,
    pub target_language: String,
}

/// Translate advice text for spoken delivery.
pub async fn translate_advice(
    State(state): State<AppState>,
    Json(payload): Json<TranslateRequest>,
) -> ApiResult<Json<TranslateResponse>> {
    let text = crate::routes::require_text(&payload.text)?;
    let language = payload.target_language.trim();
    if language.is_empty() {
        return Err(ApiError::bad_request("Target language is required"));
    }

    let request = ModelRequest::new(prompts::translate(language)).with_text(text);
    let response = state.model.generate(&request).await?;

    Ok(Json(TranslateResponse {
        translation: response.content,
        target_language: language.to_string(),
    }))
}
