//! Route definitions for the REST API.

mod analyze;
mod health;
mod letters;
mod redact;
mod simplify;
mod translate;
mod upload;

use axum::{
    routing::{get, post},
    Router,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Trim a request text field, rejecting blank input.
fn require_text(text: &str) -> Result<&str, ApiError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ApiError::bad_request("Text content is required"));
    }
    Ok(trimmed)
}

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Risk analysis
        .route("/analyze", post(analyze::analyze_text))
        .route("/analyze/file", post(analyze::analyze_file))
        // Plain-language simplification
        .route("/simplify", post(simplify::simplify_text))
        .route("/simplify/file", post(simplify::simplify_file))
        // Translation of advice
        .route("/voice/translate", post(translate::translate_advice))
        // Letter generation
        .route("/letters/generate", post(letters::generate_letter))
        // PII redaction
        .route("/redact", post(redact::redact_text))
        // Attach state
        .with_state(state)
}

pub use analyze::{AnalysisRequest, AnalysisResponse};
pub use upload::Upload;
