//! PII redaction endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RedactRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct RedactResponse {
    pub redacted: String,
}

/// Replace emails, phone numbers, and SSNs with redaction tags.
///
/// Redaction never fails: text with no matches comes back unchanged.
pub async fn redact_text(
    State(state): State<AppState>,
    Json(payload): Json<RedactRequest>,
) -> ApiResult<Json<RedactResponse>> {
    Ok(Json(RedactResponse {
        redacted: state.redactor.redact(&payload.text),
    }))
}
