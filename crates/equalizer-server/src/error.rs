//! Error handling for the REST API server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use equalizer_core::EqualizerError;
use equalizer_intake::IntakeError;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.status, self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code,
                message: self.message,
            },
        };

        (self.status, Json(body)).into_response()
    }
}

// Intake failures are user-correctable artifact problems, surfaced as
// client errors; nothing from the pipeline is retried automatically.
impl From<IntakeError> for ApiError {
    fn from(err: IntakeError) -> Self {
        match err {
            IntakeError::UnsupportedMediaType(name) => ApiError::bad_request(format!(
                "Unsupported file type: {}. Only PDF, TXT, and images (JPG, PNG, WEBP) are accepted",
                name
            )),
            IntakeError::UnsupportedDocument { message, .. } => {
                ApiError::validation(format!("Document could not be read: {}", message))
            }
            IntakeError::Decode(e) => {
                ApiError::validation(format!("Text file is not valid UTF-8: {}", e))
            }
            IntakeError::Io(e) => ApiError::internal(format!("IO error: {}", e)),
            IntakeError::TaskJoin(e) => ApiError::internal(format!("Task error: {}", e)),
        }
    }
}

impl From<EqualizerError> for ApiError {
    fn from(err: EqualizerError) -> Self {
        match err {
            EqualizerError::Configuration(msg) => ApiError::internal(msg),
            EqualizerError::TemplateNotFound(name) => {
                ApiError::not_found(format!("Template not found: {}", name))
            }
            EqualizerError::Llm { message, .. } => {
                ApiError::internal(format!("Model error: {}", message))
            }
            EqualizerError::Io(e) => ApiError::internal(format!("IO error: {}", e)),
            EqualizerError::Serialization(e) => {
                ApiError::internal(format!("Serialization error: {}", e))
            }
            EqualizerError::Internal(msg) => ApiError::internal(msg),
        }
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_media_type_maps_to_400() {
        let err: ApiError = IntakeError::UnsupportedMediaType("malware.exe".to_string()).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("malware.exe"));
    }

    #[test]
    fn test_template_not_found_maps_to_404() {
        let err: ApiError = EqualizerError::TemplateNotFound("x.txt".to_string()).into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unreadable_document_maps_to_422() {
        let err: ApiError = IntakeError::UnsupportedDocument {
            message: "bad xref".to_string(),
            source: None,
        }
        .into();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
