//! Intake error types.

use thiserror::Error;

/// Errors that can occur during document intake.
///
/// All failures propagate synchronously to the immediate caller; nothing
/// is swallowed inside the pipeline, so the surrounding service can report
/// malformed input to the user.
#[derive(Error, Debug)]
pub enum IntakeError {
    /// Artifact extension outside the allow-list. User-correctable; not
    /// retried.
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// Paginated document failed to parse (corrupt/encrypted/malformed).
    /// Carries the original parse failure; no partial recovery is attempted.
    #[error("Unsupported document: {message}")]
    UnsupportedDocument {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Plain text artifact is not valid UTF-8. Surfaced rather than
    /// silently substituting replacement characters.
    #[error("Plain text artifact is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// IO error during intake.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Task join error from spawn_blocking.
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl IntakeError {
    /// Create an unsupported-document error with its cause.
    pub fn document(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::UnsupportedDocument {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type for intake operations.
pub type IntakeResult<T> = Result<T, IntakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_error_keeps_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad xref");
        let err = IntakeError::document("failed to open document", cause);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("failed to open document"));
    }

    #[test]
    fn test_decode_error_from_invalid_utf8() {
        let err: IntakeError = String::from_utf8(vec![0xFF, 0xFE]).unwrap_err().into();
        assert!(matches!(err, IntakeError::Decode(_)));
    }
}
