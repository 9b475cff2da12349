//! Error types for equalizer operations.

use thiserror::Error;

/// Result type alias for equalizer operations.
pub type EqualizerResult<T> = Result<T, EqualizerError>;

/// Main error type for equalizer operations outside the intake pipeline.
///
/// Intake-specific failures (unsupported media types, unreadable documents)
/// live in `equalizer-intake`; this type covers configuration, model calls,
/// and letter generation.
#[derive(Error, Debug)]
pub enum EqualizerError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generative model call failed.
    #[error("Model error: {message}")]
    Llm {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Letter template does not exist.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EqualizerError {
    /// Create a model error.
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
            source: None,
        }
    }

    /// Create a model error with an underlying cause.
    pub fn llm_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Llm {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
