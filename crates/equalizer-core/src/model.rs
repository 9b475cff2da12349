//! GenerativeModel trait and related types.
//!
//! The intake pipeline produces [`ContentBundle`](crate::types::ContentBundle)s;
//! this seam is how their parts reach an external generative model. Providers
//! live in `equalizer-llm`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::EqualizerResult;
use crate::types::ContentPart;

/// Request sent to a generative model: an instruction plus content parts.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    /// Task instruction placed before the content.
    pub instruction: String,
    /// Content parts in bundle order (text before images).
    pub parts: Vec<ContentPart>,
}

impl ModelRequest {
    /// Create a request with no content parts.
    pub fn new(instruction: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            parts: Vec::new(),
        }
    }

    /// Attach content parts, preserving their order.
    pub fn with_parts(mut self, parts: Vec<ContentPart>) -> Self {
        self.parts = parts;
        self
    }

    /// Append a text part.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(ContentPart::text(text));
        self
    }

    /// Check whether any part is an image.
    pub fn has_images(&self) -> bool {
        self.parts.iter().any(ContentPart::is_image)
    }
}

/// Response from a generative model.
#[derive(Debug, Clone, Default)]
pub struct ModelResponse {
    /// Generated text content.
    pub content: String,
}

/// Core generative model trait - all providers implement this.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Generate a response for the given request.
    async fn generate(&self, request: &ModelRequest) -> EqualizerResult<ModelResponse>;

    /// Get the model name.
    fn model_name(&self) -> &str;

    /// Check if this model accepts image parts.
    fn supports_vision(&self) -> bool {
        false
    }
}

/// Generative model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model name/identifier.
    pub model: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key (if not using environment variable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL for API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn default_temperature() -> f32 {
    0.2
}

fn default_max_tokens() -> u32 {
    2048
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: String::new(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = ModelRequest::new("Summarize this")
            .with_text("Some contract text")
            .with_parts(vec![ContentPart::image("image/png", vec![1, 2, 3])]);

        // with_parts replaces the part list
        assert_eq!(request.parts.len(), 1);
        assert!(request.has_images());
    }

    #[test]
    fn test_model_config_defaults() {
        let config: ModelConfig = serde_json::from_str(r#"{"model": "gemini-2.0-flash"}"#).unwrap();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.max_tokens, 2048);
    }
}
