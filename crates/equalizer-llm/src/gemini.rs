//! Gemini generative model provider.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use equalizer_core::{
    ContentPart, EqualizerError, EqualizerResult, GenerativeModel, ModelConfig, ModelRequest,
    ModelResponse,
};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Gemini provider speaking the `generateContent` REST API.
///
/// Text parts are sent as text; image parts are sent inline as base64
/// payloads with their media type, in bundle order.
pub struct GeminiModel {
    client: Client,
    config: ModelConfig,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GeminiPart {
    Text {
        text: String,
    },
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: GeminiBlob,
    },
}

#[derive(Debug, Serialize)]
struct GeminiBlob {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default, rename = "promptFeedback")]
    prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiCandidatePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiPromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

impl GeminiModel {
    /// Create a new Gemini provider.
    pub fn new(config: ModelConfig) -> EqualizerResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .ok_or_else(|| {
                EqualizerError::Configuration(
                    "Gemini API key not found. Set GOOGLE_API_KEY environment variable or provide api_key in config.".to_string(),
                )
            })?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            api_key.parse().map_err(|_| {
                EqualizerError::Configuration("Invalid API key format".to_string())
            })?,
        );
        headers.insert(
            "content-type",
            "application/json".parse().map_err(|_| {
                EqualizerError::Configuration("Invalid content type".to_string())
            })?,
        );

        let client = Client::builder().default_headers(headers).build().map_err(|e| {
            EqualizerError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| GEMINI_API_URL.to_string());

        let mut config = config;
        if config.model.is_empty() {
            config.model = DEFAULT_MODEL.to_string();
        }

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    fn build_request(&self, request: &ModelRequest) -> GeminiRequest {
        let mut parts = Vec::with_capacity(request.parts.len() + 1);
        parts.push(GeminiPart::Text {
            text: request.instruction.clone(),
        });

        for part in &request.parts {
            match part {
                ContentPart::Text { content } => parts.push(GeminiPart::Text {
                    text: content.clone(),
                }),
                ContentPart::Image { mime_type, data } => parts.push(GeminiPart::Inline {
                    inline_data: GeminiBlob {
                        mime_type: mime_type.clone(),
                        data: STANDARD.encode(data),
                    },
                }),
            }
        }

        GeminiRequest {
            contents: vec![GeminiContent { parts }],
            generation_config: GeminiGenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_tokens,
            },
        }
    }
}

#[async_trait]
impl GenerativeModel for GeminiModel {
    async fn generate(&self, request: &ModelRequest) -> EqualizerResult<ModelResponse> {
        debug!(
            model = %self.config.model,
            parts = request.parts.len(),
            has_images = request.has_images(),
            "calling Gemini generateContent"
        );
        let body = self.build_request(request);

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.config.model
            ))
            .json(&body)
            .send()
            .await
            .map_err(|e| EqualizerError::llm(format!("Gemini API request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| EqualizerError::llm(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let error: Result<GeminiErrorBody, _> = serde_json::from_str(&body);
            let message = error
                .map(|e| e.error.message)
                .unwrap_or_else(|_| body.clone());
            return Err(EqualizerError::llm(format!(
                "Gemini API error ({}): {}",
                status, message
            )));
        }

        let response: GeminiResponse = serde_json::from_str(&body)
            .map_err(|e| EqualizerError::llm(format!("Failed to parse response: {}", e)))?;

        if let Some(reason) = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
        {
            return Err(EqualizerError::llm(format!(
                "Generation blocked for safety reason: {}",
                reason
            )));
        }

        let content = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        Ok(ModelResponse { content })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }

    fn supports_vision(&self) -> bool {
        true
    }
}
