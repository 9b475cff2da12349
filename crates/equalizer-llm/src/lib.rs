//! equalizer-llm - Generative model providers for equalizer.
//!
//! Implements the [`GenerativeModel`](equalizer_core::GenerativeModel)
//! trait over external APIs. Currently ships the Gemini provider; the
//! trait seam keeps the rest of the workspace provider-agnostic.
//!
//! # Example
//!
//! ```ignore
//! use equalizer_core::{ModelConfig, ModelRequest};
//! use equalizer_llm::GeminiModel;
//!
//! let model = GeminiModel::new(ModelConfig::default())?;
//! let response = model
//!     .generate(&ModelRequest::new("Summarize the risks").with_text(text))
//!     .await?;
//! ```

mod gemini;

pub use gemini::GeminiModel;

// Re-export core types for convenience
pub use equalizer_core::{GenerativeModel, ModelConfig, ModelRequest, ModelResponse};
