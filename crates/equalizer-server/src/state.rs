//! Server state management.

use std::path::PathBuf;
use std::sync::Arc;

use equalizer_core::{EqualizerConfig, GenerativeModel};
use equalizer_intake::IntakePipeline;
use equalizer_redact::RedactionEngine;

/// Shared application state.
///
/// Everything here is immutable after startup; handlers share it by
/// cloning the cheap `Arc` handles.
#[derive(Clone)]
pub struct AppState {
    /// Generative model used by all analysis endpoints.
    pub model: Arc<dyn GenerativeModel>,
    /// Document intake pipeline.
    pub pipeline: Arc<IntakePipeline>,
    /// PII redaction engine.
    pub redactor: Arc<RedactionEngine>,
    /// Directory holding letter templates.
    pub templates_dir: PathBuf,
}

impl AppState {
    /// Create application state from configuration and a model.
    pub fn new(config: &EqualizerConfig, model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            model,
            pipeline: Arc::new(IntakePipeline::new(&config.intake)),
            redactor: Arc::new(RedactionEngine::new()),
            templates_dir: config.templates_dir.clone(),
        }
    }
}
