//! Configuration system for equalizer.
//!
//! Configuration is an explicit struct constructed once at process start
//! and passed by reference into the components that need it; nothing reads
//! ambient environment state after startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

use crate::error::{EqualizerError, EqualizerResult};
use crate::model::ModelConfig;

/// Default ceiling on image parts per content bundle.
///
/// Downstream analysis calls have a practical limit on how many image
/// attachments they accept per request; trailing images beyond the ceiling
/// are dropped and the bundle is flagged as truncated.
pub const DEFAULT_MAX_IMAGE_PARTS: usize = 10;

/// Bounding policy applied to extracted content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakePolicy {
    /// Maximum image parts kept per bundle.
    pub max_image_parts: usize,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self {
            max_image_parts: DEFAULT_MAX_IMAGE_PARTS,
        }
    }
}

/// Main equalizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EqualizerConfig {
    /// Generative model configuration.
    pub model: ModelConfig,
    /// Intake bounding policy.
    pub intake: IntakePolicy,
    /// Directory holding letter templates.
    pub templates_dir: PathBuf,
}

impl Default for EqualizerConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            intake: IntakePolicy::default(),
            templates_dir: PathBuf::from("templates"),
        }
    }
}

impl EqualizerConfig {
    /// Load configuration from a file (TOML or JSON).
    pub fn from_file(path: impl AsRef<std::path::Path>) -> EqualizerResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        match ext {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| EqualizerError::Configuration(e.to_string()))
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| EqualizerError::Configuration(e.to_string())),
            _ => Err(EqualizerError::Configuration(
                "Unsupported config file format. Use .toml or .json".to_string(),
            )),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(model) = std::env::var("EQUALIZER_MODEL") {
            config.model.model = model;
        }
        if let Ok(api_key) = std::env::var("GOOGLE_API_KEY") {
            config.model.api_key = Some(api_key);
        }
        if let Ok(ceiling) = std::env::var("EQUALIZER_MAX_IMAGE_PARTS") {
            match ceiling.parse() {
                Ok(ceiling) => config.intake.max_image_parts = ceiling,
                Err(_) => warn!(
                    value = %ceiling,
                    default = config.intake.max_image_parts,
                    "EQUALIZER_MAX_IMAGE_PARTS is not a valid count, keeping default"
                ),
            }
        }
        if let Ok(dir) = std::env::var("EQUALIZER_TEMPLATES_DIR") {
            config.templates_dir = PathBuf::from(dir);
        }

        config
    }

    /// Build configuration using builder pattern.
    pub fn builder() -> EqualizerConfigBuilder {
        EqualizerConfigBuilder::default()
    }
}

/// Builder for EqualizerConfig.
#[derive(Default)]
pub struct EqualizerConfigBuilder {
    config: EqualizerConfig,
}

impl EqualizerConfigBuilder {
    /// Set model configuration.
    pub fn model(mut self, config: ModelConfig) -> Self {
        self.config.model = config;
        self
    }

    /// Set intake policy.
    pub fn intake(mut self, policy: IntakePolicy) -> Self {
        self.config.intake = policy;
        self
    }

    /// Set templates directory.
    pub fn templates_dir(mut self, dir: PathBuf) -> Self {
        self.config.templates_dir = dir;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> EqualizerConfig {
        self.config
    }
}
