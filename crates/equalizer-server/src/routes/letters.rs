//! Letter generation endpoint.

use std::collections::BTreeMap;
use std::path::Path;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use equalizer_core::letters::{compose_instruction, LetterRequest};
use equalizer_core::{EqualizerError, ModelRequest};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LetterGenerationRequest {
    /// Template file name, e.g. "parking_appeal.txt".
    pub template_name: String,
    /// Region whose legal conventions the letter should follow.
    #[serde(default = "default_region")]
    pub region: String,
    /// Case details keyed by detail name.
    #[serde(default)]
    pub case_details: BTreeMap<String, String>,
}

fn default_region() -> String {
    "Global".to_string()
}

#[derive(Debug, Serialize)]
pub struct LetterGenerationResponse {
    pub letter: String,
    pub template_name: String,
}

/// Reduce a requested template name to its basename, keeping lookups
/// inside the templates directory.
fn sanitize_template_name(requested: &str) -> Option<&str> {
    Path::new(requested).file_name().and_then(|n| n.to_str())
}

async fn load_template(dir: &Path, file_name: &str) -> Result<String, EqualizerError> {
    match tokio::fs::read_to_string(dir.join(file_name)).await {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(EqualizerError::TemplateNotFound(file_name.to_string()))
        }
        Err(e) => Err(EqualizerError::Io(e)),
    }
}

/// Generate a formal response letter from a named template.
pub async fn generate_letter(
    State(state): State<AppState>,
    Json(payload): Json<LetterGenerationRequest>,
) -> ApiResult<Json<LetterGenerationResponse>> {
    let file_name = sanitize_template_name(&payload.template_name)
        .ok_or_else(|| ApiError::bad_request("Invalid template name"))?;

    let template_text = load_template(&state.templates_dir, file_name).await?;

    info!(template = %file_name, region = %payload.region, "generating letter");

    let mut letter_request = LetterRequest::new(template_text, payload.region);
    for (key, value) in payload.case_details {
        letter_request = letter_request.with_detail(key, value);
    }

    let request = ModelRequest::new(compose_instruction(&letter_request));
    let response = state.model.generate(&request).await?;

    Ok(Json(LetterGenerationResponse {
        letter: response.content,
        template_name: file_name.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_directory_components() {
        assert_eq!(
            sanitize_template_name("../../etc/passwd"),
            Some("passwd")
        );
        assert_eq!(
            sanitize_template_name("parking_appeal.txt"),
            Some("parking_appeal.txt")
        );
        assert_eq!(sanitize_template_name(".."), None);
        assert_eq!(sanitize_template_name(""), None);
    }

    #[tokio::test]
    async fn test_load_template_reads_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("appeal.txt"), "Dear [Name],").unwrap();

        let text = load_template(dir.path(), "appeal.txt").await.unwrap();
        assert_eq!(text, "Dear [Name],");
    }

    #[tokio::test]
    async fn test_missing_template_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_template(dir.path(), "missing.txt").await;
        assert!(matches!(result, Err(EqualizerError::TemplateNotFound(_))));
    }
}
