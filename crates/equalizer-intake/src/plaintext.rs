//! Plain text extraction.

use async_trait::async_trait;
use equalizer_core::ContentPart;

use crate::error::IntakeResult;
use crate::{ExtractionContext, Extractor};

/// Extractor for `.txt` artifacts.
///
/// Decodes the bytes strictly as UTF-8; invalid bytes fail the request
/// instead of being replaced. Empty or whitespace-only sources yield zero
/// parts, never an empty text part.
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    /// Create a new plain text extractor.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Extractor for PlainTextExtractor {
    async fn extract(
        &self,
        content: &[u8],
        _ctx: &ExtractionContext<'_>,
    ) -> IntakeResult<Vec<ContentPart>> {
        let text = String::from_utf8(content.to_vec())?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![ContentPart::text(text)])
    }

    fn name(&self) -> &str {
        "plaintext"
    }
}
