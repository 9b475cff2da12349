//! Standalone image extraction.

use async_trait::async_trait;
use equalizer_core::ContentPart;

use crate::error::IntakeResult;
use crate::media::resolve_image_mime;
use crate::{ExtractionContext, Extractor};

/// Extractor for standalone image artifacts.
///
/// Passes the bytes through verbatim; no re-encoding or structural
/// validation is performed, since this layer does not decode pixels.
/// Downstream consumers are expected to handle malformed payloads.
#[derive(Debug, Clone, Default)]
pub struct ImageExtractor;

impl ImageExtractor {
    /// Create a new image extractor.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Extractor for ImageExtractor {
    async fn extract(
        &self,
        content: &[u8],
        ctx: &ExtractionContext<'_>,
    ) -> IntakeResult<Vec<ContentPart>> {
        let mime_type = resolve_image_mime(ctx.declared_content_type, content);
        Ok(vec![ContentPart::image(mime_type, content.to_vec())])
    }

    fn name(&self) -> &str {
        "image-passthrough"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bytes_pass_through_verbatim() {
        let bytes = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        let ctx = ExtractionContext {
            filename: "receipt.jpg",
            declared_content_type: Some("image/jpeg"),
        };

        let parts = ImageExtractor::new().extract(&bytes, &ctx).await.unwrap();
        assert_eq!(parts, vec![ContentPart::image("image/jpeg", bytes)]);
    }

    #[tokio::test]
    async fn test_missing_content_type_defaults_to_jpeg() {
        let ctx = ExtractionContext {
            filename: "scan.jpg",
            declared_content_type: None,
        };

        // malformed bytes still pass through, with the default media type
        let parts = ImageExtractor::new().extract(b"not an image", &ctx).await.unwrap();
        match &parts[0] {
            ContentPart::Image { mime_type, data } => {
                assert_eq!(mime_type, "image/jpeg");
                assert_eq!(data, b"not an image");
            }
            other => panic!("expected image part, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_sniffed_format_overrides_missing_declaration() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        let ctx = ExtractionContext {
            filename: "shot.png",
            declared_content_type: None,
        };

        let parts = ImageExtractor::new().extract(&png, &ctx).await.unwrap();
        match &parts[0] {
            ContentPart::Image { mime_type, .. } => assert_eq!(mime_type, "image/png"),
            other => panic!("expected image part, got {other:?}"),
        }
    }
}
