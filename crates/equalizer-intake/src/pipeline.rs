//! Intake pipeline: classify, extract, budget, bundle.

use std::sync::Arc;

use equalizer_core::{ContentBundle, IntakePolicy};
use tracing::debug;

use crate::budget::ImageBudget;
use crate::error::IntakeResult;
use crate::image::ImageExtractor;
use crate::media::MediaKind;
use crate::pdf::PdfExtractor;
use crate::plaintext::PlainTextExtractor;
use crate::{ExtractionContext, Extractor};

/// Single entry point turning one uploaded artifact into a content bundle.
///
/// Holds no per-request state; every `build_bundle` call is independent
/// and reentrant, so one pipeline instance can serve concurrent requests.
pub struct IntakePipeline {
    plaintext: Arc<dyn Extractor>,
    image: Arc<dyn Extractor>,
    document: Arc<dyn Extractor>,
    budget: ImageBudget,
}

impl IntakePipeline {
    /// Create a pipeline for the given intake policy.
    pub fn new(policy: &IntakePolicy) -> Self {
        Self {
            plaintext: Arc::new(PlainTextExtractor::new()),
            image: Arc::new(ImageExtractor::new()),
            document: Arc::new(PdfExtractor::new()),
            budget: ImageBudget::new(policy.max_image_parts),
        }
    }

    /// Create a pipeline with the default policy.
    pub fn with_defaults() -> Self {
        Self::new(&IntakePolicy::default())
    }

    /// Replace the document extractor (e.g. for tests).
    pub fn with_document_extractor(mut self, extractor: Arc<dyn Extractor>) -> Self {
        self.document = extractor;
        self
    }

    /// Build a bundle from one uploaded artifact.
    ///
    /// Classifies the artifact by filename extension (strict allow-list),
    /// runs the matching extractor, applies the image budget, and returns
    /// the bundle with its `was_truncated` flag set. All failures propagate
    /// to the caller.
    pub async fn build_bundle(
        &self,
        content: &[u8],
        filename: &str,
        declared_content_type: Option<&str>,
    ) -> IntakeResult<ContentBundle> {
        let kind = MediaKind::classify(filename)?;
        let ctx = ExtractionContext {
            filename,
            declared_content_type,
        };

        let extractor = match kind {
            MediaKind::PlainText => &self.plaintext,
            MediaKind::Image => &self.image,
            MediaKind::Document => &self.document,
        };

        let parts = extractor.extract(content, &ctx).await?;
        let outcome = self.budget.apply(parts);

        if outcome.truncated {
            debug!(
                filename,
                ceiling = self.budget.max_image_parts(),
                "image ceiling exceeded, trailing images dropped"
            );
        }

        Ok(ContentBundle::new(
            filename,
            kind.source_kind(),
            outcome.parts,
            outcome.truncated,
        ))
    }
}

impl Default for IntakePipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IntakeError;
    use equalizer_core::{ContentPart, SourceKind};

    #[tokio::test]
    async fn test_plaintext_round_trip() {
        let pipeline = IntakePipeline::with_defaults();
        let bundle = pipeline
            .build_bundle("no refunds after 14 days".as_bytes(), "terms.txt", None)
            .await
            .unwrap();

        assert_eq!(bundle.kind, SourceKind::PlainText);
        assert_eq!(bundle.text(), Some("no refunds after 14 days"));
        assert_eq!(bundle.image_count(), 0);
        assert!(!bundle.was_truncated);
    }

    #[tokio::test]
    async fn test_image_round_trip() {
        let bytes = vec![0xFF, 0xD8, 0xFF, 0xE0];
        let pipeline = IntakePipeline::with_defaults();
        let bundle = pipeline
            .build_bundle(&bytes, "fine-print.jpg", Some("image/jpeg"))
            .await
            .unwrap();

        assert_eq!(bundle.kind, SourceKind::Image);
        assert_eq!(bundle.text(), None);
        assert_eq!(
            bundle.parts,
            vec![ContentPart::image("image/jpeg", bytes)]
        );
    }

    #[tokio::test]
    async fn test_disallowed_extension_rejected_before_parsing() {
        let pipeline = IntakePipeline::with_defaults();
        let result = pipeline
            .build_bundle(b"MZ\x90\x00", "malware.exe", None)
            .await;

        assert!(matches!(
            result,
            Err(IntakeError::UnsupportedMediaType(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_plaintext_yields_empty_bundle() {
        let pipeline = IntakePipeline::with_defaults();
        let bundle = pipeline.build_bundle(b"", "empty.txt", None).await.unwrap();
        assert!(bundle.is_empty());
    }

    struct ManyImages(usize);

    #[async_trait::async_trait]
    impl Extractor for ManyImages {
        async fn extract(
            &self,
            _content: &[u8],
            _ctx: &ExtractionContext<'_>,
        ) -> IntakeResult<Vec<ContentPart>> {
            let mut parts = vec![ContentPart::text("page text")];
            parts.extend((0..self.0).map(|i| ContentPart::image("image/jpeg", vec![i as u8])));
            Ok(parts)
        }

        fn name(&self) -> &str {
            "many-images"
        }
    }

    #[tokio::test]
    async fn test_document_over_ceiling_is_truncated_in_order() {
        let pipeline = IntakePipeline::with_defaults()
            .with_document_extractor(Arc::new(ManyImages(14)));

        let bundle = pipeline
            .build_bundle(b"%PDF", "scan.pdf", Some("application/pdf"))
            .await
            .unwrap();

        assert!(bundle.was_truncated);
        assert_eq!(bundle.image_count(), 10);
        assert_eq!(bundle.text(), Some("page text"));
        let kept: Vec<_> = bundle
            .image_parts()
            .map(|p| match p {
                ContentPart::Image { data, .. } => data[0],
                ContentPart::Text { .. } => unreachable!(),
            })
            .collect();
        assert_eq!(kept, (0..10).collect::<Vec<u8>>());
    }

    #[tokio::test]
    async fn test_document_under_ceiling_keeps_everything() {
        let pipeline = IntakePipeline::with_defaults()
            .with_document_extractor(Arc::new(ManyImages(3)));

        let bundle = pipeline
            .build_bundle(b"%PDF", "scan.pdf", None)
            .await
            .unwrap();

        assert!(!bundle.was_truncated);
        assert_eq!(bundle.image_count(), 3);
    }
}
