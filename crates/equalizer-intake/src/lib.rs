//! equalizer-intake - Document intake and normalization for equalizer.
//!
//! Converts heterogeneous uploads (plain text, standalone images, PDFs with
//! embedded raster images) into an ordered, size-bounded
//! [`ContentBundle`](equalizer_core::ContentBundle) ready for any
//! downstream text/vision consumer.
//!
//! # Example
//!
//! ```ignore
//! use equalizer_intake::IntakePipeline;
//!
//! let pipeline = IntakePipeline::with_defaults();
//! let bundle = pipeline
//!     .build_bundle(&bytes, "lease.pdf", Some("application/pdf"))
//!     .await?;
//!
//! if bundle.was_truncated {
//!     // warn the caller that trailing images were dropped
//! }
//! ```

mod budget;
mod error;
mod image;
mod media;
mod pdf;
mod pipeline;
mod plaintext;

pub use budget::{BudgetOutcome, ImageBudget};
pub use error::{IntakeError, IntakeResult};
pub use image::ImageExtractor;
pub use media::MediaKind;
pub use pdf::PdfExtractor;
pub use pipeline::IntakePipeline;
pub use plaintext::PlainTextExtractor;

use async_trait::async_trait;
use equalizer_core::ContentPart;

/// Extraction context passed alongside the raw bytes.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionContext<'a> {
    /// Declared filename of the upload.
    pub filename: &'a str,
    /// Content type declared by the transport, if any.
    pub declared_content_type: Option<&'a str>,
}

/// Core extractor trait - converts one artifact into ordered content parts.
///
/// Implementations return zero parts for empty sources rather than an
/// empty-content text part, and never reorder content: text precedes
/// images, images keep document order.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract content parts from raw bytes.
    async fn extract(
        &self,
        content: &[u8],
        ctx: &ExtractionContext<'_>,
    ) -> IntakeResult<Vec<ContentPart>>;

    /// Human-readable name for this extractor.
    fn name(&self) -> &str;
}
