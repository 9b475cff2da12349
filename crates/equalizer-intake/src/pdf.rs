//! PDF extraction: page text via pdf-extract, embedded rasters via lopdf.
//!
//! Page text is accumulated into a single running buffer (pages in order,
//! no separator guarantee) and emitted as one text part placed before all
//! image parts, regardless of how text and images interleave on the pages.
//! Embedded images keep their native format where the PDF stores an
//! already-encoded payload (DCT/JPX); raw bitmaps, Flate-compressed or
//! unfiltered, are carried as PNG.

use async_trait::async_trait;
use equalizer_core::ContentPart;
use flate2::read::ZlibDecoder;
use lopdf::Document;
use std::io::Read;
use tracing::debug;

use crate::error::{IntakeError, IntakeResult};
use crate::{ExtractionContext, Extractor};

/// Extractor for paginated PDF documents.
///
/// Wraps the synchronous pdf-extract and lopdf calls in `spawn_blocking`
/// to avoid stalling the async runtime. A document that cannot be opened
/// or parsed fails the whole request; no salvage of readable pages is
/// attempted.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Extractor for PdfExtractor {
    async fn extract(
        &self,
        content: &[u8],
        _ctx: &ExtractionContext<'_>,
    ) -> IntakeResult<Vec<ContentPart>> {
        let content = content.to_vec();
        tokio::task::spawn_blocking(move || extract_pdf(&content)).await?
    }

    fn name(&self) -> &str {
        "pdf"
    }
}

fn extract_pdf(bytes: &[u8]) -> IntakeResult<Vec<ContentPart>> {
    let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
        IntakeError::UnsupportedDocument {
            message: format!("failed to extract text: {e}"),
            source: None,
        }
    })?;

    let images = extract_embedded_images(bytes)?;

    let mut parts = Vec::with_capacity(images.len() + 1);
    if !text.trim().is_empty() {
        parts.push(ContentPart::text(text));
    }
    parts.extend(images);
    Ok(parts)
}

/// Walk pages in document order and pull out every embedded raster image.
fn extract_embedded_images(bytes: &[u8]) -> IntakeResult<Vec<ContentPart>> {
    let doc = Document::load_mem(bytes)
        .map_err(|e| IntakeError::document("failed to open document", e))?;

    let mut parts = Vec::new();
    for (page_num, page_id) in doc.get_pages() {
        let page_images = doc.get_page_images(page_id).map_err(|e| {
            IntakeError::document(format!("failed to read images on page {page_num}"), e)
        })?;

        for pdf_image in page_images {
            if let Some(part) = convert_pdf_image(&pdf_image, page_num) {
                parts.push(part);
            }
        }
    }

    Ok(parts)
}

/// Convert one PDF image XObject into an image part, preserving the native
/// payload where possible. Images with filters this layer cannot carry
/// (e.g. CCITT fax) are skipped.
fn convert_pdf_image(pdf_image: &lopdf::xobject::PdfImage, page_num: u32) -> Option<ContentPart> {
    let filters: &[String] = pdf_image.filters.as_deref().unwrap_or(&[]);

    if filters.iter().any(|f| f == "DCTDecode") {
        // JPEG payload, usable as-is
        return Some(ContentPart::image("image/jpeg", pdf_image.content.to_vec()));
    }
    if filters.iter().any(|f| f == "JPXDecode") {
        // JPEG 2000 payload, usable as-is
        return Some(ContentPart::image("image/jp2", pdf_image.content.to_vec()));
    }

    let decoded = if filters.iter().any(|f| f == "FlateDecode") {
        decode_flate_image(pdf_image)
    } else if filters.is_empty() {
        // no Filter entry: the stream is already a raw bitmap
        encode_bitmap_as_png(
            pdf_image.content.to_vec(),
            pdf_image.width as u32,
            pdf_image.height as u32,
            pdf_image.color_space.as_deref(),
        )
    } else {
        debug!(
            "skipping image with unsupported filters {:?} on page {}",
            filters, page_num
        );
        return None;
    };

    match decoded {
        Ok(data) => Some(ContentPart::image("image/png", data)),
        Err(e) => {
            debug!("skipping undecodable image on page {}: {}", page_num, e);
            None
        }
    }
}

/// Decompress a Flate-encoded raw bitmap and encode it as PNG.
fn decode_flate_image(pdf_image: &lopdf::xobject::PdfImage) -> Result<Vec<u8>, String> {
    let mut decoder = ZlibDecoder::new(pdf_image.content);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| format!("decompression failed: {e}"))?;

    encode_bitmap_as_png(
        decompressed,
        pdf_image.width as u32,
        pdf_image.height as u32,
        pdf_image.color_space.as_deref(),
    )
}

/// Encode a raw bitmap buffer as PNG.
fn encode_bitmap_as_png(
    data: Vec<u8>,
    width: u32,
    height: u32,
    color_space: Option<&str>,
) -> Result<Vec<u8>, String> {
    let color_space = color_space.unwrap_or("DeviceRGB");

    let img = match color_space {
        "DeviceGray" | "Gray" | "CalGray" => {
            image::GrayImage::from_raw(width, height, data).map(image::DynamicImage::ImageLuma8)
        }
        // RGB-shaped data, including unrecognized spaces we attempt as RGB
        _ => image::RgbImage::from_raw(width, height, data).map(image::DynamicImage::ImageRgb8),
    }
    .ok_or_else(|| format!("raw data does not match {width}x{height} {color_space}"))?;

    let mut png_data = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut png_data),
        image::ImageFormat::Png,
    )
    .map_err(|e| format!("PNG encoding failed: {e}"))?;

    Ok(png_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_corrupt_document_is_rejected_with_cause() {
        let ctx = ExtractionContext {
            filename: "broken.pdf",
            declared_content_type: Some("application/pdf"),
        };

        let result = PdfExtractor::new()
            .extract(b"%PDF-1.4 this is not a real pdf", &ctx)
            .await;

        assert!(matches!(
            result,
            Err(IntakeError::UnsupportedDocument { .. })
        ));
    }

    #[test]
    fn test_raw_gray_bitmap_encodes_as_png() {
        // 2x2 8-bit grayscale, as an unfiltered image stream would carry it
        let png = encode_bitmap_as_png(vec![0, 64, 128, 255], 2, 2, Some("DeviceGray")).unwrap();
        assert!(png.starts_with(&[0x89, 0x50, 0x4E, 0x47]));
    }

    #[test]
    fn test_raw_rgb_bitmap_encodes_as_png() {
        // 1x2 RGB, default color space when none is declared
        let png = encode_bitmap_as_png(vec![255, 0, 0, 0, 0, 255], 1, 2, None).unwrap();
        assert!(png.starts_with(&[0x89, 0x50, 0x4E, 0x47]));
    }

    #[test]
    fn test_bitmap_size_mismatch_is_rejected() {
        let result = encode_bitmap_as_png(vec![0, 1, 2], 4, 4, Some("DeviceGray"));
        assert!(result.is_err());
    }

    #[test]
    fn test_flate_decode_rejects_garbage() {
        // exercised indirectly through convert_pdf_image's skip path; a
        // payload that is not zlib data must not produce a part
        let mut decoder = ZlibDecoder::new(&b"garbage"[..]);
        let mut out = Vec::new();
        assert!(decoder.read_to_end(&mut out).is_err());
    }
}
