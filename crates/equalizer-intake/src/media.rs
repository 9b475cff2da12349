//! Media kind classification from filenames.
//!
//! Classification is a strict allow-list, not a deny-list: any extension
//! outside the recognized set is rejected before the artifact bytes are
//! parsed, so unexpected artifact types never reach the model-facing path.

use crate::error::{IntakeError, IntakeResult};
use equalizer_core::SourceKind;

/// Media type used when an image's true type cannot be determined.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

const PLAINTEXT_EXTENSIONS: &[&str] = &["txt"];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];
const DOCUMENT_EXTENSIONS: &[&str] = &["pdf"];

/// Kind of an uploaded artifact, classified from its filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// `.txt`
    PlainText,
    /// `.jpg` / `.jpeg` / `.png` / `.webp`
    Image,
    /// `.pdf`
    Document,
}

impl MediaKind {
    /// Classify a filename against the allow-list (case-insensitive).
    pub fn classify(filename: &str) -> IntakeResult<Self> {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .ok_or_else(|| IntakeError::UnsupportedMediaType(filename.to_string()))?;

        if PLAINTEXT_EXTENSIONS.contains(&ext.as_str()) {
            Ok(Self::PlainText)
        } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Ok(Self::Image)
        } else if DOCUMENT_EXTENSIONS.contains(&ext.as_str()) {
            Ok(Self::Document)
        } else {
            Err(IntakeError::UnsupportedMediaType(filename.to_string()))
        }
    }

    /// The bundle-level source kind for this media kind.
    pub fn source_kind(&self) -> SourceKind {
        match self {
            Self::PlainText => SourceKind::PlainText,
            Self::Image => SourceKind::Image,
            Self::Document => SourceKind::Document,
        }
    }
}

/// Detect an image format from magic bytes.
pub(crate) fn detect_image_format(content: &[u8]) -> Option<&'static str> {
    if content.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        Some("png")
    } else if content.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("jpeg")
    } else if content.starts_with(b"RIFF") && content.len() > 12 && &content[8..12] == b"WEBP" {
        Some("webp")
    } else {
        None
    }
}

/// Resolve the media type for a standalone image.
///
/// Prefers the transport's declared content type when it is an `image/*`
/// type, falls back to magic-byte sniffing, and defaults to
/// [`DEFAULT_IMAGE_MIME`] when neither yields an answer.
pub(crate) fn resolve_image_mime(declared: Option<&str>, content: &[u8]) -> String {
    if let Some(declared) = declared {
        if declared.starts_with("image/") {
            return declared.to_string();
        }
    }

    detect_image_format(content)
        .map(|format| format!("image/{format}"))
        .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_allowed_extensions() {
        assert_eq!(MediaKind::classify("notes.txt").unwrap(), MediaKind::PlainText);
        assert_eq!(MediaKind::classify("scan.JPEG").unwrap(), MediaKind::Image);
        assert_eq!(MediaKind::classify("photo.webp").unwrap(), MediaKind::Image);
        assert_eq!(MediaKind::classify("lease.PDF").unwrap(), MediaKind::Document);
    }

    #[test]
    fn test_classify_rejects_outside_allow_list() {
        for name in ["malware.exe", "archive.zip", "report.docx", "noextension"] {
            let result = MediaKind::classify(name);
            assert!(
                matches!(result, Err(IntakeError::UnsupportedMediaType(_))),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_detect_image_format() {
        assert_eq!(detect_image_format(&[0x89, 0x50, 0x4E, 0x47, 0x0D]), Some("png"));
        assert_eq!(detect_image_format(&[0xFF, 0xD8, 0xFF, 0xE0]), Some("jpeg"));
        assert_eq!(detect_image_format(b"RIFF\x00\x00\x00\x00WEBPVP8 "), Some("webp"));
        assert_eq!(detect_image_format(b"plain text"), None);
    }

    #[test]
    fn test_resolve_image_mime() {
        assert_eq!(resolve_image_mime(Some("image/png"), b""), "image/png");
        // non-image declared type falls through to sniffing
        assert_eq!(
            resolve_image_mime(Some("application/octet-stream"), &[0xFF, 0xD8, 0xFF]),
            "image/jpeg"
        );
        // unknown everywhere defaults to jpeg
        assert_eq!(resolve_image_mime(None, b"????"), DEFAULT_IMAGE_MIME);
    }
}
