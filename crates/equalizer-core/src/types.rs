//! Canonical content types produced by document intake.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One normalized unit of extracted content.
///
/// Downstream consumers pattern-match on the variants rather than probing
/// for keys; a bundle carries zero-or-one text part followed by
/// zero-or-many image parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentPart {
    /// UTF-8 text extracted from a source.
    Text { content: String },
    /// Raw image payload with its declared media type.
    ///
    /// Bytes are carried verbatim; no pixel decoding or validation is
    /// performed at this layer.
    Image {
        mime_type: String,
        #[serde(with = "base64_bytes")]
        data: Vec<u8>,
    },
}

impl ContentPart {
    /// Create a text part.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    /// Create an image part.
    pub fn image(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self::Image {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Check whether this is a text part.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// Check whether this is an image part.
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }
}

/// Declared kind of an uploaded artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Paginated document (PDF).
    Document,
    /// Standalone image.
    Image,
    /// Plain text.
    PlainText,
}

/// Ordered content parts extracted from one uploaded artifact.
///
/// A bundle is an immutable value object created once per intake request:
/// text precedes images, images keep document order, and `was_truncated`
/// records whether the image ceiling dropped trailing images. Callers that
/// forward bundles to paid external analysis use the flag to warn end
/// users that the result is partial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBundle {
    /// Filename or origin tag of the source artifact.
    pub source: String,
    /// Declared kind of the source artifact.
    pub kind: SourceKind,
    /// Ordered content parts.
    pub parts: Vec<ContentPart>,
    /// Whether the image ceiling dropped trailing images.
    pub was_truncated: bool,
    /// Timestamp of extraction.
    pub extracted_at: DateTime<Utc>,
}

impl ContentBundle {
    /// Create a new bundle.
    pub fn new(
        source: impl Into<String>,
        kind: SourceKind,
        parts: Vec<ContentPart>,
        was_truncated: bool,
    ) -> Self {
        Self {
            source: source.into(),
            kind,
            parts,
            was_truncated,
            extracted_at: Utc::now(),
        }
    }

    /// Get the text content, if any part carries text.
    pub fn text(&self) -> Option<&str> {
        self.parts.iter().find_map(|p| match p {
            ContentPart::Text { content } => Some(content.as_str()),
            ContentPart::Image { .. } => None,
        })
    }

    /// Iterate over the image parts in order.
    pub fn image_parts(&self) -> impl Iterator<Item = &ContentPart> {
        self.parts.iter().filter(|p| p.is_image())
    }

    /// Number of image parts in the bundle.
    pub fn image_count(&self) -> usize {
        self.image_parts().count()
    }

    /// Check whether extraction produced any content.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}
