//! Image-count budgeting for extracted content.

use equalizer_core::{ContentPart, DEFAULT_MAX_IMAGE_PARTS};

/// Result of applying the image budget to a parts list.
#[derive(Debug, Clone)]
pub struct BudgetOutcome {
    /// The bounded parts list.
    pub parts: Vec<ContentPart>,
    /// Whether any image parts were dropped.
    pub truncated: bool,
}

/// Enforces the image-count ceiling on an extractor's raw output.
///
/// A pure transform: text parts are never dropped or altered; when the
/// image count exceeds the ceiling, the first `max_image_parts` images are
/// kept in original order and the rest dropped. Truncation is reported,
/// not treated as an error, so a request with too many images still
/// succeeds and the caller can warn the user.
#[derive(Debug, Clone)]
pub struct ImageBudget {
    max_image_parts: usize,
}

impl ImageBudget {
    /// Create a budget with the given ceiling.
    pub fn new(max_image_parts: usize) -> Self {
        Self { max_image_parts }
    }

    /// The configured ceiling.
    pub fn max_image_parts(&self) -> usize {
        self.max_image_parts
    }

    /// Apply the ceiling to a parts list.
    pub fn apply(&self, parts: Vec<ContentPart>) -> BudgetOutcome {
        let mut kept = Vec::with_capacity(parts.len());
        let mut images = 0usize;
        let mut truncated = false;

        for part in parts {
            if part.is_image() {
                if images >= self.max_image_parts {
                    truncated = true;
                    continue;
                }
                images += 1;
            }
            kept.push(part);
        }

        BudgetOutcome {
            parts: kept,
            truncated,
        }
    }
}

impl Default for ImageBudget {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IMAGE_PARTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(n: u8) -> ContentPart {
        ContentPart::image("image/jpeg", vec![n])
    }

    #[test]
    fn test_under_ceiling_is_untouched() {
        let parts = vec![ContentPart::text("t"), image(1), image(2)];
        let outcome = ImageBudget::new(10).apply(parts.clone());

        assert!(!outcome.truncated);
        assert_eq!(outcome.parts, parts);
    }

    #[test]
    fn test_exactly_at_ceiling_is_not_truncated() {
        let parts: Vec<_> = (0u8..10).map(image).collect();
        let outcome = ImageBudget::new(10).apply(parts.clone());

        assert!(!outcome.truncated);
        assert_eq!(outcome.parts, parts);
    }

    #[test]
    fn test_excess_images_drop_from_the_tail() {
        let mut parts = vec![ContentPart::text("t")];
        parts.extend((0u8..15).map(image));

        let outcome = ImageBudget::new(10).apply(parts);

        assert!(outcome.truncated);
        assert_eq!(outcome.parts.len(), 11); // text + first 10 images
        assert_eq!(outcome.parts[0], ContentPart::text("t"));
        // first N kept in original order
        for (i, part) in outcome.parts[1..].iter().enumerate() {
            assert_eq!(*part, image(i as u8));
        }
    }

    #[test]
    fn test_text_survives_even_at_zero_ceiling() {
        let parts = vec![ContentPart::text("t"), image(1)];
        let outcome = ImageBudget::new(0).apply(parts);

        assert!(outcome.truncated);
        assert_eq!(outcome.parts, vec![ContentPart::text("t")]);
    }

    #[test]
    fn test_apply_is_deterministic() {
        let parts: Vec<_> = (0u8..12).map(image).collect();
        let budget = ImageBudget::new(10);
        let a = budget.apply(parts.clone());
        let b = budget.apply(parts);
        assert_eq!(a.parts, b.parts);
        assert_eq!(a.truncated, b.truncated);
    }
}
