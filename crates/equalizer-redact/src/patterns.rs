//! Built-in PII patterns.
//!
//! The pattern set is process-wide, read-only configuration compiled once.
//! Order matters and is part of the engine's contract: each pattern runs
//! over the output of the previous one, so a span that could match two
//! categories is claimed by whichever pattern runs first. The fixed order
//! is email, then phone, then identifier-number patterns.

use once_cell::sync::Lazy;
use regex::Regex;

/// A named PII category paired with its matching rule.
#[derive(Debug, Clone)]
pub struct RedactionPattern {
    category: &'static str,
    regex: Regex,
    tag: String,
}

impl RedactionPattern {
    /// Create a pattern for a category.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex; patterns are compile-time
    /// literals, so this only fires on a programming error.
    pub fn new(category: &'static str, pattern: &str) -> Self {
        let regex = Regex::new(pattern).expect("built-in redaction pattern must compile");
        let tag = format!("[REDACTED {}]", category.to_uppercase());
        Self {
            category,
            regex,
            tag,
        }
    }

    /// Category name (e.g. "email").
    pub fn category(&self) -> &'static str {
        self.category
    }

    /// Replacement tag for matched spans.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}

static DEFAULT_PATTERNS: Lazy<Vec<RedactionPattern>> = Lazy::new(|| {
    vec![
        RedactionPattern::new("email", r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"),
        RedactionPattern::new("phone", r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b"),
        RedactionPattern::new("ssn", r"\b\d{3}-\d{2}-\d{4}\b"),
    ]
});

/// The default pattern set in its contractual application order.
pub fn default_patterns() -> &'static [RedactionPattern] {
    &DEFAULT_PATTERNS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order_is_fixed() {
        let categories: Vec<_> = default_patterns().iter().map(|p| p.category()).collect();
        assert_eq!(categories, vec!["email", "phone", "ssn"]);
    }

    #[test]
    fn test_tag_uppercases_category() {
        let pattern = RedactionPattern::new("passport", r"\b[A-Z]\d{8}\b");
        assert_eq!(pattern.tag(), "[REDACTED PASSPORT]");
    }
}
