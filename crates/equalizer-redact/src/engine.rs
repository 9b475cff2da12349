//! The redaction engine.

use std::borrow::Cow;

use regex::NoExpand;
use tracing::trace;

use crate::patterns::{default_patterns, RedactionPattern};

/// Replaces every span matching a configured PII pattern with that
/// pattern's categorical tag.
///
/// `redact` never fails: text with no matches comes back unchanged, and
/// re-redacting already-redacted text is a no-op since the tags themselves
/// match no pattern.
#[derive(Debug, Clone)]
pub struct RedactionEngine {
    patterns: Vec<RedactionPattern>,
}

impl RedactionEngine {
    /// Create an engine with the default pattern set.
    pub fn new() -> Self {
        Self {
            patterns: default_patterns().to_vec(),
        }
    }

    /// Create an engine with a custom pattern set, applied in slice order.
    pub fn with_patterns(patterns: Vec<RedactionPattern>) -> Self {
        Self { patterns }
    }

    /// Redact all configured PII categories from `text`.
    ///
    /// The entire matched span is replaced; no partial masking is
    /// performed.
    pub fn redact(&self, text: &str) -> String {
        let mut redacted = text.to_string();

        for pattern in &self.patterns {
            if let Cow::Owned(next) = pattern.regex().replace_all(&redacted, NoExpand(pattern.tag()))
            {
                trace!(category = pattern.category(), "redacted matching spans");
                redacted = next;
            }
        }

        redacted
    }
}

impl Default for RedactionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_default_category() {
        let engine = RedactionEngine::new();

        assert_eq!(
            engine.redact("mail john.doe@example.com today"),
            "mail [REDACTED EMAIL] today"
        );
        assert_eq!(
            engine.redact("call 555.123.4567 now"),
            "call [REDACTED PHONE] now"
        );
        assert_eq!(engine.redact("SSN: 123-45-6789"), "SSN: [REDACTED SSN]");
    }

    #[test]
    fn test_mixed_categories_keep_declared_order() {
        let engine = RedactionEngine::new();
        let output =
            engine.redact("Call 555-123-4567 or email a@b.com, SSN 123-45-6789");
        assert_eq!(
            output,
            "Call [REDACTED PHONE] or email [REDACTED EMAIL], SSN [REDACTED SSN]"
        );
    }

    #[test]
    fn test_no_match_is_identity() {
        let engine = RedactionEngine::new();
        let text = "Nothing identifying here.";
        assert_eq!(engine.redact(text), text);
        assert_eq!(engine.redact(""), "");
    }

    #[test]
    fn test_redaction_is_idempotent() {
        let engine = RedactionEngine::new();
        let once = engine.redact("reach me: jane@corp.io / 555-123-4567 / 123-45-6789");
        assert_eq!(engine.redact(&once), once);
    }

    #[test]
    fn test_partial_patterns_are_left_alone() {
        let engine = RedactionEngine::new();
        // too few digits for a phone, malformed ssn spacing
        let text = "ref 555-12, case 12-345-6789x";
        assert_eq!(engine.redact(text), text);
    }

    #[test]
    fn test_multiple_matches_of_one_category() {
        let engine = RedactionEngine::new();
        assert_eq!(
            engine.redact("a@b.com and c@d.org"),
            "[REDACTED EMAIL] and [REDACTED EMAIL]"
        );
    }

    #[test]
    fn test_custom_pattern_set() {
        let engine = RedactionEngine::with_patterns(vec![crate::RedactionPattern::new(
            "caseno",
            r"\bCASE-\d{6}\b",
        )]);
        assert_eq!(
            engine.redact("see CASE-123456 for details"),
            "see [REDACTED CASENO] for details"
        );
        // default categories are not part of a custom set
        assert_eq!(engine.redact("a@b.com"), "a@b.com");
    }
}
