//! equalizer-redact - Pattern-based PII redaction for equalizer.
//!
//! Strips identifying information (emails, phone numbers, SSN-shaped
//! identifiers) from text before it is persisted or forwarded to any
//! external service. Best-effort by design: this is a privacy layer, not
//! a compliance guarantee.
//!
//! # Example
//!
//! ```
//! use equalizer_redact::RedactionEngine;
//!
//! let engine = RedactionEngine::new();
//! let clean = engine.redact("Contact me at 555-123-4567 or jane@example.com.");
//! assert_eq!(clean, "Contact me at [REDACTED PHONE] or [REDACTED EMAIL].");
//! ```

mod engine;
mod patterns;

pub use engine::RedactionEngine;
pub use patterns::{default_patterns, RedactionPattern};
