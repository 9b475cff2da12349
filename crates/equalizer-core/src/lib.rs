//! equalizer-core - Core library for equalizer.
//!
//! This crate provides the shared types, configuration, and the
//! `GenerativeModel` trait used across the equalizer workspace: the
//! canonical content bundle produced by document intake, the letter
//! composition helpers, and the error taxonomy.
//!
//! # Example
//!
//! ```ignore
//! use equalizer_core::{ContentBundle, ContentPart, SourceKind};
//!
//! let bundle = ContentBundle::new(
//!     "notice.txt",
//!     SourceKind::PlainText,
//!     vec![ContentPart::text("You owe a late fee of $40.")],
//!     false,
//! );
//! assert_eq!(bundle.image_count(), 0);
//! ```

pub mod config;
pub mod error;
pub mod letters;
pub mod model;
pub mod types;

// Re-export commonly used types
pub use config::{EqualizerConfig, IntakePolicy, DEFAULT_MAX_IMAGE_PARTS};
pub use error::{EqualizerError, EqualizerResult};
pub use letters::{compose_instruction, LetterRequest};
pub use model::{GenerativeModel, ModelConfig, ModelRequest, ModelResponse};
pub use types::{ContentBundle, ContentPart, SourceKind};
