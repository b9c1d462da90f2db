//! Deterministic multilingual PII anonymization engine.
//!
//! Locates personally identifying spans in free text using two exact
//! strategies (a per-account word dictionary and configurable regex
//! patterns) and substitutes stable, type-tagged placeholders, leaving
//! every non-PII character of the original text untouched. No
//! probabilistic or AI-based detection.
//!
//! # Key properties
//!
//! - **Script-agnostic matching**: text is Unicode-normalized and
//!   transliterated to folded Latin for detection, while replacement is
//!   applied to the original text through a bidirectional offset map.
//! - **Stable placeholders**: the same value always receives the same
//!   `TYPE_n` placeholder within one document, with per-type counters.
//! - **Fail-closed**: any stage failure aborts the call with a typed
//!   error; a partially anonymized result is never returned.
//! - **Auditable**: one [`Artifact`] per replacement occurrence records
//!   the original value and its placeholder.
//!
//! # Example
//!
//! ```
//! use dv_anonymize::Anonymizer;
//!
//! let engine = Anonymizer::default();
//! let result = engine
//!     .anonymize("Contact Іван at ivan@example.com", &["ivan".to_string()])
//!     .unwrap();
//! assert!(!result.anonymized_text.contains("ivan@example.com"));
//! ```

pub mod artifact;
pub mod config;
pub mod detect;
pub mod engine;
pub mod entity;
pub mod error;
pub mod normalize;
pub mod offset_map;
pub mod placeholder;
pub mod replace;
pub mod span;
pub mod token;
pub mod translit;

pub use artifact::{AnonymizationResult, Artifact};
pub use config::{PatternConfig, PatternRule, PATTERN_SCHEMA_VERSION};
pub use engine::Anonymizer;
pub use entity::EntityType;
pub use error::{AnonymizeError, Result};
pub use offset_map::OffsetMap;
pub use placeholder::{
    PlaceholderRegistry, PlaceholderTemplate, DEFAULT_PLACEHOLDER_TEMPLATE,
};
pub use span::{Span, SpanOrigin};
pub use token::Token;
