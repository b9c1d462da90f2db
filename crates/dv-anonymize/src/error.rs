//! Error types for the anonymization engine.
//!
//! The engine fails closed: every error aborts the whole call and no
//! partially anonymized text is ever returned. Error messages carry
//! offsets and counts only, never document content.

use thiserror::Error;

/// Result type for anonymization operations.
pub type Result<T> = std::result::Result<T, AnonymizeError>;

/// Errors that can occur while anonymizing a document.
#[derive(Error, Debug)]
pub enum AnonymizeError {
    /// Input bytes are not valid UTF-8. Upstream extraction must hand the
    /// engine decoded text; this is a defensive check, not a recovery path.
    #[error("invalid encoding: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Script conversion produced an inconsistent offset map. A partial
    /// transliteration would desynchronize span translation, so the whole
    /// call aborts.
    #[error("transliteration failed: {0}")]
    Transliteration(String),

    /// Malformed regex pattern or placeholder template. Raised at
    /// configuration time, never per document.
    #[error("pattern config error: {0}")]
    PatternConfig(String),

    /// A computed replacement range fell outside the original text. This is
    /// a defect, not an input problem; the message is offsets only.
    #[error("replacement invariant violated: {0}")]
    ReplacementInvariant(String),

    /// I/O error while loading or saving a pattern configuration file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error in a pattern configuration file.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
