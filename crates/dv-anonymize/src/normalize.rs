//! Unicode normalization.
//!
//! Every later pipeline stage assumes its input is in canonical decomposed
//! form (NFD): diacritics become combining marks the transliterator can
//! strip as zero-width characters, which keeps the offset map simple.

use unicode_normalization::UnicodeNormalization;

/// Normalize raw input text to NFD. Pure, no side effects.
pub fn normalize(text: &str) -> String {
    text.nfd().collect()
}
