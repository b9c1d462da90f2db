//! The anonymization engine.
//!
//! A strict linear pipeline per call: normalize, transliterate with offset
//! mapping, tokenize, detect (dictionary + patterns), merge, allocate
//! placeholders, replace onto the original text, build artifacts. No stage
//! calls back into an earlier one; any stage failure aborts the whole call
//! with a typed error and no partial output.
//!
//! One call processes one document end to end with no shared mutable
//! state, so the host may run one call per worker thread with zero
//! contention; the engine itself does no I/O and takes no locks.

use std::collections::HashSet;

use regex::Regex;
use tracing::{debug, info};

use crate::artifact::{build_artifacts, AnonymizationResult};
use crate::config::{PatternConfig, DEFAULT_PATTERNS};
use crate::detect::{detect_dictionary, detect_patterns};
use crate::entity::EntityType;
use crate::error::Result;
use crate::normalize::normalize;
use crate::placeholder::{allocate, PlaceholderRegistry, PlaceholderTemplate};
use crate::replace::{apply, translate_spans};
use crate::span::merge;
use crate::token::{is_trimmable, tokenize};
use crate::translit::transliterate;

/// Deterministic multilingual anonymizer. No AI, no heuristic guessing:
/// exact dictionary matches plus configured regex patterns only.
///
/// Construction compiles the configured patterns and placeholder template
/// and fails fast; `anonymize` is then infallible with respect to
/// configuration. The engine is immutable after construction and safe to
/// share across threads.
pub struct Anonymizer {
    patterns: Vec<(EntityType, Regex)>,
    template: PlaceholderTemplate,
}

impl Anonymizer {
    /// Build an engine from a pattern configuration.
    pub fn new(config: &PatternConfig) -> Result<Self> {
        Ok(Self {
            patterns: config.compile()?,
            template: PlaceholderTemplate::new(&config.placeholder_template)?,
        })
    }

    /// Replace PII in `text` with labeled placeholders.
    ///
    /// `sensitive_words` is the per-account dictionary: case-insensitive
    /// exact-match terms, supplied in any supported script; entries are
    /// folded through the same normalization and transliteration as the
    /// document before matching.
    pub fn anonymize(
        &self,
        text: &str,
        sensitive_words: &[String],
    ) -> Result<AnonymizationResult> {
        if text.is_empty() {
            return Ok(AnonymizationResult::empty());
        }

        let normalized = normalize(text);
        let (transliterated, offset_map) = transliterate(&normalized)?;
        debug!(
            original_bytes = normalized.len(),
            transliterated_bytes = transliterated.len(),
            "transliterated input"
        );

        let dictionary = self.normalize_dictionary(sensitive_words)?;
        let tokens = tokenize(&transliterated);

        let mut candidates = detect_dictionary(&tokens, &dictionary, EntityType::Person);
        candidates.extend(detect_patterns(&transliterated, &self.patterns));
        debug!(candidates = candidates.len(), "detection complete");

        let merged = merge(candidates);
        if merged.is_empty() {
            return Ok(AnonymizationResult::unchanged(normalized));
        }

        let mut registry = PlaceholderRegistry::new(self.template.clone());
        let allocations = allocate(&merged, &mut registry);
        let replacements = translate_spans(&normalized, &offset_map, &allocations)?;
        let anonymized_text = apply(&normalized, &replacements);
        let artifacts = build_artifacts(&normalized, &replacements);

        info!(replacements = artifacts.len(), "anonymization complete");
        Ok(AnonymizationResult {
            anonymized_text,
            artifacts,
        })
    }

    /// Byte-level entry point for callers holding undecoded input; the
    /// defensive encoding check lives here. Fatal on invalid UTF-8, no
    /// partial result.
    pub fn anonymize_bytes(
        &self,
        bytes: &[u8],
        sensitive_words: &[String],
    ) -> Result<AnonymizationResult> {
        let text = std::str::from_utf8(bytes)?;
        self.anonymize(text, sensitive_words)
    }

    /// Fold dictionary entries through the document path: NFD, same
    /// transliteration, whitespace split, edge punctuation trimmed. An
    /// entry may be a multi-word name; each word matches independently.
    fn normalize_dictionary(&self, sensitive_words: &[String]) -> Result<HashSet<String>> {
        let mut dictionary = HashSet::new();
        for entry in sensitive_words {
            if entry.is_empty() {
                continue;
            }
            let (folded, _) = transliterate(&normalize(entry))?;
            for word in folded.split_whitespace() {
                let trimmed = word.trim_matches(is_trimmable);
                if !trimmed.is_empty() {
                    dictionary.insert(trimmed.to_string());
                }
            }
        }
        Ok(dictionary)
    }
}

impl Default for Anonymizer {
    /// Engine with the built-in email/phone/numeric-ID patterns and the
    /// default placeholder format.
    fn default() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.clone(),
            template: PlaceholderTemplate::default(),
        }
    }
}
