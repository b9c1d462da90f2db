//! PII detection strategies.
//!
//! Two independent, stateless detectors feed the span merger: exact
//! dictionary matching over tokens and regex matching over the full
//! transliterated text. New detectors (fuzzy, morphological) slot in as
//! additional `Vec<Span>` producers without touching the merger, allocator
//! or replacer.

use std::collections::HashSet;

use regex::Regex;

use crate::entity::EntityType;
use crate::span::{Span, SpanOrigin};
use crate::token::Token;

/// Exact, case-folded whole-token matching against the per-account word
/// set. Zero false negatives by construction for any listed word; no
/// substring or partial matches. Dictionary entries are assumed to be
/// person names in MVP scope, hence the `entity_type` parameter.
pub fn detect_dictionary(
    tokens: &[Token],
    sensitive_words: &HashSet<String>,
    entity_type: EntityType,
) -> Vec<Span> {
    if sensitive_words.is_empty() {
        return Vec::new();
    }
    tokens
        .iter()
        .filter(|token| sensitive_words.contains(token.text.as_str()))
        .map(|token| {
            Span::new(
                entity_type,
                token.start,
                token.end,
                &token.text,
                SpanOrigin::Dictionary,
            )
        })
        .collect()
}

/// Run every configured pattern over the full transliterated text, so
/// matches spanning token breaks (e.g. `user@example.com`) are found
/// whole.
///
/// If a pattern defines capture group 1, the emitted span is that group;
/// this is how patterns express boundary context (the `regex` crate has no
/// look-around). The scan resumes from the end of the captured value, not
/// the full match, so a single delimiter between two values serves as the
/// trailing context of one and the leading context of the next. Overlaps
/// between patterns are left for the merger.
pub fn detect_patterns(translit_text: &str, patterns: &[(EntityType, Regex)]) -> Vec<Span> {
    let mut spans = Vec::new();
    for (pattern_idx, (entity_type, regex)) in patterns.iter().enumerate() {
        let mut pos = 0;
        while pos <= translit_text.len() {
            let caps = match regex.captures_at(translit_text, pos) {
                Some(caps) => caps,
                None => break,
            };
            let m = match caps.get(1).or_else(|| caps.get(0)) {
                Some(m) => m,
                None => break,
            };
            if m.start() >= m.end() {
                pos = m.end() + 1;
                continue;
            }
            spans.push(Span::new(
                *entity_type,
                m.start(),
                m.end(),
                m.as_str(),
                SpanOrigin::Pattern(pattern_idx),
            ));
            pos = m.end();
        }
    }
    spans
}
