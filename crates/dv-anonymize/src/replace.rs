//! Position-safe replacement onto the original text.
//!
//! The most safety-critical step in the engine: a coordinate-translation
//! bug here is a direct PII leak. Spans are translated from transliterated
//! to original coordinates with outward rounding, every range is checked
//! against the original text, and substitutions are applied in descending
//! offset order so earlier edits never invalidate pending offsets.

use crate::entity::EntityType;
use crate::error::{AnonymizeError, Result};
use crate::offset_map::OffsetMap;
use crate::span::Span;

/// A span translated into original-text coordinates, ready to apply.
#[derive(Debug, Clone)]
pub(crate) struct Replacement {
    pub entity_type: EntityType,
    pub start: usize,
    pub end: usize,
    pub placeholder: String,
}

/// Translate merged, allocated spans into validated original-coordinate
/// replacements.
///
/// Outward rounding at character boundaries can make two adjacent spans
/// touch the same source character; the later span's start is clamped
/// forward (the contested character is already covered), and a span left
/// empty by clamping is dropped. Any range outside the original text or
/// off a char boundary is a `ReplacementInvariant` error, surfaced rather
/// than swallowed.
pub(crate) fn translate_spans(
    original: &str,
    offset_map: &OffsetMap,
    allocations: &[(Span, String)],
) -> Result<Vec<Replacement>> {
    let mut replacements = Vec::with_capacity(allocations.len());
    let mut prev_end = 0usize;

    for (span, placeholder) in allocations {
        let mut start = offset_map.to_original_floor(span.start);
        let end = offset_map.to_original_ceil(span.end);

        if end > original.len() || start > end {
            return Err(AnonymizeError::ReplacementInvariant(format!(
                "translated range {start}..{end} outside original text of {} bytes",
                original.len()
            )));
        }
        if start < prev_end {
            start = prev_end;
        }
        if start >= end {
            continue;
        }
        if !original.is_char_boundary(start) || !original.is_char_boundary(end) {
            return Err(AnonymizeError::ReplacementInvariant(format!(
                "translated range {start}..{end} not on character boundaries"
            )));
        }

        prev_end = end;
        replacements.push(Replacement {
            entity_type: span.entity_type,
            start,
            end,
            placeholder: placeholder.clone(),
        });
    }

    Ok(replacements)
}

/// Apply replacements to the original text, in descending offset order.
/// Placeholder lengths generally differ from the replaced text, so forward
/// application would require re-indexing; reverse application avoids it.
pub(crate) fn apply(original: &str, replacements: &[Replacement]) -> String {
    let mut result = original.to_string();
    for r in replacements.iter().rev() {
        result.replace_range(r.start..r.end, &r.placeholder);
    }
    result
}
