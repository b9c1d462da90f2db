//! Candidate PII spans and overlap resolution.

use crate::entity::EntityType;

/// Which detector produced a span. Carries the merge tie-break rank:
/// a human-curated dictionary match must not be silently reclassified as a
/// pattern false positive, and earlier-configured patterns win over later
/// ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanOrigin {
    Dictionary,
    Pattern(usize),
}

impl SpanOrigin {
    fn rank(&self) -> usize {
        match self {
            SpanOrigin::Dictionary => 0,
            SpanOrigin::Pattern(idx) => idx + 1,
        }
    }
}

/// A contiguous detected-PII region, in transliterated coordinates until
/// replacement time. `matched_text` equals the transliterated slice
/// `[start, end)` at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub entity_type: EntityType,
    pub start: usize,
    pub end: usize,
    pub matched_text: String,
    pub origin: SpanOrigin,
}

impl Span {
    pub fn new(
        entity_type: EntityType,
        start: usize,
        end: usize,
        matched_text: &str,
        origin: SpanOrigin,
    ) -> Self {
        debug_assert!(start < end, "span must be non-empty");
        Self {
            entity_type,
            start,
            end,
            matched_text: matched_text.to_string(),
            origin,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Resolve overlaps between candidate spans from all detectors into a
/// single non-overlapping, start-ordered list.
///
/// Order of preference at the same start: longer span first, then
/// dictionary before pattern matches. A span overlapping an already
/// accepted one is discarded; replacement must never write into the same
/// source range twice.
pub fn merge(mut spans: Vec<Span>) -> Vec<Span> {
    spans.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(b.len().cmp(&a.len()))
            .then(a.origin.rank().cmp(&b.origin.rank()))
    });

    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last() {
            Some(prev) if span.start < prev.end => {}
            _ => merged.push(span),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(ty: EntityType, start: usize, end: usize, origin: SpanOrigin) -> Span {
        Span::new(ty, start, end, "x", origin)
    }

    #[test]
    fn test_disjoint_spans_sorted() {
        let merged = merge(vec![
            span(EntityType::Email, 10, 20, SpanOrigin::Pattern(0)),
            span(EntityType::Person, 0, 4, SpanOrigin::Dictionary),
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].start, 0);
        assert_eq!(merged[1].start, 10);
    }

    #[test]
    fn test_longer_wins_on_same_start() {
        let merged = merge(vec![
            span(EntityType::NumericId, 0, 6, SpanOrigin::Pattern(2)),
            span(EntityType::Phone, 0, 12, SpanOrigin::Pattern(1)),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].entity_type, EntityType::Phone);
    }

    #[test]
    fn test_dictionary_beats_pattern_on_exact_tie() {
        let merged = merge(vec![
            span(EntityType::NumericId, 5, 11, SpanOrigin::Pattern(2)),
            span(EntityType::Person, 5, 11, SpanOrigin::Dictionary),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].entity_type, EntityType::Person);
    }

    #[test]
    fn test_pattern_order_breaks_remaining_ties() {
        let merged = merge(vec![
            span(EntityType::NumericId, 5, 11, SpanOrigin::Pattern(2)),
            span(EntityType::Phone, 5, 11, SpanOrigin::Pattern(1)),
        ]);
        assert_eq!(merged[0].entity_type, EntityType::Phone);
    }

    #[test]
    fn test_overlapping_later_span_discarded() {
        let merged = merge(vec![
            span(EntityType::Email, 0, 10, SpanOrigin::Pattern(0)),
            span(EntityType::Person, 4, 8, SpanOrigin::Dictionary),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].entity_type, EntityType::Email);
    }

    #[test]
    fn test_adjacent_spans_both_kept() {
        let merged = merge(vec![
            span(EntityType::Person, 0, 4, SpanOrigin::Dictionary),
            span(EntityType::Person, 4, 8, SpanOrigin::Dictionary),
        ]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_output_is_non_overlapping_and_ordered() {
        let merged = merge(vec![
            span(EntityType::Phone, 3, 9, SpanOrigin::Pattern(1)),
            span(EntityType::Email, 0, 5, SpanOrigin::Pattern(0)),
            span(EntityType::Person, 8, 12, SpanOrigin::Dictionary),
            span(EntityType::NumericId, 1, 2, SpanOrigin::Pattern(2)),
        ]);
        for pair in merged.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }
}
