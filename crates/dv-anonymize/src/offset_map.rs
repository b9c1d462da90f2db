//! Position correspondence between original and transliterated text.
//!
//! One source character may transliterate to zero, one, or several output
//! characters, so the map is a sorted anchor list with one anchor per
//! source character boundary plus a terminal anchor. Any sub-range is
//! resolved by interpolation against the nearest anchors; a dense
//! per-character array is unnecessary and would not survive arbitrary
//! expansion ratios any better.

/// A single anchor pair. Both offsets are byte indices at character
/// boundaries of their respective strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Anchor {
    original: usize,
    transliterated: usize,
}

/// Immutable bidirectional offset map, built once per document by the
/// transliterator and owned by the pipeline invocation that created it.
#[derive(Debug, Clone)]
pub struct OffsetMap {
    anchors: Vec<Anchor>,
}

impl OffsetMap {
    /// Length of the original text in bytes.
    pub fn original_len(&self) -> usize {
        self.anchors[self.anchors.len() - 1].original
    }

    /// Length of the transliterated text in bytes.
    pub fn transliterated_len(&self) -> usize {
        self.anchors[self.anchors.len() - 1].transliterated
    }

    /// Translate a transliterated offset used as a span *start*.
    ///
    /// Rounds down to the boundary of the source character whose output
    /// covers `t`, so a partially matched character is included whole.
    pub fn to_original_floor(&self, t: usize) -> usize {
        let idx = self.anchors.partition_point(|a| a.transliterated <= t);
        self.anchors[idx.saturating_sub(1)].original
    }

    /// Translate a transliterated offset used as a span *end* (exclusive).
    ///
    /// Rounds up to the next source character boundary, then past any
    /// zero-width anchors sharing that output position, so trailing
    /// combining marks of the last matched character are covered too.
    /// Rounding outward on both ends is the safe direction for redaction.
    pub fn to_original_ceil(&self, t: usize) -> usize {
        let idx = self.anchors.partition_point(|a| a.transliterated < t);
        if idx >= self.anchors.len() {
            return self.original_len();
        }
        let v = self.anchors[idx].transliterated;
        let last = self.anchors.partition_point(|a| a.transliterated <= v);
        self.anchors[last - 1].original
    }

    /// Diagnostic reverse lookup: original offset to transliterated offset.
    pub fn to_transliterated(&self, o: usize) -> usize {
        let idx = self.anchors.partition_point(|a| a.original <= o);
        self.anchors[idx.saturating_sub(1)].transliterated
    }
}

/// Incremental builder used by the transliterator. Anchors must be pushed
/// in source order; `finish` validates monotonicity of both sequences.
#[derive(Debug, Default)]
pub struct OffsetMapBuilder {
    anchors: Vec<Anchor>,
}

impl OffsetMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the source character starting at `original` produced
    /// output starting at `transliterated`.
    pub fn anchor(&mut self, original: usize, transliterated: usize) {
        self.anchors.push(Anchor {
            original,
            transliterated,
        });
    }

    /// Seal the map with the terminal anchor at both text lengths.
    pub fn finish(
        mut self,
        original_len: usize,
        transliterated_len: usize,
    ) -> std::result::Result<OffsetMap, String> {
        self.anchors.push(Anchor {
            original: original_len,
            transliterated: transliterated_len,
        });
        for pair in self.anchors.windows(2) {
            if pair[1].original < pair[0].original
                || pair[1].transliterated < pair[0].transliterated
            {
                return Err(format!(
                    "non-monotonic anchors at original offset {}",
                    pair[1].original
                ));
            }
        }
        Ok(OffsetMap {
            anchors: self.anchors,
        })
    }
}
