//! Grapheme Segmentation - reveal units of a source string.
//!
//! A reveal advances one *unit* per tick, where a unit is an extended
//! grapheme cluster, so combining sequences, CRLF pairs, and ZWJ emoji are
//! appended atomically and every revealed prefix is a valid string slice.

use unicode_segmentation::UnicodeSegmentation;

/// Number of reveal units in a string.
///
/// Shared with the cascade scheduler, which multiplies unit counts by rates
/// to compute typing durations.
pub fn unit_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// A source string with precomputed grapheme boundaries.
///
/// `prefix(n)` is O(1) and always lands on a unit boundary, which keeps the
/// revealed text a true prefix of the source at every step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    source: String,
    /// Byte offset of the end of each unit, in order.
    ends: Vec<usize>,
}

impl Segments {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let ends = source
            .grapheme_indices(true)
            .map(|(idx, grapheme)| idx + grapheme.len())
            .collect();
        Self { source, ends }
    }

    /// Number of reveal units.
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// The full source string.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The first `units` units of the source (clamped to the full string).
    pub fn prefix(&self, units: usize) -> &str {
        if units == 0 || self.ends.is_empty() {
            return "";
        }
        let last = units.min(self.ends.len());
        &self.source[..self.ends[last - 1]]
    }
}

// =============================================================================
// Tests
// =============================================================================
