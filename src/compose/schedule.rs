//! Cascade Schedule - pure offset arithmetic for block sequences.
//!
//! A cascade is an ordered list of text blocks that type one after another.
//! The start offset of every block is derived, never hand-summed: each block
//! starts a fixed gap after the previous block has had exactly enough time
//! to finish typing. All arithmetic is saturating, so absurd rates or
//! lengths flatten out at `u64::MAX` instead of wrapping.
//!
//! Nothing here touches timers or signals; this module is plain data in,
//! plain data out, and is tested as such.

use crate::engine::unit_count;

// =============================================================================
// Block
// =============================================================================

/// One block of a cascade: what to type and how fast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub text: String,
    /// Milliseconds per revealed unit.
    pub rate_ms: u64,
}

impl Block {
    pub fn new(text: impl Into<String>, rate_ms: u64) -> Self {
        Self {
            text: text.into(),
            rate_ms,
        }
    }

    /// Time for this block to type out in full: `units x rate`.
    pub fn typing_ms(&self) -> u64 {
        typing_ms(unit_count(&self.text), self.rate_ms)
    }
}

// =============================================================================
// Schedule arithmetic
// =============================================================================

/// Milliseconds to type `units` units at `rate_ms` per unit.
pub fn typing_ms(units: usize, rate_ms: u64) -> u64 {
    (units as u64).saturating_mul(rate_ms)
}

/// Start offset for every block, measured from the cascade's anchor instant.
///
/// `offset(0) = base`; `offset(i) = offset(i-1) + gap + typing(i-1)`.
/// A block therefore never starts before its predecessor has finished
/// typing plus one fixed pause.
pub fn offsets(base_ms: u64, gap_ms: u64, blocks: &[Block]) -> Vec<u64> {
    let mut out = Vec::with_capacity(blocks.len());
    let mut offset = base_ms;
    for i in 0..blocks.len() {
        if i > 0 {
            offset = offset
                .saturating_add(gap_ms)
                .saturating_add(blocks[i - 1].typing_ms());
        }
        out.push(offset);
    }
    out
}

/// The instant a hypothetical next block would start: one gap after the last
/// block finishes typing. Consumers anchor follow-up content here. An empty
/// cascade completes at `base_ms`.
pub fn completion_ms(base_ms: u64, gap_ms: u64, blocks: &[Block]) -> u64 {
    match blocks.last() {
        Some(last) => {
            let all = offsets(base_ms, gap_ms, blocks);
            all.last()
                .copied()
                .unwrap_or(base_ms)
                .saturating_add(gap_ms)
                .saturating_add(last.typing_ms())
        }
        None => base_ms,
    }
}

// =============================================================================
// Tests
// =============================================================================
