//! Cascade - a set of reveals choreographed by the schedule.
//!
//! `cascade()` turns a block list into one reveal per block, each armed with
//! its computed start offset. All offsets are anchored at the construction
//! instant, so a cascade built at logical time `t` types its first block
//! starting at `t + base`. Cascades share no state: any number run
//! concurrently against the same clock without ordering between them.
//!
//! # Example
//!
//! ```ignore
//! use reveal_tui::compose::{cascade, CascadeProps, schedule::Block};
//!
//! let (handle, cleanup) = cascade(CascadeProps {
//!     base_ms: 0,
//!     gap_ms: 350,
//!     blocks: vec![
//!         Block::new("let about = \"", 28),
//!         Block::new("Some body text.", 12),
//!         Block::new("\"", 28),
//!     ],
//! });
//!
//! // handle.reveal(1) grows only after block 0 has typed out plus the gap.
//! cleanup();
//! ```

use crate::compose::schedule::{self, Block};
use crate::engine::{RevealHandle, RevealProps, reveal};
use crate::types::{Cleanup, run_cleanups};

// =============================================================================
// Props and Handle
// =============================================================================

pub struct CascadeProps {
    /// Offset of the first block from the construction instant.
    pub base_ms: u64,
    /// Pause between one block finishing and the next starting.
    pub gap_ms: u64,
    pub blocks: Vec<Block>,
}

/// Read-only view of a running cascade.
#[derive(Clone)]
pub struct CascadeHandle {
    reveals: Vec<RevealHandle>,
    offsets: Vec<u64>,
    completion_ms: u64,
}

impl CascadeHandle {
    pub fn len(&self) -> usize {
        self.reveals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reveals.is_empty()
    }

    pub fn reveal(&self, index: usize) -> Option<&RevealHandle> {
        self.reveals.get(index)
    }

    pub fn reveals(&self) -> &[RevealHandle] {
        &self.reveals
    }

    /// Computed start offset of block `index`, from the anchor instant.
    pub fn offset_ms(&self, index: usize) -> Option<u64> {
        self.offsets.get(index).copied()
    }

    /// One gap after the final block finishes typing. Follow-up content
    /// (menus, controls) anchors here.
    pub fn completion_ms(&self) -> u64 {
        self.completion_ms
    }

    /// True once every block has typed out. Blocks with empty text never
    /// complete, so prefer `completion_ms()` for anchoring when a cascade
    /// may contain them.
    pub fn all_done(&self) -> bool {
        self.reveals.iter().all(|r| r.done())
    }
}

// =============================================================================
// Constructor
// =============================================================================

/// Build one reveal per block, each delayed by its schedule offset.
///
/// The returned cleanup tears down every block's reveal, cancelling all
/// pending timers in one call.
pub fn cascade(props: CascadeProps) -> (CascadeHandle, Cleanup) {
    let offsets = schedule::offsets(props.base_ms, props.gap_ms, &props.blocks);
    let completion_ms = schedule::completion_ms(props.base_ms, props.gap_ms, &props.blocks);

    let mut reveals = Vec::with_capacity(props.blocks.len());
    let mut cleanups: Vec<Cleanup> = Vec::with_capacity(props.blocks.len());

    for (block, offset) in props.blocks.into_iter().zip(offsets.iter().copied()) {
        let (handle, cleanup) = reveal(RevealProps {
            text: block.text.into(),
            rate_ms: block.rate_ms.into(),
            delay_ms: offset.into(),
        });
        reveals.push(handle);
        cleanups.push(cleanup);
    }

    let handle = CascadeHandle {
        reveals,
        offsets,
        completion_ms,
    };
    let cleanup: Cleanup = Box::new(move || run_cleanups(cleanups));

    (handle, cleanup)
}

// =============================================================================
// Tests
// =============================================================================
