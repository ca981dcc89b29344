//! Column - one `let name = "..."` code block.
//!
//! A column types three blocks in cascade: the declaration opener
//! `let {name} = "`, the body text, and the closing quote. The opener and
//! quote type at the header rate, the body at the slower body rate, with a
//! fixed pause between blocks. The schedule derives every offset, so a
//! longer body pushes the closing quote later without any call site doing
//! arithmetic.

use crate::compose::schedule::Block;
use crate::compose::{CascadeHandle, CascadeProps, cascade};
use crate::engine::RevealHandle;
use crate::types::Cleanup;

/// Milliseconds per unit for the opener and closing quote.
pub const HEADER_RATE_MS: u64 = 28;
/// Milliseconds per unit for the body text.
pub const BODY_RATE_MS: u64 = 12;
/// Pause between blocks.
pub const BLOCK_GAP_MS: u64 = 350;

// =============================================================================
// Props and Handle
// =============================================================================

pub struct ColumnProps {
    /// Variable name typed into the opener.
    pub name: String,
    pub body: String,
    /// Offset of the whole column from the construction instant.
    pub base_delay_ms: u64,
}

/// Live view of one column.
///
/// Invariant: the cascade holds exactly [opener, body, closing quote].
#[derive(Clone)]
pub struct ColumnHandle {
    cascade: CascadeHandle,
}

impl ColumnHandle {
    /// The `let {name} = "` opener.
    pub fn header(&self) -> &RevealHandle {
        &self.cascade.reveals()[0]
    }

    pub fn body(&self) -> &RevealHandle {
        &self.cascade.reveals()[1]
    }

    pub fn close_quote(&self) -> &RevealHandle {
        &self.cascade.reveals()[2]
    }

    /// One gap after the closing quote finishes. Page-level content (the
    /// action menu) anchors relative to the first column's completion.
    pub fn completion_ms(&self) -> u64 {
        self.cascade.completion_ms()
    }

    pub fn all_done(&self) -> bool {
        self.cascade.all_done()
    }
}

// =============================================================================
// Constructor
// =============================================================================

pub fn column(props: ColumnProps) -> (ColumnHandle, Cleanup) {
    let header = format!("let {} = \"", props.name);
    let (cascade, cleanup) = cascade(CascadeProps {
        base_ms: props.base_delay_ms,
        gap_ms: BLOCK_GAP_MS,
        blocks: vec![
            Block::new(header, HEADER_RATE_MS),
            Block::new(props.body, BODY_RATE_MS),
            Block::new("\"", HEADER_RATE_MS),
        ],
    });
    (ColumnHandle { cascade }, cleanup)
}

// =============================================================================
// Tests
// =============================================================================
