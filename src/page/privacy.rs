//! Privacy Policy - the fast single-block nested panel.
//!
//! Policy text is long, so it types at the fastest rate on the page. The
//! text itself is caller-supplied data, not something this module knows.

use crate::compose::schedule::Block;
use crate::compose::{CascadeHandle, CascadeProps, cascade};
use crate::engine::RevealHandle;
use crate::types::Cleanup;

/// Milliseconds per unit for policy text.
pub const PRIVACY_RATE_MS: u64 = 8;

pub struct PrivacyProps {
    pub text: String,
    pub start_delay_ms: u64,
}

/// Invariant: the cascade holds exactly [policy text].
#[derive(Clone)]
pub struct PrivacyHandle {
    cascade: CascadeHandle,
}

impl PrivacyHandle {
    pub fn text(&self) -> &RevealHandle {
        &self.cascade.reveals()[0]
    }

    pub fn done(&self) -> bool {
        self.text().done()
    }
}

pub fn privacy_panel(props: PrivacyProps) -> (PrivacyHandle, Cleanup) {
    let (cascade, cleanup) = cascade(CascadeProps {
        base_ms: props.start_delay_ms,
        gap_ms: 0,
        blocks: vec![Block::new(props.text, PRIVACY_RATE_MS)],
    });
    (PrivacyHandle { cascade }, cleanup)
}

// =============================================================================
// Tests
// =============================================================================
