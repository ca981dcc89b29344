//! Contact Form - the `let contactForm = {` nested panel.
//!
//! Five blocks in cascade: the declaration opener, the three field labels,
//! and the closing brace. The field chrome (input boxes, send button) is not
//! timed separately: it becomes visible the instant the opener finishes
//! typing, driven by the opener's completion signal.

use crate::compose::schedule::Block;
use crate::compose::{CascadeHandle, CascadeProps, cascade};
use crate::engine::RevealHandle;
use crate::types::Cleanup;

/// Milliseconds per unit for the opener and closing brace.
pub const CONTACT_HEADER_RATE_MS: u64 = 18;
/// Milliseconds per unit for the field labels.
pub const CONTACT_LABEL_RATE_MS: u64 = 12;
/// Pause between blocks.
pub const CONTACT_GAP_MS: u64 = 120;

// =============================================================================
// Handle
// =============================================================================

/// Live view of the contact form.
///
/// Invariant: the cascade holds exactly
/// [opener, name label, email label, message label, closing brace].
#[derive(Clone)]
pub struct ContactHandle {
    cascade: CascadeHandle,
}

impl ContactHandle {
    /// The `let contactForm = {` opener.
    pub fn header(&self) -> &RevealHandle {
        &self.cascade.reveals()[0]
    }

    pub fn name_label(&self) -> &RevealHandle {
        &self.cascade.reveals()[1]
    }

    pub fn email_label(&self) -> &RevealHandle {
        &self.cascade.reveals()[2]
    }

    pub fn message_label(&self) -> &RevealHandle {
        &self.cascade.reveals()[3]
    }

    pub fn close_brace(&self) -> &RevealHandle {
        &self.cascade.reveals()[4]
    }

    /// Input boxes and the send button show once the opener has typed out.
    /// Reading this inside an effect tracks the opener's completion signal.
    pub fn chrome_visible(&self) -> bool {
        self.header().done()
    }

    pub fn completion_ms(&self) -> u64 {
        self.cascade.completion_ms()
    }
}

// =============================================================================
// Constructor
// =============================================================================

pub fn contact_form(start_delay_ms: u64) -> (ContactHandle, Cleanup) {
    let (cascade, cleanup) = cascade(CascadeProps {
        base_ms: start_delay_ms,
        gap_ms: CONTACT_GAP_MS,
        blocks: vec![
            Block::new("let contactForm = {", CONTACT_HEADER_RATE_MS),
            Block::new("name:", CONTACT_LABEL_RATE_MS),
            Block::new("email:", CONTACT_LABEL_RATE_MS),
            Block::new("message:", CONTACT_LABEL_RATE_MS),
            Block::new("}", CONTACT_HEADER_RATE_MS),
        ],
    });
    (ContactHandle { cascade }, cleanup)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::clock::{advance_to, pending_count, reset_clock};

    fn setup() {
        reset_clock();
    }

    #[test]
    fn test_opener_types_out() {
        setup();
        let (handle, _cleanup) = contact_form(0);

        // "let contactForm = {" is 19 units at 18ms
        advance_to(342);
        assert_eq!(handle.header().revealed(), "let contactForm = {");
        assert!(handle.header().done());
    }

    #[test]
    fn test_chrome_appears_when_opener_completes() {
        setup();
        let (handle, _cleanup) = contact_form(0);

        advance_to(341);
        assert!(!handle.chrome_visible());

        advance_to(342);
        assert!(handle.chrome_visible(), "chrome is gated on the opener, not a timer");
    }

    #[test]
    fn test_labels_cascade_in_order() {
        setup();
        let (handle, _cleanup) = contact_form(0);

        // name offset = 342 + 120 = 462
        advance_to(462 + 12);
        assert_eq!(handle.name_label().revealed(), "n");
        assert_eq!(handle.email_label().revealed(), "");

        // email offset = 462 + 120 + 5x12 = 642
        advance_to(642 + 12);
        assert_eq!(handle.name_label().revealed(), "name:");
        assert_eq!(handle.email_label().revealed(), "e");
        assert_eq!(handle.message_label().revealed(), "");

        // message offset = 642 + 120 + 6x12 = 834
        advance_to(834 + 8 * 12);
        assert_eq!(handle.message_label().revealed(), "message:");
    }

    #[test]
    fn test_close_brace_ends_the_form() {
        setup();
        let (handle, _cleanup) = contact_form(0);

        // close offset = 834 + 120 + 8x12 = 1050
        advance_to(1050 + 18);
        assert_eq!(handle.close_brace().revealed(), "}");
        assert_eq!(handle.completion_ms(), 1050 + 120 + 18);
    }

    #[test]
    fn test_start_delay_shifts_the_form() {
        setup();
        let (handle, _cleanup) = contact_form(500);

        advance_to(517);
        assert_eq!(handle.header().revealed(), "");

        advance_to(518);
        assert_eq!(handle.header().revealed(), "l");
    }

    #[test]
    fn test_cleanup_stops_the_form() {
        setup();
        let (handle, cleanup) = contact_form(0);

        advance_to(100);
        cleanup();
        assert_eq!(pending_count(), 0);

        advance_to(5000);
        assert!(!handle.chrome_visible());
    }
}
