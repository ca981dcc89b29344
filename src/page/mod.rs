//! Page Module - the full landing composition.
//!
//! A page is three independent pieces wired to one clock:
//!
//! - **Columns** - one `let name = "..."` cascade per entry, staggered by a
//!   fixed base-delay step, running concurrently
//! - **Menu** - the CONTACT / PRIVACY POLICY actions, a two-block cascade
//!   anchored one pause after the first column completes
//! - **Gate** - the exclusive nested panel the menu actions toggle, carrying
//!   a [`PanelView`] so the renderer always knows what is mounted
//!
//! Columns deliberately overlap each other: the no-overlap guarantee of the
//! schedule applies within one cascade, while the page staggers whole
//! cascades against each other.

mod column;
mod contact;
mod privacy;

pub use column::*;
pub use contact::*;
pub use privacy::*;

use spark_signals::Signal;

use crate::compose::schedule::Block;
use crate::compose::{CascadeHandle, CascadeProps, cascade};
use crate::state::gate::{GateHandle, GateProps, gate};
use crate::state::subscribe_blink;
use crate::types::{Cleanup, run_cleanups};

/// Milliseconds per unit for menu entries.
pub const MENU_RATE_MS: u64 = 18;
/// Pause between the two menu entries.
pub const MENU_GAP_MS: u64 = 50;
/// Pause between the first column completing and the menu starting.
pub const MENU_ANCHOR_AFTER_MS: u64 = 200;
/// Flip interval for the tip cursor shared by every reveal on the page.
pub const CURSOR_BLINK_MS: u64 = 500;

// =============================================================================
// Props and Views
// =============================================================================

/// Static content for one column.
pub struct ColumnSpec {
    pub name: String,
    pub body: String,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

pub struct PageProps {
    pub columns: Vec<ColumnSpec>,
    /// Base-delay step between adjacent columns.
    pub stagger_ms: u64,
    /// Policy text for the privacy panel.
    pub privacy_text: String,
}

/// What the gate currently shows. Flows to the renderer through the gate's
/// view signal, so a panel switch is observed as a single change.
#[derive(Clone)]
pub enum PanelView {
    Contact(ContactHandle),
    Privacy(PrivacyHandle),
}

// =============================================================================
// Handle
// =============================================================================

/// Live view of the whole page. Cloneable; clones share the same signals,
/// so the renderer can hold one while key handlers hold another.
#[derive(Clone)]
pub struct PageHandle {
    columns: Vec<ColumnHandle>,
    menu: CascadeHandle,
    gate: GateHandle<PanelView>,
    blink: Signal<bool>,
}

impl PageHandle {
    pub fn columns(&self) -> &[ColumnHandle] {
        &self.columns
    }

    /// The CONTACT / PRIVACY POLICY action menu under the first column.
    pub fn menu(&self) -> &CascadeHandle {
        &self.menu
    }

    pub fn gate(&self) -> &GateHandle<PanelView> {
        &self.gate
    }

    /// Shared blink phase for every tip cursor on the page. Reading it
    /// inside an effect tracks the flip.
    pub fn cursor_visible(&self) -> bool {
        self.blink.get()
    }
}

// =============================================================================
// Constructor
// =============================================================================

/// Build the page: all columns, the anchored menu, and the panel gate.
///
/// The returned cleanup tears down every column, the menu, and whatever
/// panel is active, cancelling all pending timers.
pub fn page(props: PageProps) -> (PageHandle, Cleanup) {
    let mut cleanups: Vec<Cleanup> = Vec::new();

    let mut columns = Vec::with_capacity(props.columns.len());
    for (i, spec) in props.columns.into_iter().enumerate() {
        let (handle, cleanup) = column(ColumnProps {
            name: spec.name,
            body: spec.body,
            base_delay_ms: (i as u64).saturating_mul(props.stagger_ms),
        });
        columns.push(handle);
        cleanups.push(cleanup);
    }

    let menu_base = columns
        .first()
        .map(|c| c.completion_ms())
        .unwrap_or(0)
        .saturating_add(MENU_ANCHOR_AFTER_MS);
    let (menu, menu_cleanup) = cascade(CascadeProps {
        base_ms: menu_base,
        gap_ms: MENU_GAP_MS,
        blocks: vec![
            Block::new("CONTACT", MENU_RATE_MS),
            Block::new("PRIVACY POLICY", MENU_RATE_MS),
        ],
    });
    cleanups.push(menu_cleanup);

    // Panels anchor at their activation instant, not the page's.
    let privacy_text = props.privacy_text;
    let (panel_gate, gate_cleanup) = gate(GateProps {
        contact: Box::new(|| {
            let (handle, cleanup) = contact_form(0);
            (PanelView::Contact(handle), cleanup)
        }),
        privacy: Box::new(move || {
            let (handle, cleanup) = privacy_panel(PrivacyProps {
                text: privacy_text.clone(),
                start_delay_ms: 0,
            });
            (PanelView::Privacy(handle), cleanup)
        }),
    });
    cleanups.push(gate_cleanup);

    let (blink, blink_cleanup) = subscribe_blink(CURSOR_BLINK_MS);
    cleanups.push(blink_cleanup);

    let handle = PageHandle {
        columns,
        menu,
        gate: panel_gate,
        blink,
    };
    let cleanup: Cleanup = Box::new(move || run_cleanups(cleanups));
    (handle, cleanup)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::clock::{advance, advance_to, pending_count, reset_clock};
    use crate::state::gate::Panel;
    use crate::state::reset_blink;

    fn setup() {
        reset_clock();
        reset_blink();
    }

    fn demo_page() -> (PageHandle, Cleanup) {
        page(PageProps {
            columns: vec![
                ColumnSpec::new("about", "aa"),
                ColumnSpec::new("projects", "bb"),
                ColumnSpec::new("team", "cc"),
            ],
            stagger_ms: 200,
            privacy_text: "Effective".to_string(),
        })
    }

    #[test]
    fn test_columns_stagger_by_the_step() {
        setup();
        let (pg, _cleanup) = demo_page();

        advance_to(28);
        assert_eq!(pg.columns()[0].header().revealed(), "l");
        assert_eq!(pg.columns()[1].header().revealed(), "");
        assert_eq!(pg.columns()[2].header().revealed(), "");

        advance_to(228);
        assert_eq!(pg.columns()[1].header().revealed(), "l");
        assert_eq!(pg.columns()[2].header().revealed(), "");

        advance_to(428);
        assert_eq!(pg.columns()[2].header().revealed(), "l");
    }

    #[test]
    fn test_menu_anchors_on_first_column_completion() {
        setup();
        let (pg, _cleanup) = demo_page();

        let expected = pg.columns()[0].completion_ms() + MENU_ANCHOR_AFTER_MS;
        assert_eq!(pg.menu().offset_ms(0), Some(expected));
    }

    #[test]
    fn test_menu_types_both_actions() {
        setup();
        let (pg, _cleanup) = demo_page();

        let contact_start = pg.menu().offset_ms(0).unwrap();
        advance_to(contact_start + 7 * MENU_RATE_MS);
        assert_eq!(pg.menu().reveal(0).unwrap().revealed(), "CONTACT");

        let privacy_start = pg.menu().offset_ms(1).unwrap();
        advance_to(privacy_start + 14 * MENU_RATE_MS);
        assert_eq!(pg.menu().reveal(1).unwrap().revealed(), "PRIVACY POLICY");
        assert!(pg.menu().all_done());
    }

    #[test]
    fn test_gate_switches_panels_exclusively() {
        setup();
        let (pg, _cleanup) = demo_page();

        pg.gate().toggle(Panel::Contact);
        let contact = match pg.gate().view() {
            Some(PanelView::Contact(handle)) => handle,
            _ => panic!("expected the contact panel"),
        };

        advance(CONTACT_HEADER_RATE_MS);
        assert_eq!(contact.header().revealed(), "l");
        let frozen = contact.header().revealed();

        pg.gate().toggle(Panel::Privacy);
        let privacy = match pg.gate().view() {
            Some(PanelView::Privacy(handle)) => handle,
            _ => panic!("expected the privacy panel"),
        };

        advance(9 * PRIVACY_RATE_MS);
        assert_eq!(privacy.text().revealed(), "Effective");
        assert_eq!(
            contact.header().revealed(),
            frozen,
            "the switched-away panel stays frozen"
        );
    }

    #[test]
    fn test_retoggled_panel_starts_fresh_each_time() {
        setup();
        let (pg, _cleanup) = demo_page();

        for _ in 0..3 {
            pg.gate().toggle(Panel::Contact);
            let contact = match pg.gate().view() {
                Some(PanelView::Contact(handle)) => handle,
                _ => panic!("expected the contact panel"),
            };
            assert_eq!(contact.header().revealed(), "", "every activation starts empty");

            advance(CONTACT_HEADER_RATE_MS);
            assert_eq!(contact.header().revealed(), "l");

            pg.gate().toggle(Panel::Contact);
            assert!(pg.gate().view().is_none());
        }
    }

    #[test]
    fn test_cursor_blinks_on_the_shared_clock() {
        setup();
        let (pg, _cleanup) = demo_page();

        assert!(pg.cursor_visible());

        advance(CURSOR_BLINK_MS);
        assert!(!pg.cursor_visible());

        advance(CURSOR_BLINK_MS);
        assert!(pg.cursor_visible());
    }

    #[test]
    fn test_page_cleanup_cancels_everything() {
        setup();
        let (pg, cleanup) = demo_page();

        pg.gate().toggle(Panel::Privacy);
        advance_to(100);
        assert!(pending_count() > 0);

        cleanup();
        assert_eq!(pending_count(), 0);
    }
}
