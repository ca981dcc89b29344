//! Interaction Gate - exclusive, user-toggled nested content.
//!
//! The gate owns which of a small set of named panels is currently active
//! and mounts exactly one of them at a time. Activating a name switches to
//! it; activating the active name toggles back to none. Every activation
//! runs the panel's builder from scratch, so repeated toggles always
//! produce fresh runs, and every deactivation runs the previous builder's
//! cleanup in full before anything new is built. Stale content never keeps
//! typing invisibly.
//!
//! # Pattern
//!
//! Internally this is a conditional mount: an `effect_scope` wraps one
//! tracking effect plus an `on_scope_dispose` hook, and a shared slot swaps
//! the active panel's cleanup in and out. A last-value guard skips repeat
//! writes of the same state so a redundant `set` cannot tear down and
//! rebuild a panel that is already showing.
//!
//! The view payload `T` is caller-defined (the page uses an enum of panel
//! handles). The gate writes its `view` signal exactly once per transition,
//! so a direct Contact to Privacy switch never exposes an intermediate
//! empty frame to observers.
//!
//! # Example
//!
//! ```ignore
//! use reveal_tui::state::gate::{gate, GateProps, Panel};
//!
//! let (handle, cleanup) = gate(GateProps {
//!     contact: Box::new(|| build_contact()),
//!     privacy: Box::new(|| build_privacy()),
//! });
//!
//! handle.toggle(Panel::Contact);  // mount contact
//! handle.toggle(Panel::Privacy);  // tear down contact, mount privacy
//! handle.toggle(Panel::Privacy);  // tear down privacy, back to none
//! cleanup();
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{Signal, effect, effect_scope, mutable_source, on_scope_dispose, signal};

use crate::types::Cleanup;

// =============================================================================
// Types
// =============================================================================

/// The named panels a gate can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Contact,
    Privacy,
}

/// One builder per panel. A builder returns the caller's view payload plus
/// the cleanup that tears the panel down (cancelling its timers).
pub struct GateProps<T: Clone + 'static> {
    pub contact: Box<dyn Fn() -> (T, Cleanup)>,
    pub privacy: Box<dyn Fn() -> (T, Cleanup)>,
}

/// Live view of a gate. Cloneable; all clones share the same state.
#[derive(Clone)]
pub struct GateHandle<T: Clone + 'static> {
    active: Signal<Option<Panel>>,
    view: Signal<Option<T>>,
}

impl<T: Clone + 'static> GateHandle<T> {
    /// Activate `panel`, or deactivate it if it is already the active one.
    pub fn toggle(&self, panel: Panel) {
        let next = if self.active.get() == Some(panel) {
            None
        } else {
            Some(panel)
        };
        self.active.set(next);
    }

    /// Deactivate whatever is active.
    pub fn close(&self) {
        self.active.set(None);
    }

    pub fn active(&self) -> Option<Panel> {
        self.active.get()
    }

    /// The active panel's payload, or `None` when nothing is mounted.
    pub fn view(&self) -> Option<T> {
        self.view.get()
    }

    pub fn view_signal(&self) -> Signal<Option<T>> {
        self.view.clone()
    }

    pub fn active_signal(&self) -> Signal<Option<Panel>> {
        self.active.clone()
    }
}

// =============================================================================
// Constructor
// =============================================================================

/// Create a gate starting with no panel active.
///
/// The returned cleanup stops the tracking effect and tears down the active
/// panel if one is mounted. After cleanup, toggles still write the `active`
/// signal but nothing is built or torn down any more.
pub fn gate<T: Clone + 'static>(props: GateProps<T>) -> (GateHandle<T>, Cleanup) {
    let active: Signal<Option<Panel>> = signal(None);
    // `T` is a caller-defined payload with no meaningful equality; the
    // last-value guard in the effect below already filters repeat writes.
    let view: Signal<Option<T>> = mutable_source(None);

    let scope = effect_scope(false);
    let cleanup_slot: Rc<RefCell<Option<Cleanup>>> = Rc::new(RefCell::new(None));
    let last_mounted: Rc<Cell<Option<Option<Panel>>>> = Rc::new(Cell::new(None));

    let active_for_effect = active.clone();
    let view_for_effect = view.clone();

    scope.run(move || {
        let cleanup_for_update = cleanup_slot.clone();
        let cleanup_for_dispose = cleanup_slot.clone();
        let last_for_effect = last_mounted.clone();

        let _effect_cleanup = effect(move || {
            let target = active_for_effect.get();

            // Same state written again: leave the mounted panel alone.
            if last_for_effect.get() == Some(target) {
                return;
            }
            last_for_effect.set(Some(target));

            // Old panel down first, new panel up second.
            if let Some(cleanup) = cleanup_for_update.borrow_mut().take() {
                cleanup();
            }

            match target {
                Some(panel) => {
                    let (payload, cleanup) = match panel {
                        Panel::Contact => (props.contact)(),
                        Panel::Privacy => (props.privacy)(),
                    };
                    *cleanup_for_update.borrow_mut() = Some(cleanup);
                    view_for_effect.set(Some(payload));
                }
                None => {
                    view_for_effect.set(None);
                }
            }
        });

        on_scope_dispose(move || {
            if let Some(cleanup) = cleanup_for_dispose.borrow_mut().take() {
                cleanup();
            }
        });
    });

    let handle = GateHandle { active, view };
    let cleanup: Cleanup = Box::new(move || {
        scope.stop();
    });

    (handle, cleanup)
}

// =============================================================================
// Tests
// =============================================================================
