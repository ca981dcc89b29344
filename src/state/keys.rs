//! Keys - named key handler registry.
//!
//! Panels toggle on single keys, so the registry is keyed by normalized
//! key name (`"c"`, `"p"`, `"esc"`, `"ctrl+c"`) rather than by raw event.
//! Handlers for one name run in registration order; the first to return
//! true consumes the event and stops the chain.
//!
//! # Example
//!
//! ```ignore
//! let unsub = on_key("c", || {
//!     // toggle the contact panel
//!     true
//! });
//!
//! dispatch_key("c"); // true: consumed
//! unsub();
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

// =============================================================================
// Handler Registry
// =============================================================================

type KeyHandler = Rc<dyn Fn() -> bool>;

struct KeyRegistry {
    handlers: HashMap<String, Vec<(usize, KeyHandler)>>,
    next_id: usize,
}

impl KeyRegistry {
    fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

thread_local! {
    static REGISTRY: RefCell<KeyRegistry> = RefCell::new(KeyRegistry::new());
}

/// Lowercase the name so `"C"`, `"Ctrl+C"` and `"ctrl+c"` all land in the
/// same bucket.
fn normalize(name: &str) -> String {
    name.to_ascii_lowercase()
}

// =============================================================================
// Public API
// =============================================================================

/// Register a handler for one named key.
/// Return true from the handler to consume the event.
/// Returns a cleanup function that unregisters the handler.
pub fn on_key<F>(name: &str, handler: F) -> impl FnOnce()
where
    F: Fn() -> bool + 'static,
{
    let name = normalize(name);
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.handlers
            .entry(name.clone())
            .or_default()
            .push((id, Rc::new(handler)));
        id
    });

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            if let Some(handlers) = reg.handlers.get_mut(&name) {
                handlers.retain(|(handler_id, _)| *handler_id != id);
                if handlers.is_empty() {
                    reg.handlers.remove(&name);
                }
            }
        });
    }
}

/// Dispatch a named key to its handlers in registration order.
/// Returns true if any handler consumed it.
pub fn dispatch_key(name: &str) -> bool {
    let name = normalize(name);

    // Snapshot outside the borrow: a handler may register or unregister
    // keys while it runs.
    let handlers: Vec<KeyHandler> = REGISTRY.with(|reg| {
        reg.borrow()
            .handlers
            .get(&name)
            .map(|list| list.iter().map(|(_, handler)| handler.clone()).collect())
            .unwrap_or_default()
    });

    for handler in handlers {
        if handler() {
            return true;
        }
    }
    false
}

/// Drop every handler. For tests.
pub fn reset_keys() {
    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.handlers.clear();
        reg.next_id = 0;
    });
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset_keys();
    }

    #[test]
    fn test_dispatch_runs_handler() {
        setup();
        let hits = Rc::new(Cell::new(0));
        let hits_for_handler = hits.clone();

        let _unsub = on_key("c", move || {
            hits_for_handler.set(hits_for_handler.get() + 1);
            true
        });

        assert!(dispatch_key("c"));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_unknown_key_is_not_consumed() {
        setup();
        assert!(!dispatch_key("x"));
    }

    #[test]
    fn test_unconsumed_event_reports_false() {
        setup();
        let _unsub = on_key("p", || false);
        assert!(!dispatch_key("p"));
    }

    #[test]
    fn test_first_consuming_handler_stops_the_chain() {
        setup();
        let second_ran = Rc::new(Cell::new(false));
        let second_ran_for_handler = second_ran.clone();

        let _first = on_key("esc", || true);
        let _second = on_key("esc", move || {
            second_ran_for_handler.set(true);
            true
        });

        assert!(dispatch_key("esc"));
        assert!(!second_ran.get(), "consumed events stop at the first handler");
    }

    #[test]
    fn test_names_are_case_insensitive() {
        setup();
        let _unsub = on_key("Ctrl+C", || true);
        assert!(dispatch_key("ctrl+c"));
    }

    #[test]
    fn test_cleanup_unregisters() {
        setup();
        let unsub = on_key("c", || true);
        assert!(dispatch_key("c"));

        unsub();
        assert!(!dispatch_key("c"));
    }

    #[test]
    fn test_cleanup_removes_only_its_own_handler() {
        setup();
        let unsub_a = on_key("c", || false);
        let _unsub_b = on_key("c", || true);

        unsub_a();
        assert!(dispatch_key("c"), "remaining handler still runs");
    }

    #[test]
    fn test_reset_clears_all_handlers() {
        setup();
        let _unsub = on_key("c", || true);
        reset_keys();
        assert!(!dispatch_key("c"));
    }
}
