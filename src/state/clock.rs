//! Timer Wheel - single-threaded deferred callbacks on a logical clock.
//!
//! Every delay in this crate flows through one thread-local wheel. Timers
//! are one-shot: repetition is expressed by a callback re-arming itself
//! after it has run, so no two callbacks for the same owner can ever be in
//! flight at once.
//!
//! Time is logical, in milliseconds, starting at 0. The event loop advances
//! it from wall time once per tick; tests advance it directly and are fully
//! deterministic.
//!
//! # Pattern
//!
//! - `set_timeout` returns a [`TimerId`]; the owner stores it and cancels it
//!   on every exit path (teardown, restart, supersession).
//! - `advance_to` fires due callbacks in `(due, arm-order)` order and sets
//!   `now` to each callback's due time while it runs, so a callback that
//!   re-arms computes its next due time from its own logical fire time.
//!   A re-armed callback whose due time is still inside the window fires in
//!   the same pass.
//! - Callbacks run outside the registry borrow and may freely call
//!   `set_timeout` / `clear_timeout`.
//!
//! # Example
//!
//! ```ignore
//! use reveal_tui::state::clock::{set_timeout, advance, now_ms};
//!
//! let id = set_timeout(100, || println!("fired at {}", now_ms()));
//! advance(100); // prints "fired at 100"
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;

// =============================================================================
// TIMER WHEEL
// =============================================================================

/// Handle to a pending timer. Cancelling an already-fired timer is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId {
    due_ms: u64,
    seq: u64,
}

struct Wheel {
    /// Logical time in milliseconds.
    now_ms: u64,
    /// Arm-order tiebreaker for timers sharing a due time.
    next_seq: u64,
    /// Pending callbacks keyed by (due time, arm order).
    queue: BTreeMap<(u64, u64), Box<dyn FnOnce()>>,
}

thread_local! {
    static WHEEL: RefCell<Wheel> = RefCell::new(Wheel {
        now_ms: 0,
        next_seq: 0,
        queue: BTreeMap::new(),
    });
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Current logical time in milliseconds.
pub fn now_ms() -> u64 {
    WHEEL.with(|w| w.borrow().now_ms)
}

/// Arm a one-shot callback `delay_ms` from now.
///
/// The returned [`TimerId`] stays valid until the callback fires or is
/// cancelled. A zero delay fires on the next advance pass that reaches the
/// current time.
pub fn set_timeout(delay_ms: u64, callback: impl FnOnce() + 'static) -> TimerId {
    WHEEL.with(|w| {
        let mut w = w.borrow_mut();
        let due_ms = w.now_ms.saturating_add(delay_ms);
        let seq = w.next_seq;
        w.next_seq += 1;
        w.queue.insert((due_ms, seq), Box::new(callback));
        TimerId { due_ms, seq }
    })
}

/// Cancel a pending timer.
///
/// Returns `true` if the timer was still pending. Cancelling a timer that
/// already fired (or was never armed) returns `false` and does nothing, so
/// teardown racing an in-flight tick is harmless.
pub fn clear_timeout(id: TimerId) -> bool {
    WHEEL.with(|w| w.borrow_mut().queue.remove(&(id.due_ms, id.seq)).is_some())
}

/// Advance logical time by `delta_ms`, firing every due callback.
pub fn advance(delta_ms: u64) {
    let target = now_ms().saturating_add(delta_ms);
    advance_to(target);
}

/// Advance logical time to `target_ms`, firing every due callback in order.
///
/// Targets behind the current time are clamped; time never moves backwards.
pub fn advance_to(target_ms: u64) {
    loop {
        // Pop the earliest due callback while borrowed, run it unborrowed.
        let callback = WHEEL.with(|w| {
            let mut w = w.borrow_mut();
            let target = target_ms.max(w.now_ms);
            match w.queue.keys().next().copied() {
                Some(key) if key.0 <= target => {
                    w.now_ms = w.now_ms.max(key.0);
                    w.queue.remove(&key)
                }
                _ => {
                    w.now_ms = target;
                    None
                }
            }
        });

        match callback {
            Some(callback) => callback(),
            None => break,
        }
    }
}

/// Number of pending timers (test introspection).
pub fn pending_count() -> usize {
    WHEEL.with(|w| w.borrow().queue.len())
}

/// Reset the wheel to time zero with no pending timers (for testing).
pub fn reset_clock() {
    WHEEL.with(|w| {
        let mut w = w.borrow_mut();
        w.now_ms = 0;
        w.next_seq = 0;
        w.queue.clear();
    });
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn setup() {
        reset_clock();
    }

    #[test]
    fn test_timeout_fires_on_advance() {
        setup();

        let fired = Rc::new(RefCell::new(Vec::new()));
        let fired_clone = fired.clone();
        set_timeout(100, move || fired_clone.borrow_mut().push(now_ms()));

        advance(99);
        assert!(fired.borrow().is_empty());

        advance(1);
        assert_eq!(*fired.borrow(), vec![100]);
    }

    #[test]
    fn test_fires_in_due_order() {
        setup();

        let order = Rc::new(RefCell::new(Vec::new()));
        for due in [30u64, 10, 20] {
            let order = order.clone();
            set_timeout(due, move || order.borrow_mut().push(due));
        }

        advance(30);
        assert_eq!(*order.borrow(), vec![10, 20, 30]);
    }

    #[test]
    fn test_same_due_fires_in_arm_order() {
        setup();

        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let order = order.clone();
            set_timeout(50, move || order.borrow_mut().push(tag));
        }

        advance(50);
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_clear_timeout_cancels() {
        setup();

        let fired = Rc::new(RefCell::new(0u32));
        let fired_clone = fired.clone();
        let id = set_timeout(10, move || *fired_clone.borrow_mut() += 1);

        assert!(clear_timeout(id));
        advance(100);
        assert_eq!(*fired.borrow(), 0);
        assert_eq!(pending_count(), 0);
    }

    #[test]
    fn test_clear_after_fire_is_noop() {
        setup();

        let id = set_timeout(10, || {});
        advance(10);
        assert!(!clear_timeout(id));
    }

    #[test]
    fn test_rearm_fires_within_same_pass() {
        setup();

        // A chain of zero-delay re-arms must drain inside one advance call.
        let count = Rc::new(RefCell::new(0u32));
        fn chain(count: Rc<RefCell<u32>>) {
            let remaining = 5 - *count.borrow();
            if remaining == 0 {
                return;
            }
            let next = count.clone();
            set_timeout(0, move || {
                *next.borrow_mut() += 1;
                chain(next.clone());
            });
        }
        chain(count.clone());

        advance(0);
        assert_eq!(*count.borrow(), 5);
    }

    #[test]
    fn test_rearm_has_no_drift() {
        setup();

        // Re-arming +10 from inside a callback keys off the logical fire
        // time, not the advance target, so fire times stay exact multiples.
        let times = Rc::new(RefCell::new(Vec::new()));
        fn arm(times: Rc<RefCell<Vec<u64>>>) {
            let next = times.clone();
            set_timeout(10, move || {
                next.borrow_mut().push(now_ms());
                if next.borrow().len() < 3 {
                    arm(next.clone());
                }
            });
        }
        arm(times.clone());

        advance_to(25);
        assert_eq!(*times.borrow(), vec![10, 20]);

        advance_to(30);
        assert_eq!(*times.borrow(), vec![10, 20, 30]);
    }

    #[test]
    fn test_cancel_from_inside_callback() {
        setup();

        let fired = Rc::new(RefCell::new(0u32));
        let fired_clone = fired.clone();
        let victim = set_timeout(20, move || *fired_clone.borrow_mut() += 1);

        set_timeout(10, move || {
            clear_timeout(victim);
        });

        advance(100);
        assert_eq!(*fired.borrow(), 0, "cancelled timer must not fire");
    }

    #[test]
    fn test_idle_advance_moves_now() {
        setup();

        advance(250);
        assert_eq!(now_ms(), 250);
        assert_eq!(pending_count(), 0);
    }

    #[test]
    fn test_advance_backwards_is_clamped() {
        setup();

        advance(100);
        advance_to(50);
        assert_eq!(now_ms(), 100);
    }

    #[test]
    fn test_reset_clears_pending() {
        setup();

        set_timeout(10, || {});
        set_timeout(20, || {});
        assert_eq!(pending_count(), 2);

        reset_clock();
        assert_eq!(pending_count(), 0);
        assert_eq!(now_ms(), 0);
    }
}
