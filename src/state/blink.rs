//! Blink - shared cursor phase clocks.
//!
//! The block cursor drawn at the tip of an in-progress reveal blinks. All
//! cursors blinking at the same interval share one phase signal and one
//! self-re-arming timer: the first subscriber starts the timer, the last
//! one stops it and resets the phase to visible. Sharing keeps every cursor
//! on screen in sync and bounds timer count by the number of distinct
//! intervals, not the number of cursors.
//!
//! # Example
//!
//! ```ignore
//! let (phase, unsubscribe) = subscribe_blink(500);
//! // phase.get() flips every 500ms while subscribed
//! unsubscribe();
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use spark_signals::{Signal, signal};

use crate::state::clock::{self, TimerId};
use crate::types::Cleanup;

// =============================================================================
// Registry
// =============================================================================

/// Per-interval shared timer state.
struct BlinkEntry {
    /// true = cursor visible
    phase: Signal<bool>,
    /// Pending flip, if the clock is armed.
    timer: Option<TimerId>,
    subscribers: usize,
}

thread_local! {
    /// Map from interval (ms) to its shared blink entry.
    static BLINK_REGISTRY: RefCell<HashMap<u64, BlinkEntry>> = RefCell::new(HashMap::new());
}

// =============================================================================
// Public API
// =============================================================================

/// Subscribe to the shared blink clock for `interval_ms`.
///
/// Returns the shared phase signal plus an unsubscribe cleanup. The phase
/// starts visible and flips every `interval_ms`. An interval of 0 disables
/// blinking: the returned signal is permanently true and the cleanup is a
/// no-op.
pub fn subscribe_blink(interval_ms: u64) -> (Signal<bool>, Cleanup) {
    if interval_ms == 0 {
        return (signal(true), Box::new(|| {}));
    }

    let (phase, is_first) = BLINK_REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        let entry = registry.entry(interval_ms).or_insert_with(|| BlinkEntry {
            phase: signal(true),
            timer: None,
            subscribers: 0,
        });
        entry.subscribers += 1;
        (entry.phase.clone(), entry.subscribers == 1)
    });

    if is_first {
        arm(interval_ms);
    }

    let cleanup: Cleanup = Box::new(move || unsubscribe(interval_ms));
    (phase, cleanup)
}

/// Current phase for `interval_ms`; true (visible) if nothing is subscribed.
pub fn blink_phase(interval_ms: u64) -> bool {
    BLINK_REGISTRY.with(|registry| {
        registry
            .borrow()
            .get(&interval_ms)
            .map(|entry| entry.phase.get())
            .unwrap_or(true)
    })
}

/// True while a flip timer is armed for `interval_ms`.
pub fn is_blink_running(interval_ms: u64) -> bool {
    BLINK_REGISTRY.with(|registry| {
        registry
            .borrow()
            .get(&interval_ms)
            .is_some_and(|entry| entry.timer.is_some())
    })
}

pub fn subscriber_count(interval_ms: u64) -> usize {
    BLINK_REGISTRY.with(|registry| {
        registry
            .borrow()
            .get(&interval_ms)
            .map(|entry| entry.subscribers)
            .unwrap_or(0)
    })
}

/// Cancel every blink timer and drop all entries. For tests.
pub fn reset_blink() {
    let timers: Vec<TimerId> = BLINK_REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        let timers = registry
            .values_mut()
            .filter_map(|entry| entry.timer.take())
            .collect();
        registry.clear();
        timers
    });
    for id in timers {
        clock::clear_timeout(id);
    }
}

// =============================================================================
// Internals
// =============================================================================

/// Arm the next flip. The callback re-arms before flipping, so an
/// unsubscribe triggered by the flip itself still finds a timer to cancel.
fn arm(interval_ms: u64) {
    let id = clock::set_timeout(interval_ms, move || {
        let phase = BLINK_REGISTRY.with(|registry| {
            let mut registry = registry.borrow_mut();
            registry.get_mut(&interval_ms).and_then(|entry| {
                if entry.subscribers == 0 {
                    return None;
                }
                entry.timer = None;
                Some(entry.phase.clone())
            })
        });

        if let Some(phase) = phase {
            arm(interval_ms);
            phase.set(!phase.get());
        }
    });

    BLINK_REGISTRY.with(|registry| {
        if let Some(entry) = registry.borrow_mut().get_mut(&interval_ms) {
            entry.timer = Some(id);
        }
    });
}

fn unsubscribe(interval_ms: u64) {
    let stale = BLINK_REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        match registry.get_mut(&interval_ms) {
            Some(entry) => {
                entry.subscribers = entry.subscribers.saturating_sub(1);
                if entry.subscribers == 0 {
                    // Reset to visible so a re-shown cursor starts solid.
                    entry.phase.set(true);
                    entry.timer.take()
                } else {
                    None
                }
            }
            None => None,
        }
    });

    if let Some(id) = stale {
        clock::clear_timeout(id);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::clock::{advance, pending_count, reset_clock};

    fn setup() {
        reset_clock();
        reset_blink();
    }

    #[test]
    fn test_phase_flips_every_interval() {
        setup();
        let (phase, _unsub) = subscribe_blink(500);

        assert!(phase.get(), "starts visible");

        advance(500);
        assert!(!phase.get());

        advance(500);
        assert!(phase.get());
    }

    #[test]
    fn test_same_interval_shares_one_timer() {
        setup();
        let (phase_a, _unsub_a) = subscribe_blink(500);
        let (phase_b, _unsub_b) = subscribe_blink(500);

        assert_eq!(subscriber_count(500), 2);
        assert_eq!(pending_count(), 1, "two subscribers, one timer");

        advance(500);
        assert_eq!(phase_a.get(), phase_b.get());
    }

    #[test]
    fn test_different_intervals_are_independent() {
        setup();
        let (fast, _unsub_fast) = subscribe_blink(100);
        let (slow, _unsub_slow) = subscribe_blink(500);

        advance(100);
        assert!(!fast.get());
        assert!(slow.get());
    }

    #[test]
    fn test_last_unsubscribe_stops_timer_and_resets_phase() {
        setup();
        let (phase, unsub_a) = subscribe_blink(500);
        let (_, unsub_b) = subscribe_blink(500);

        advance(500);
        assert!(!phase.get());

        unsub_a();
        assert!(is_blink_running(500), "one subscriber left, keep flipping");

        unsub_b();
        assert!(!is_blink_running(500));
        assert_eq!(pending_count(), 0);
        assert!(phase.get(), "phase resets to visible on stop");

        advance(2000);
        assert!(phase.get(), "no flips after the last unsubscribe");
    }

    #[test]
    fn test_resubscribe_restarts_timer() {
        setup();
        let (_, unsub) = subscribe_blink(500);
        unsub();
        assert!(!is_blink_running(500));

        let (phase, _unsub) = subscribe_blink(500);
        assert!(is_blink_running(500));

        advance(500);
        assert!(!phase.get());
    }

    #[test]
    fn test_zero_interval_is_noop() {
        setup();
        let (phase, unsub) = subscribe_blink(0);

        assert!(phase.get());
        assert_eq!(pending_count(), 0);

        advance(10_000);
        assert!(phase.get());
        unsub();
    }

    #[test]
    fn test_reset_blink_cancels_timers() {
        setup();
        let (_, _unsub) = subscribe_blink(500);
        assert_eq!(pending_count(), 1);

        reset_blink();
        assert_eq!(pending_count(), 0);
        assert_eq!(subscriber_count(500), 0);
    }
}
