//! Reveal Engine - incremental disclosure of one string.
//!
//! A reveal owns a single pending timer at any instant: a one-shot start
//! delay, then a tick chain that appends one grapheme per tick and re-arms
//! itself only after it has run. The tick that appends the final grapheme
//! sets `done` and arms nothing further.
//!
//! Props are tracked reactively: when `text`, `rate_ms`, or `delay_ms`
//! changes value, the pending timer is cancelled, the revealed prefix is
//! reset to empty, and the whole sequence restarts from scratch. Partial
//! progress is never resumed and old and new text never splice. Writing the
//! same value back is not a change and leaves the run untouched.
//!
//! Empty source text idles forever: nothing is armed and `done` stays false.
//!
//! # Example
//!
//! ```ignore
//! use reveal_tui::engine::{reveal, RevealProps};
//! use reveal_tui::state::clock;
//!
//! let (handle, cleanup) = reveal(RevealProps {
//!     text: "hello".into(),
//!     rate_ms: 10.into(),
//!     delay_ms: 0.into(),
//! });
//!
//! clock::advance(30);
//! assert_eq!(handle.revealed(), "hel");
//!
//! cleanup(); // cancels the pending tick
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{Signal, effect, signal};

use crate::engine::segments::Segments;
use crate::state::clock::{self, TimerId};
use crate::types::{Cleanup, PropValue};

/// Default milliseconds per revealed unit.
pub const DEFAULT_RATE_MS: u64 = 14;

// =============================================================================
// Props and Handle
// =============================================================================

/// Properties for a reveal.
pub struct RevealProps {
    /// Source text to disclose. Changing it restarts the run from empty.
    pub text: PropValue<String>,
    /// Milliseconds per unit. Zero reveals everything at the start instant.
    pub rate_ms: PropValue<u64>,
    /// One-shot delay before the first tick is armed.
    pub delay_ms: PropValue<u64>,
}

impl Default for RevealProps {
    fn default() -> Self {
        Self {
            text: PropValue::Static(String::new()),
            rate_ms: PropValue::Static(DEFAULT_RATE_MS),
            delay_ms: PropValue::Static(0),
        }
    }
}

/// Read-only view of a reveal's live state.
///
/// Reading inside an effect or derived tracks the underlying signals.
#[derive(Clone)]
pub struct RevealHandle {
    revealed: Signal<String>,
    done: Signal<bool>,
}

impl RevealHandle {
    /// The currently revealed prefix of the source text.
    pub fn revealed(&self) -> String {
        self.revealed.get()
    }

    /// True once the final unit has been appended.
    pub fn done(&self) -> bool {
        self.done.get()
    }

    pub fn revealed_signal(&self) -> Signal<String> {
        self.revealed.clone()
    }

    pub fn done_signal(&self) -> Signal<bool> {
        self.done.clone()
    }
}

// =============================================================================
// Run - one execution from empty prefix to completion or cancellation
// =============================================================================

/// Timer callbacks hold an `Rc` to their own run, so a superseded run can
/// never touch the timers or signals of its successor.
struct Run {
    segments: Segments,
    rate_ms: u64,
    shown: Cell<usize>,
    timer: Cell<Option<TimerId>>,
    alive: Cell<bool>,
    revealed: Signal<String>,
    done: Signal<bool>,
}

impl Run {
    fn cancel(&self) {
        self.alive.set(false);
        if let Some(id) = self.timer.take() {
            clock::clear_timeout(id);
        }
    }

    /// Arm the one-shot start delay; when it fires the tick chain begins.
    fn start(self: &Rc<Self>, delay_ms: u64) {
        let run = self.clone();
        let id = clock::set_timeout(delay_ms, move || run.arm_tick());
        self.timer.set(Some(id));
    }

    fn arm_tick(self: &Rc<Self>) {
        let run = self.clone();
        let id = clock::set_timeout(self.rate_ms, move || run.step());
        self.timer.set(Some(id));
    }

    /// Append exactly one unit. Re-arms only after the append, so ticks for
    /// one run are strictly ordered.
    fn step(self: &Rc<Self>) {
        self.timer.set(None);
        let shown = self.shown.get() + 1;
        self.shown.set(shown);
        self.revealed.set(self.segments.prefix(shown).to_string());

        // The write above propagates synchronously and may re-enter
        // teardown through a dependent effect.
        if !self.alive.get() {
            return;
        }

        if shown >= self.segments.len() {
            self.done.set(true);
        } else {
            self.arm_tick();
        }
    }
}

// =============================================================================
// Constructor
// =============================================================================

/// Create a reveal and start its first run.
///
/// Returns the live handle and a cleanup that cancels any pending timer and
/// stops prop tracking. After cleanup the handle's signals never change
/// again.
pub fn reveal(props: RevealProps) -> (RevealHandle, Cleanup) {
    let revealed = signal(String::new());
    let done = signal(false);

    let current: Rc<RefCell<Option<Rc<Run>>>> = Rc::new(RefCell::new(None));
    let seen: Rc<RefCell<Option<(String, u64, u64)>>> = Rc::new(RefCell::new(None));

    let current_for_effect = current.clone();
    let revealed_for_effect = revealed.clone();
    let done_for_effect = done.clone();

    let stop_effect = effect(move || {
        let text = props.text.get();
        let rate_ms = props.rate_ms.get();
        let delay_ms = props.delay_ms.get();

        // Same-value writes must not restart a run in progress.
        {
            let mut seen = seen.borrow_mut();
            let unchanged = seen
                .as_ref()
                .map(|(t, r, d)| *t == text && *r == rate_ms && *d == delay_ms)
                .unwrap_or(false);
            if unchanged {
                return;
            }
            *seen = Some((text.clone(), rate_ms, delay_ms));
        }

        if let Some(previous) = current_for_effect.borrow_mut().take() {
            previous.cancel();
        }
        revealed_for_effect.set(String::new());
        done_for_effect.set(false);

        let segments = Segments::new(text);
        if segments.is_empty() {
            // Idle: no timers, completion never fires.
            return;
        }

        let run = Rc::new(Run {
            segments,
            rate_ms,
            shown: Cell::new(0),
            timer: Cell::new(None),
            alive: Cell::new(true),
            revealed: revealed_for_effect.clone(),
            done: done_for_effect.clone(),
        });
        run.start(delay_ms);
        *current_for_effect.borrow_mut() = Some(run);
    });

    let handle = RevealHandle { revealed, done };
    let cleanup: Cleanup = Box::new(move || {
        stop_effect();
        if let Some(run) = current.borrow_mut().take() {
            run.cancel();
        }
    });

    (handle, cleanup)
}

// =============================================================================
// Tests
// =============================================================================
