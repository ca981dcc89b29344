//! Terminal - shared viewport size signals.
//!
//! One pair of signals per thread holds the terminal dimensions. The mount
//! pipeline seeds them from the real terminal, resize events update them,
//! and the frame derivation reads them so a resize recomposes the page.

use std::cell::RefCell;
use std::io;

use spark_signals::{Signal, signal};

const DEFAULT_WIDTH: u16 = 80;
const DEFAULT_HEIGHT: u16 = 24;

struct TerminalState {
    width: Signal<u16>,
    height: Signal<u16>,
}

thread_local! {
    static TERMINAL: RefCell<Option<TerminalState>> = const { RefCell::new(None) };
}

fn with_state<R>(f: impl FnOnce(&TerminalState) -> R) -> R {
    TERMINAL.with(|cell| {
        let mut state = cell.borrow_mut();
        let state = state.get_or_insert_with(|| TerminalState {
            width: signal(DEFAULT_WIDTH),
            height: signal(DEFAULT_HEIGHT),
        });
        f(state)
    })
}

/// Signal carrying the viewport width in cells.
pub fn terminal_width() -> Signal<u16> {
    with_state(|state| state.width.clone())
}

/// Signal carrying the viewport height in rows.
pub fn terminal_height() -> Signal<u16> {
    with_state(|state| state.height.clone())
}

/// Current dimensions as a plain pair.
pub fn terminal_size() -> (u16, u16) {
    with_state(|state| (state.width.get(), state.height.get()))
}

/// Store new dimensions, notifying any frame derivation that reads them.
pub fn set_terminal_size(width: u16, height: u16) {
    let (width_signal, height_signal) =
        with_state(|state| (state.width.clone(), state.height.clone()));
    if width_signal.get() != width {
        width_signal.set(width);
    }
    if height_signal.get() != height {
        height_signal.set(height);
    }
}

/// Ask the real terminal for its size and seed the signals with it.
pub fn detect_terminal_size() -> io::Result<(u16, u16)> {
    let (width, height) = crossterm::terminal::size()?;
    set_terminal_size(width, height);
    Ok((width, height))
}

/// Drop the per-thread state. Test isolation.
pub fn reset_terminal() {
    TERMINAL.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::effect;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn setup() {
        reset_terminal();
    }

    #[test]
    fn test_defaults_before_detection() {
        setup();
        assert_eq!(terminal_size(), (80, 24));
    }

    #[test]
    fn test_set_updates_both_dimensions() {
        setup();
        set_terminal_size(120, 40);
        assert_eq!(terminal_size(), (120, 40));
    }

    #[test]
    fn test_resize_notifies_subscribers() {
        setup();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_for_effect = seen.clone();
        let width = terminal_width();

        let stop = effect(move || {
            seen_for_effect.borrow_mut().push(width.get());
        });

        set_terminal_size(100, 24);
        assert_eq!(*seen.borrow(), vec![80, 100]);
        stop();
    }

    #[test]
    fn test_unchanged_dimension_stays_silent() {
        setup();
        set_terminal_size(100, 30);

        let runs = Rc::new(RefCell::new(0));
        let runs_for_effect = runs.clone();
        let width = terminal_width();
        let stop = effect(move || {
            width.get();
            *runs_for_effect.borrow_mut() += 1;
        });

        set_terminal_size(100, 50);
        assert_eq!(*runs.borrow(), 1, "height-only resize leaves width alone");
        stop();
    }
}
