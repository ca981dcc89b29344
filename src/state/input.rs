//! Input Module - Event conversion and polling
//!
//! Bridges crossterm's event system to the key handler registry.
//!
//! # API
//!
//! - `convert_key_event` - Convert a crossterm KeyEvent to a normalized name
//! - `poll_event` - Non-blocking event check with timeout
//! - `read_event` - Blocking event read
//! - `route_event` - Dispatch an event to the appropriate handler
//!
//! # Example
//!
//! ```ignore
//! use reveal_tui::state::input::{poll_event, route_event};
//! use std::time::Duration;
//!
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16)) {
//!         route_event(event);
//!     }
//! }
//! ```

use std::time::Duration;

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers,
    poll, read,
};

use super::keys;

// =============================================================================
// Input Event Enum
// =============================================================================

/// Unified event type for the run loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Key press, as a normalized name ("c", "esc", "ctrl+c").
    Key(String),
    /// Terminal resize event (new width, height).
    Resize(u16, u16),
    /// No event or unhandled event type.
    None,
}

// =============================================================================
// Key Event Conversion
// =============================================================================

/// Convert a crossterm KeyEvent to a normalized key name.
///
/// Returns None for releases, repeats, and keys this crate does not name.
/// Modifier prefixes compose in `ctrl+`, `alt+`, `shift+` order; shift is
/// dropped for character keys since the character itself already carries it.
pub fn convert_key_event(event: CrosstermKeyEvent) -> Option<String> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let (base, is_char) = match event.code {
        KeyCode::Char(c) => (c.to_lowercase().to_string(), true),
        KeyCode::Enter => ("enter".to_string(), false),
        KeyCode::Esc => ("esc".to_string(), false),
        KeyCode::Tab => ("tab".to_string(), false),
        KeyCode::Backspace => ("backspace".to_string(), false),
        KeyCode::Up => ("up".to_string(), false),
        KeyCode::Down => ("down".to_string(), false),
        KeyCode::Left => ("left".to_string(), false),
        KeyCode::Right => ("right".to_string(), false),
        KeyCode::F(n) => (format!("f{}", n), false),
        _ => return None,
    };

    let mut name = String::new();
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        name.push_str("ctrl+");
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        name.push_str("alt+");
    }
    if event.modifiers.contains(KeyModifiers::SHIFT) && !is_char {
        name.push_str("shift+");
    }
    name.push_str(&base);
    Some(name)
}

// =============================================================================
// Event Polling
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event arrives within the timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    match read()? {
        CrosstermEvent::Key(key) => Ok(match convert_key_event(key) {
            Some(name) => InputEvent::Key(name),
            None => InputEvent::None,
        }),
        CrosstermEvent::Resize(w, h) => Ok(InputEvent::Resize(w, h)),
        _ => Ok(InputEvent::None),
    }
}

// =============================================================================
// Event Routing
// =============================================================================

/// Route an event to the appropriate handler.
/// Returns true if any handler consumed the event.
pub fn route_event(event: InputEvent) -> bool {
    match event {
        InputEvent::Key(name) => keys::dispatch_key(&name),
        InputEvent::Resize(w, h) => {
            crate::pipeline::terminal::set_terminal_size(w, h);
            false
        }
        InputEvent::None => false,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::keys::{on_key, reset_keys};
    use std::cell::Cell;
    use std::rc::Rc;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> CrosstermKeyEvent {
        CrosstermKeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_convert_char_is_lowercased() {
        let event = press(KeyCode::Char('C'), KeyModifiers::SHIFT);
        assert_eq!(convert_key_event(event), Some("c".to_string()));
    }

    #[test]
    fn test_convert_named_keys() {
        let named = [
            (KeyCode::Esc, "esc"),
            (KeyCode::Enter, "enter"),
            (KeyCode::Tab, "tab"),
            (KeyCode::Backspace, "backspace"),
            (KeyCode::Up, "up"),
            (KeyCode::Down, "down"),
        ];
        for (code, expected) in named {
            let event = press(code, KeyModifiers::empty());
            assert_eq!(convert_key_event(event), Some(expected.to_string()));
        }
    }

    #[test]
    fn test_convert_ctrl_prefix() {
        let event = press(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(convert_key_event(event), Some("ctrl+c".to_string()));
    }

    #[test]
    fn test_convert_modifier_order() {
        let event = press(
            KeyCode::Char('x'),
            KeyModifiers::CONTROL | KeyModifiers::ALT,
        );
        assert_eq!(convert_key_event(event), Some("ctrl+alt+x".to_string()));
    }

    #[test]
    fn test_shift_kept_for_named_keys_only() {
        let event = press(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(convert_key_event(event), Some("shift+tab".to_string()));
    }

    #[test]
    fn test_release_is_not_named() {
        let event = CrosstermKeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert_eq!(convert_key_event(event), None);
    }

    #[test]
    fn test_function_keys() {
        let event = press(KeyCode::F(5), KeyModifiers::empty());
        assert_eq!(convert_key_event(event), Some("f5".to_string()));
    }

    #[test]
    fn test_route_key_reaches_registry() {
        reset_keys();
        let hits = Rc::new(Cell::new(0));
        let hits_for_handler = hits.clone();
        let _unsub = on_key("c", move || {
            hits_for_handler.set(hits_for_handler.get() + 1);
            true
        });

        assert!(route_event(InputEvent::Key("c".to_string())));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_route_none_is_not_consumed() {
        reset_keys();
        assert!(!route_event(InputEvent::None));
    }

    #[test]
    fn test_route_resize_updates_terminal_size() {
        use crate::pipeline::terminal::{reset_terminal, terminal_size};

        reset_terminal();
        assert!(!route_event(InputEvent::Resize(100, 30)));
        assert_eq!(terminal_size(), (100, 30));
    }
}
