//! Reactive Pipeline
//!
//! Connects the page's signals to the terminal output.
//!
//! # Pipeline Architecture
//!
//! ```text
//! reveal signals + gate view + blink phase → frame derived → render effect
//! ```
//!
//! ## Data Flow
//!
//! 1. **terminal** - Size signals, seeded at mount and updated on resize
//! 2. **frame derived** - Pure composition of the page into a `Frame`
//! 3. **render effect** - Monitors the derived, diffs against the terminal
//!
//! Only the render effect touches the terminal; the derivation stays pure
//! so dependency tracking does all the scheduling.

pub mod mount;
pub mod terminal;

// Re-exports
pub use mount::{MountHandle, mount, run, tick, unmount};
pub use terminal::{detect_terminal_size, set_terminal_size, terminal_height, terminal_size, terminal_width};
