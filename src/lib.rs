//! # reveal-tui
//!
//! Staged text-reveal engine for terminal pages.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! Text arrives one grapheme at a time on a logical timer wheel. A reveal
//! types one unit per tick into a signal; a cascade chains reveals so each
//! block starts after its predecessor finishes; the page staggers whole
//! cascades side by side and gates interactive panels behind key presses.
//!
//! The rendering pipeline is purely derived-based:
//! ```text
//! reveal signals + gate view + blink phase → frame derived → render effect
//! ```
//!
//! Time is logical. Tests drive the wheel with `advance`; the mounted event
//! loop drives it from the wall clock. Either way the reveal schedule is
//! identical down to the millisecond.
//!
//! ## Modules
//!
//! - [`types`] - Core types (PropValue, Cleanup, Attr)
//! - [`engine`] - Grapheme segmentation and the reveal engine
//! - [`compose`] - Cascade scheduling arithmetic and handles
//! - [`state`] - Timer wheel, panel gate, blink clocks, key routing
//! - [`page`] - The landing page assembly (columns, menu, panels)
//! - [`render`] - Frame composition and the diff renderer
//! - [`pipeline`] - Terminal size signals, mount, event loop

pub mod compose;
pub mod engine;
pub mod page;
pub mod pipeline;
pub mod render;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use engine::{
    DEFAULT_RATE_MS, RevealHandle, RevealProps, Segments, reveal, unit_count,
};

pub use compose::{
    Block, CascadeHandle, CascadeProps, cascade,
    schedule::{completion_ms, offsets, typing_ms},
};

pub use state::{
    // Clock
    clock::{TimerId, advance, advance_to, clear_timeout, now_ms, pending_count, reset_clock, set_timeout},
    // Gate
    gate::{GateHandle, GateProps, Panel, gate},
    // Blink
    blink_phase, is_blink_running, reset_blink, subscribe_blink,
    // Keys and input
    InputEvent, convert_key_event, dispatch_key, on_key, poll_event, read_event, reset_keys, route_event,
};

pub use page::{
    ColumnHandle, ColumnSpec, ContactHandle, PageHandle, PageProps, PanelView,
    PrivacyHandle, page,
};

pub use render::{
    DiffRenderer, Frame, Line, Span, compose_page, display_width, truncate_to_width, wrap,
};

pub use pipeline::{
    MountHandle, mount, run, set_terminal_size, terminal_height, terminal_width, tick, unmount,
};
