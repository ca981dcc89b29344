//! Render Module - frames and terminal output
//!
//! - **Measure** - display width and grapheme-aware wrapping
//! - **Frame** - styled spans and lines, page composition
//! - **Diff** - line-diffing terminal renderer

mod diff;
mod frame;
mod measure;

pub use diff::*;
pub use frame::*;
pub use measure::*;
