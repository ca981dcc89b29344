//! Reveal Engine - grapheme segmentation and timed disclosure.
//!
//! The engine is the innermost layer of the crate:
//!
//! - **Segments** - a source string pre-split into extended grapheme
//!   clusters, with O(1) prefix slicing
//! - **Reveal** - one self-rearming tick chain that appends one unit per
//!   tick and reports progress through signals
//!
//! Everything above this layer (cascades, page sections) is composition:
//! it decides *when* reveals start relative to each other, never *how* a
//! single string discloses.

mod reveal;
mod segments;

pub use reveal::*;
pub use segments::*;
