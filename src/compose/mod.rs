//! Composition - choreographing multiple reveals.
//!
//! - **schedule** - pure offset arithmetic (`offsets`, `completion_ms`)
//! - **cascade** - one reveal per block, armed with its schedule offset
//!
//! Higher layers (page sections, the interaction gate) build on cascades;
//! nothing above this module computes a start delay by hand.

pub mod schedule;

mod cascade;

pub use cascade::*;
pub use schedule::Block;
