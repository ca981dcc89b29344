//! State Module - Runtime state systems
//!
//! The reactive state systems that power the reveal choreography:
//!
//! - **Clock** - logical-time timer wheel all reveals schedule against
//! - **Gate** - exclusive, user-toggled nested panels
//! - **Blink** - shared cursor phase clocks
//! - **Keys** - named key handler registry
//! - **Input** - crossterm event conversion, polling, and routing

pub mod clock;
pub mod gate;

mod blink;
mod input;
mod keys;

pub use blink::*;
pub use input::*;
pub use keys::*;
