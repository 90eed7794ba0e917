//! Terminal drawing of temperature bars.

pub mod bars;

pub use bars::*;
