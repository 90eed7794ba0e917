//! Forecast normalization core.
//!
//! Responsibilities:
//!
//! - classify condition tokens into weather categories (`classify`)
//! - fold day/night periods into daily records (`align`)
//! - scale the render window onto a shared temperature axis (`scale`)
//!
//! Everything here is pure and keeps no state between calls.

pub mod align;
pub mod classify;
pub mod scale;

pub use align::*;
pub use classify::*;
pub use scale::*;
