//! Input/output helpers.
//!
//! - saved forecast documents (`feed`)
//! - daily record exports (CSV/JSON) (`export`)

pub mod export;
pub mod feed;

pub use export::*;
pub use feed::*;
