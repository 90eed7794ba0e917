//! Remote forecast retrieval (api.weather.gov).

pub mod nws;

pub use nws::*;
