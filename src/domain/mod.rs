//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the raw forecast period as parsed from the remote document (`RawPeriod`)
//! - aligned per-day output (`DailyRecord`, `Wind`, `WeatherCategory`)
//! - render geometry (`RenderRange`, `RowLayout`)
//! - run configuration (`ForecastConfig`, `UnitSystem`, `ForecastSource`)

pub mod types;

pub use types::*;
