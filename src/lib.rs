//! `noaa-forecast` library crate.
//!
//! The binary (`noaa`) is a thin wrapper around this library so that:
//!
//! - the alignment/classification core is testable without network access
//! - forecast feeds can be processed offline from saved documents
//! - presentation (terminal table, exports) stays separate from the core

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod forecast;
pub mod io;
pub mod plot;
pub mod report;
