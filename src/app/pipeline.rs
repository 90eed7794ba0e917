//! Shared "forecast pipeline" logic used by both `show` and `watch`.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load periods (remote or feed) -> align into days
//!
//! The front-ends then focus on presentation (table, exports, refresh loop).

use std::path::PathBuf;

use log::info;

use crate::data::NwsClient;
use crate::domain::{DailyRecord, ForecastConfig, ForecastSource, RawPeriod};
use crate::error::AppError;
use crate::forecast::align_periods;
use crate::io::read_feed;

/// Where a run reads its periods from, with any client state it needs.
pub enum PeriodSource {
    Remote { client: NwsClient, lat: f64, lon: f64 },
    Feed(PathBuf),
}

impl PeriodSource {
    pub fn from_config(config: &ForecastConfig) -> Result<Self, AppError> {
        Ok(match &config.source {
            ForecastSource::Remote { lat, lon } => PeriodSource::Remote {
                client: NwsClient::from_config(config)?,
                lat: *lat,
                lon: *lon,
            },
            ForecastSource::Feed(path) => PeriodSource::Feed(path.clone()),
        })
    }

    /// Load a fresh period sequence.
    pub fn load(&mut self) -> Result<Vec<RawPeriod>, AppError> {
        match self {
            PeriodSource::Remote { client, lat, lon } => client.fetch_periods(*lat, *lon),
            PeriodSource::Feed(path) => read_feed(path),
        }
    }
}

/// All computed outputs of a single forecast run.
#[derive(Debug, Clone)]
pub struct ForecastRun {
    pub period_count: usize,
    pub days: Vec<DailyRecord>,
}

/// Load periods and align them into days.
pub fn run_forecast(source: &mut PeriodSource) -> Result<ForecastRun, AppError> {
    let periods = source.load()?;
    Ok(run_with_periods(&periods))
}

/// Align an already-loaded period sequence.
pub fn run_with_periods(periods: &[RawPeriod]) -> ForecastRun {
    let days = align_periods(periods);
    info!("Aligned {} periods into {} days", periods.len(), days.len());

    ForecastRun {
        period_count: periods.len(),
        days,
    }
}
