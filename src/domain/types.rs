//! Shared domain types.
//!
//! These types are kept lightweight so they can be:
//!
//! - parsed straight out of the api.weather.gov forecast document
//! - folded into daily records by the aligner
//! - exported to JSON/CSV

use chrono::{DateTime, Datelike, FixedOffset, Utc, Weekday};
use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};

/// Default api.weather.gov endpoint root.
pub const DEFAULT_API_BASE: &str = "https://api.weather.gov";

/// End time of a forecast period.
///
/// The forecast API emits ISO-8601 instants with an offset; saved feeds may
/// carry plain epoch seconds instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Epoch(i64),
    Iso(DateTime<FixedOffset>),
}

impl Timestamp {
    /// Weekday of the instant.
    ///
    /// ISO instants use their own offset (the forecast location's local time);
    /// epoch seconds are read as UTC.
    pub fn weekday(self) -> Option<Weekday> {
        match self {
            Timestamp::Iso(dt) => Some(dt.weekday()),
            Timestamp::Epoch(secs) => DateTime::<Utc>::from_timestamp(secs, 0).map(|dt| dt.weekday()),
        }
    }

    /// Abbreviated English weekday (`Mon`, `Tue`, ...), empty when out of range.
    pub fn day_label(self) -> String {
        self.weekday().map(|d| d.to_string()).unwrap_or_default()
    }
}

/// One forecast period as delivered by the remote API.
///
/// Field names follow the `properties.periods[]` schema of the forecast document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPeriod {
    pub is_daytime: bool,
    pub temperature: f64,
    /// Free text such as `10 mph` or `5 to 10 mph`; `null` becomes empty.
    #[serde(rename = "windSpeed", default, deserialize_with = "null_as_empty")]
    pub wind_speed_text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub wind_direction: String,
    /// Icon URL, e.g. `https://api.weather.gov/icons/land/night/rain,40?size=medium`.
    #[serde(rename = "icon", default, deserialize_with = "null_as_empty")]
    pub icon_token: String,
    pub end_time: Timestamp,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Semantic weather class plus its severity rank.
///
/// A higher rank dominates when the two periods of one day disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherCategory {
    pub label: &'static str,
    pub rank: u32,
}

impl WeatherCategory {
    /// weather-icons class name for this category.
    pub fn icon_class(&self) -> String {
        if self.label.starts_with("wi-") {
            self.label.to_string()
        } else {
            format!("wi-day-{}", self.label)
        }
    }
}

/// Prevailing wind of a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wind {
    pub speed_value: i64,
    pub direction: String,
}

/// One calendar day: a nighttime period merged with the daytime period closing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    pub day_label: String,
    pub min_temp: f64,
    pub max_temp: f64,
    pub precip_probability: i64,
    pub wind: Wind,
    pub weather_category: Option<WeatherCategory>,
}

/// Rounded min/max across the displayed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRange {
    pub min: i64,
    pub max: i64,
}

/// Bar geometry of one row, in percent of the shared temperature axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    pub row_min: f64,
    pub row_max: f64,
    pub left_spacer_pct: f64,
    pub bar_width_pct: f64,
    pub right_spacer_pct: f64,
}

/// Unit system of the forecast request and of the wind suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Fahrenheit, mph.
    Us,
    /// Celsius, km/h.
    Si,
}

impl UnitSystem {
    /// Value of the `units` query parameter of the forecast endpoint.
    pub fn query_value(self) -> &'static str {
        match self {
            UnitSystem::Us => "us",
            UnitSystem::Si => "si",
        }
    }

    pub fn speed_suffix(self) -> &'static str {
        match self {
            UnitSystem::Us => "mph",
            UnitSystem::Si => "km/h",
        }
    }
}

/// Where the forecast periods come from.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastSource {
    /// Look up the gridpoint for a location, then fetch its forecast.
    Remote { lat: f64, lon: f64 },
    /// A saved forecast JSON document.
    Feed(std::path::PathBuf),
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus `.env` fallbacks and defaults).
#[derive(Debug, Clone)]
pub struct ForecastConfig {
    pub source: ForecastSource,
    pub api_base: String,
    pub user_agent: String,
    pub units: UnitSystem,

    /// Size of the leading window that is scaled and rendered.
    pub max_days_forecast: usize,
    /// Rounding precision applied before layout.
    pub temp_decimal_places: u32,

    pub fade_forecast: bool,
    pub show_precip: bool,
    pub show_wind: bool,
    /// Terminal columns for the bar track.
    pub bar_width: usize,

    pub export_csv: Option<std::path::PathBuf>,
    pub export_json: Option<std::path::PathBuf>,
}

impl ForecastConfig {
    /// Defaults for everything but the source.
    pub fn with_source(source: ForecastSource) -> Self {
        Self {
            source,
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: default_user_agent(),
            units: UnitSystem::Us,
            max_days_forecast: 7,
            temp_decimal_places: 0,
            fade_forecast: false,
            show_precip: true,
            show_wind: false,
            bar_width: 40,
            export_csv: None,
            export_json: None,
        }
    }
}

pub fn default_user_agent() -> String {
    format!("noaa-forecast/{}", env!("CARGO_PKG_VERSION"))
}
