//! api.weather.gov integration.
//!
//! Retrieving a forecast takes two requests:
//!
//! 1. `GET /points/{lat},{lon}` resolves the location to its gridpoint and
//!    returns the gridpoint forecast URL in `properties.forecast`.
//! 2. `GET <forecast url>` returns the forecast document whose
//!    `properties.periods` alternate daytime and nighttime entries.
//!
//! The gridpoint URL is stable for a location, so the client resolves it once
//! and reuses it on later refreshes.

use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::{ForecastConfig, RawPeriod, UnitSystem};
use crate::error::AppError;

const GEO_JSON: &str = "application/geo+json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The gridpoint forecast document (only the parts we read).
#[derive(Debug, Deserialize)]
pub struct ForecastDocument {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<RawPeriod>,
}

#[derive(Debug, Deserialize)]
struct PointsResponse {
    properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
struct PointsProperties {
    forecast: Option<String>,
}

pub struct NwsClient {
    client: Client,
    api_base: String,
    units: UnitSystem,
    forecast_url: Option<String>,
}

impl NwsClient {
    pub fn new(api_base: &str, user_agent: &str, units: UnitSystem) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::remote(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            units,
            forecast_url: None,
        })
    }

    pub fn from_config(config: &ForecastConfig) -> Result<Self, AppError> {
        Self::new(&config.api_base, &config.user_agent, config.units)
    }

    /// Fetch the current forecast periods for a location.
    pub fn fetch_periods(&mut self, lat: f64, lon: f64) -> Result<Vec<RawPeriod>, AppError> {
        let url = match &self.forecast_url {
            Some(url) => url.clone(),
            None => {
                let url = self.lookup_forecast_url(lat, lon)?;
                self.forecast_url = Some(url.clone());
                url
            }
        };

        info!("Fetching forecast from {url}");
        let doc: ForecastDocument = self.get_json(&url, &[("units", self.units.query_value())])?;
        debug!("Forecast document has {} periods", doc.properties.periods.len());

        Ok(doc.properties.periods)
    }

    fn lookup_forecast_url(&self, lat: f64, lon: f64) -> Result<String, AppError> {
        let url = points_url(&self.api_base, lat, lon);
        info!("Looking up gridpoint office from {url}");

        let points: PointsResponse = self.get_json(&url, &[])?;
        points
            .properties
            .forecast
            .filter(|u| !u.is_empty())
            .ok_or_else(|| AppError::remote(format!("No gridpoint forecast available for {lat},{lon}.")))
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T, AppError> {
        let resp = self
            .client
            .get(url)
            .header(ACCEPT, GEO_JSON)
            .query(query)
            .send()
            .map_err(|e| AppError::remote(format!("Request to {url} failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::remote(format!(
                "Request to {url} failed with status {}.",
                resp.status()
            )));
        }

        resp.json()
            .map_err(|e| AppError::remote(format!("Failed to parse response from {url}: {e}")))
    }
}

/// Points endpoint for a location; the API accepts at most four decimals.
pub fn points_url(api_base: &str, lat: f64, lon: f64) -> String {
    format!("{}/points/{lat:.4},{lon:.4}", api_base.trim_end_matches('/'))
}

/// Parse a forecast document (remote response or saved feed) into periods.
pub fn parse_forecast_document(json: &str) -> Result<Vec<RawPeriod>, AppError> {
    let doc: ForecastDocument = serde_json::from_str(json)
        .map_err(|e| AppError::remote(format!("Invalid forecast document: {e}")))?;
    Ok(doc.properties.periods)
}
