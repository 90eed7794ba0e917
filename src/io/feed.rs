//! Read saved forecast documents.
//!
//! A feed file is a forecast document as returned by the gridpoint forecast
//! endpoint (for example saved with `curl`). It lets the pipeline run offline.

use std::fs;
use std::path::Path;

use crate::data::nws::parse_forecast_document;
use crate::domain::RawPeriod;
use crate::error::AppError;

/// Load the periods of a saved forecast document.
pub fn read_feed(path: &Path) -> Result<Vec<RawPeriod>, AppError> {
    let json = fs::read_to_string(path)
        .map_err(|e| AppError::usage(format!("Failed to read feed '{}': {e}", path.display())))?;
    parse_forecast_document(&json)
        .map_err(|e| AppError::new(e.exit_code(), format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EXIT_REMOTE, EXIT_USAGE};

    #[test]
    fn missing_feed_is_a_usage_error() {
        let err = read_feed(Path::new("/nonexistent/forecast.json")).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_USAGE);
    }

    #[test]
    fn reads_saved_document() {
        let path = std::env::temp_dir().join(format!("noaa_feed_{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"properties": {"periods": [
                {"isDaytime": false, "temperature": 40, "windSpeed": "5 mph", "windDirection": "N",
                 "icon": "/icons/land/night/ovc?size=medium", "endTime": "2024-03-05T06:00:00-05:00"}
            ]}}"#,
        )
        .unwrap();

        let periods = read_feed(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(periods.len(), 1);
        assert_eq!(periods[0].wind_speed_text, "5 mph");
    }

    #[test]
    fn malformed_feed_is_a_data_error() {
        let path = std::env::temp_dir().join(format!("noaa_feed_bad_{}.json", std::process::id()));
        fs::write(&path, "not json").unwrap();

        let err = read_feed(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert_eq!(err.exit_code(), EXIT_REMOTE);
    }
}
