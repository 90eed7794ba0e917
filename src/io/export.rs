//! Export aligned daily records to CSV or JSON.
//!
//! The CSV is meant to be easy to consume in spreadsheets or downstream scripts;
//! the JSON carries the same rows plus the weather-icons class of each day.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::Local;
use serde::Serialize;

use crate::domain::{DailyRecord, UnitSystem};
use crate::error::AppError;

/// JSON export schema.
#[derive(Debug, Serialize)]
pub struct ForecastExport<'a> {
    pub tool: String,
    pub generated: String,
    pub units: UnitSystem,
    pub days: Vec<ExportDay<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ExportDay<'a> {
    #[serde(flatten)]
    pub record: &'a DailyRecord,
    pub icon_class: Option<String>,
}

/// Write daily records to a CSV file.
pub fn write_records_csv(path: &Path, records: &[DailyRecord]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_csv(file, records)
}

/// Write daily records as CSV to any writer.
pub fn write_csv<W: Write>(mut out: W, records: &[DailyRecord]) -> Result<(), AppError> {
    writeln!(
        out,
        "day,min_temp,max_temp,precip_probability,wind_speed,wind_direction,category,rank"
    )
    .map_err(|e| AppError::usage(format!("Failed to write export CSV header: {e}")))?;

    for r in records {
        let (label, rank) = r
            .weather_category
            .map(|c| (c.label, c.rank.to_string()))
            .unwrap_or(("", String::new()));
        writeln!(
            out,
            "{},{},{},{},{},{},{},{}",
            r.day_label,
            r.min_temp,
            r.max_temp,
            r.precip_probability,
            r.wind.speed_value,
            r.wind.direction,
            label,
            rank,
        )
        .map_err(|e| AppError::usage(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Write daily records to a JSON file.
pub fn write_records_json(path: &Path, records: &[DailyRecord], units: UnitSystem) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create export JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &build_export(records, units))
        .map_err(|e| AppError::usage(format!("Failed to write export JSON: {e}")))
}

fn build_export(records: &[DailyRecord], units: UnitSystem) -> ForecastExport<'_> {
    ForecastExport {
        tool: "noaa".to_string(),
        generated: Local::now().to_rfc3339(),
        units,
        days: records
            .iter()
            .map(|record| ExportDay {
                record,
                icon_class: record.weather_category.map(|c| c.icon_class()),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{WeatherCategory, Wind};

    fn records() -> Vec<DailyRecord> {
        vec![
            DailyRecord {
                day_label: "Tue".to_string(),
                min_temp: 40.0,
                max_temp: 55.5,
                precip_probability: 30,
                wind: Wind { speed_value: 10, direction: "S".to_string() },
                weather_category: Some(WeatherCategory { label: "cloudy", rank: 20 }),
            },
            DailyRecord {
                day_label: "Wed".to_string(),
                min_temp: 38.0,
                max_temp: 49.0,
                precip_probability: 0,
                wind: Wind { speed_value: 0, direction: String::new() },
                weather_category: None,
            },
        ]
    }

    #[test]
    fn csv_has_header_and_one_row_per_day() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &records()).unwrap();
        let txt = String::from_utf8(buf).unwrap();
        let expected = concat!(
            "day,min_temp,max_temp,precip_probability,wind_speed,wind_direction,category,rank\n",
            "Tue,40,55.5,30,10,S,cloudy,20\n",
            "Wed,38,49,0,0,,,\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn json_export_flattens_records() {
        let records = records();
        let value = serde_json::to_value(build_export(&records, UnitSystem::Us)).unwrap();
        assert_eq!(value["tool"], "noaa");
        assert_eq!(value["units"], "us");
        assert_eq!(value["days"][0]["day_label"], "Tue");
        assert_eq!(value["days"][0]["wind"]["speed_value"], 10);
        assert_eq!(value["days"][0]["weather_category"]["rank"], 20);
        assert_eq!(value["days"][0]["icon_class"], "wi-day-cloudy");
        assert!(value["days"][1]["weather_category"].is_null());
        assert!(value["days"][1]["icon_class"].is_null());
    }
}
