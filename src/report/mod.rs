//! Formatted terminal output for the forecast table.
//!
//! One row per day of the render window:
//!
//! `<day> <category> [<precip>] [<wind>] <bar track>`
//!
//! Optional columns follow the config; with `fade_forecast` the second-to-last
//! row is dimmed and the last one dimmed and italic.

use crossterm::style::Stylize;

use crate::domain::{DailyRecord, ForecastConfig, WeatherCategory};
use crate::forecast::{compute_range, render_window, round_temp, row_layout};
use crate::plot::{render_bar, temp_label};

/// Visual weight of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowShade {
    Normal,
    Dark,
    Darker,
}

/// Shade of row `idx` in a window of `len` rows.
pub fn row_shade(idx: usize, len: usize, fade: bool) -> RowShade {
    if !fade {
        RowShade::Normal
    } else if idx + 1 == len {
        RowShade::Darker
    } else if idx + 2 == len {
        RowShade::Dark
    } else {
        RowShade::Normal
    }
}

/// Format the forecast table for the leading window of `records`.
pub fn format_forecast_table(records: &[DailyRecord], config: &ForecastConfig) -> String {
    let window = render_window(records, config.max_days_forecast);
    let Some(range) = compute_range(window) else {
        return "No forecast days available.\n".to_string();
    };

    let places = config.temp_decimal_places;
    let label_width = window
        .iter()
        .flat_map(|r| [r.min_temp, r.max_temp])
        .map(|t| temp_label(round_temp(t, places)).chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "Forecast: {} day(s) | range=[{}°, {}°]\n",
        window.len(),
        range.min,
        range.max
    ));

    for (idx, record) in window.iter().enumerate() {
        let layout = row_layout(record, range, places);

        let mut line = format!(
            "{:<4} {:<18}",
            record.day_label,
            category_name(record.weather_category.as_ref())
        );
        if config.show_precip {
            line.push_str(&format!(" {:>4}", format!("{}%", record.precip_probability)));
        }
        if config.show_wind {
            line.push_str(&format!(" {:<12}", format_wind(record, config)));
        }
        line.push(' ');
        line.push_str(&render_bar(&layout, config.bar_width, label_width));

        let line = line.trim_end();
        match row_shade(idx, window.len(), config.fade_forecast) {
            RowShade::Normal => out.push_str(line),
            RowShade::Dark => out.push_str(&line.dim().to_string()),
            RowShade::Darker => out.push_str(&line.dim().italic().to_string()),
        }
        out.push('\n');
    }

    out
}

/// Category label without the `wi-` icon-set prefix; `-` when unclassified.
pub fn category_name(category: Option<&WeatherCategory>) -> &'static str {
    match category {
        Some(c) => c.label.strip_prefix("wi-").unwrap_or(c.label),
        None => "-",
    }
}

fn format_wind(record: &DailyRecord, config: &ForecastConfig) -> String {
    let wind = &record.wind;
    if wind.direction.is_empty() {
        format!("{}{}", wind.speed_value, config.units.speed_suffix())
    } else {
        format!("{} {}{}", wind.direction, wind.speed_value, config.units.speed_suffix())
    }
}
