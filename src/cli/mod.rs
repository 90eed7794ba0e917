//! Command-line parsing for the forecast viewer.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! forecast pipeline; `app` turns the parsed flags into a `ForecastConfig`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::UnitSystem;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "noaa", version, about = "Daily forecast bars from api.weather.gov")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch (or read) a forecast once and print the daily table.
    Show(ForecastArgs),
    /// Refresh the forecast table on a fixed interval.
    Watch(WatchArgs),
}

/// Options shared by `show` and `watch`.
#[derive(Debug, Parser, Clone)]
pub struct ForecastArgs {
    /// Latitude of the forecast location (falls back to NOAA_LAT).
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude of the forecast location (falls back to NOAA_LON).
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Read a saved forecast document instead of calling the API.
    #[arg(short = 'f', long, value_name = "JSON", conflicts_with_all = ["lat", "lon"])]
    pub feed: Option<PathBuf>,

    /// API root (falls back to NOAA_API_BASE, then https://api.weather.gov).
    #[arg(long)]
    pub api_base: Option<String>,

    /// User-Agent sent to the API (falls back to NOAA_USER_AGENT).
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Unit system of the forecast request.
    #[arg(short = 'u', long, value_enum, default_value_t = UnitSystem::Us)]
    pub units: UnitSystem,

    /// Number of days to show.
    #[arg(short = 'd', long, default_value_t = 7)]
    pub days: usize,

    /// Temperature rounding precision (0 = whole degrees, 1 = halves, ...).
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=6))]
    pub decimals: u32,

    /// Dim the two trailing rows.
    #[arg(long)]
    pub fade: bool,

    /// Show the prevailing wind column.
    #[arg(long)]
    pub wind: bool,

    /// Hide the precipitation probability column.
    #[arg(long)]
    pub no_precip: bool,

    /// Bar track width (columns).
    #[arg(long, default_value_t = 40)]
    pub width: usize,

    /// Export all aligned days to CSV.
    #[arg(long = "export-csv", value_name = "CSV")]
    pub export_csv: Option<PathBuf>,

    /// Export all aligned days to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

/// Options for the refresh loop.
#[derive(Debug, Parser, Clone)]
pub struct WatchArgs {
    #[command(flatten)]
    pub forecast: ForecastArgs,

    /// Seconds between refreshes.
    #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_defaults() {
        let cli = Cli::try_parse_from(["noaa", "show", "--lat", "39.74", "--lon", "-97.08"]).unwrap();
        let Command::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.lat, Some(39.74));
        assert_eq!(args.lon, Some(-97.08));
        assert_eq!(args.days, 7);
        assert_eq!(args.decimals, 0);
        assert_eq!(args.units, UnitSystem::Us);
        assert!(!args.fade && !args.wind && !args.no_precip);
    }

    #[test]
    fn watch_flattens_forecast_args() {
        let cli = Cli::try_parse_from(["noaa", "watch", "-f", "feed.json", "--interval", "60", "--units", "si"])
            .unwrap();
        let Command::Watch(args) = cli.command else {
            panic!("expected watch");
        };
        assert_eq!(args.interval, 60);
        assert_eq!(args.forecast.feed, Some(PathBuf::from("feed.json")));
        assert_eq!(args.forecast.units, UnitSystem::Si);
    }

    #[test]
    fn feed_conflicts_with_location() {
        assert!(Cli::try_parse_from(["noaa", "show", "-f", "feed.json", "--lat", "1"]).is_err());
        assert!(Cli::try_parse_from(["noaa", "show", "--decimals", "7"]).is_err());
        assert!(Cli::try_parse_from(["noaa", "watch", "--interval", "0"]).is_err());
    }
}
