//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - resolves the forecast configuration
//! - runs the forecast pipeline (once, or on a refresh interval)
//! - prints the table and writes optional exports

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Local};
use clap::Parser;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use log::{info, warn};

use crate::app::pipeline::{ForecastRun, PeriodSource};
use crate::cli::{Command, ForecastArgs, WatchArgs};
use crate::domain::{DEFAULT_API_BASE, ForecastConfig, ForecastSource, default_user_agent};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `noaa` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    // `noaa` and `noaa --lat ...` behave like `noaa show ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Show(args) => handle_show(args),
        Command::Watch(args) => handle_watch(args),
    }
}

fn handle_show(args: ForecastArgs) -> Result<(), AppError> {
    let config = forecast_config_from_args(&args)?;
    let mut source = PeriodSource::from_config(&config)?;

    let run = pipeline::run_forecast(&mut source)?;
    print!("{}", crate::report::format_forecast_table(&run.days, &config));
    write_exports(&run, &config)
}

fn handle_watch(args: WatchArgs) -> Result<(), AppError> {
    let config = forecast_config_from_args(&args.forecast)?;
    let mut source = PeriodSource::from_config(&config)?;
    let interval = Duration::from_secs(args.interval);

    info!("Refreshing every {}s", args.interval);
    loop {
        // A failed refresh keeps the previous table on screen until the next tick.
        match pipeline::run_forecast(&mut source) {
            Ok(run) => {
                let mut table = crate::report::format_forecast_table(&run.days, &config);
                table.push_str(&status_line(&run, Local::now()));
                redraw(&table)?;
                if let Err(e) = write_exports(&run, &config) {
                    warn!("Export failed: {e}");
                }
            }
            Err(e) => warn!("Forecast refresh failed: {e}"),
        }
        thread::sleep(interval);
    }
}

/// Footer under the refreshed table.
fn status_line(run: &ForecastRun, at: DateTime<Local>) -> String {
    format!(
        "\nUpdated {} | {} periods -> {} days\n",
        at.format("%Y-%m-%d %H:%M:%S"),
        run.period_count,
        run.days.len()
    )
}

fn redraw(table: &str) -> Result<(), AppError> {
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))
        .map_err(|e| AppError::usage(format!("Failed to clear terminal: {e}")))?;
    stdout
        .write_all(table.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| AppError::usage(format!("Failed to write forecast table: {e}")))
}

fn write_exports(run: &ForecastRun, config: &ForecastConfig) -> Result<(), AppError> {
    if let Some(path) = &config.export_csv {
        crate::io::write_records_csv(path, &run.days)?;
        info!("Wrote {} days to {}", run.days.len(), path.display());
    }
    if let Some(path) = &config.export_json {
        crate::io::write_records_json(path, &run.days, config.units)?;
        info!("Wrote {} days to {}", run.days.len(), path.display());
    }
    Ok(())
}

/// Resolve CLI flags plus environment fallbacks into a run configuration.
pub fn forecast_config_from_args(args: &ForecastArgs) -> Result<ForecastConfig, AppError> {
    let source = match &args.feed {
        Some(path) => ForecastSource::Feed(path.clone()),
        None => {
            let lat = coordinate(args.lat, "NOAA_LAT", "--lat", 90.0)?;
            let lon = coordinate(args.lon, "NOAA_LON", "--lon", 180.0)?;
            ForecastSource::Remote { lat, lon }
        }
    };

    let mut config = ForecastConfig::with_source(source);
    config.api_base = args
        .api_base
        .clone()
        .or_else(|| env_string("NOAA_API_BASE"))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    config.user_agent = args
        .user_agent
        .clone()
        .or_else(|| env_string("NOAA_USER_AGENT"))
        .unwrap_or_else(default_user_agent);
    config.units = args.units;
    config.max_days_forecast = args.days;
    config.temp_decimal_places = args.decimals;
    config.fade_forecast = args.fade;
    config.show_precip = !args.no_precip;
    config.show_wind = args.wind;
    config.bar_width = args.width;
    config.export_csv = args.export_csv.clone();
    config.export_json = args.export_json.clone();

    Ok(config)
}

/// A coordinate from its flag, else from the environment; must lie within `±limit`.
fn coordinate(flag: Option<f64>, env_name: &str, flag_name: &str, limit: f64) -> Result<f64, AppError> {
    let value = match flag {
        Some(v) => v,
        None => {
            let raw = env_string(env_name).ok_or_else(|| {
                AppError::usage(format!(
                    "Missing {flag_name} (or {env_name} in environment/.env); or pass --feed <file>."
                ))
            })?;
            raw.trim()
                .parse::<f64>()
                .map_err(|e| AppError::usage(format!("Invalid {env_name} '{raw}': {e}")))?
        }
    };

    if !(value.is_finite() && value.abs() <= limit) {
        return Err(AppError::usage(format!("{flag_name} must be within ±{limit}, got {value}.")));
    }
    Ok(value)
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Rewrite argv so `noaa` defaults to `noaa show`.
///
/// Rules:
/// - `noaa`                       -> `noaa show`
/// - `noaa --lat 1 --lon 2 ...`   -> `noaa show --lat 1 --lon 2 ...`
/// - `noaa --help/--version/-h`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("show".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "show" | "watch");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "show flags".
    if arg1.starts_with('-') {
        argv.insert(1, "show".to_string());
        return argv;
    }

    argv
}
