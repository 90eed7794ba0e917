//! Proportional bar geometry for the render window.
//!
//! Every row shares one horizontal temperature axis spanning the rounded
//! min/max of the displayed days. A row's bar is placed on that axis with a
//! left spacer, the bar itself and a right spacer, all in percent.

use crate::domain::{DailyRecord, RenderRange, RowLayout};

/// Leading `max_days` records (the render window).
pub fn render_window(records: &[DailyRecord], max_days: usize) -> &[DailyRecord] {
    &records[..records.len().min(max_days)]
}

/// Round half up to a multiple of `1 / 2^places`.
///
/// With `places = 0` this rounds to whole degrees; with `places = 1` to halves.
pub fn round_temp(temp: f64, places: u32) -> f64 {
    let scalar = f64::from(1u32 << places.min(31));
    round_half_up(temp * scalar) / scalar
}

fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Rounded min/max across the window; `None` for an empty window.
pub fn compute_range(records: &[DailyRecord]) -> Option<RenderRange> {
    if records.is_empty() {
        return None;
    }

    let (min, max) = records.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), r| {
        (min.min(r.min_temp), max.max(r.max_temp))
    });

    Some(RenderRange {
        min: round_half_up(min) as i64,
        max: round_half_up(max) as i64,
    })
}

/// Geometry of one row against the shared range.
///
/// Only the bar width is rounded, so the three parts sum to 100 within one
/// percentage point. A flat range (`max == min`) gives a full-width bar.
pub fn row_layout(record: &DailyRecord, range: RenderRange, places: u32) -> RowLayout {
    let row_min = round_temp(record.min_temp, places);
    let row_max = round_temp(record.max_temp, places);

    if range.max == range.min {
        return RowLayout {
            row_min,
            row_max,
            left_spacer_pct: 0.0,
            bar_width_pct: 100.0,
            right_spacer_pct: 0.0,
        };
    }

    let min = range.min as f64;
    let max = range.max as f64;
    let interval = 100.0 / (max - min);

    RowLayout {
        row_min,
        row_max,
        left_spacer_pct: interval * (row_min - min),
        bar_width_pct: round_half_up(interval * (row_max - row_min)),
        right_spacer_pct: interval * (max - row_max),
    }
}
