//! Fixed-width temperature bars.
//!
//! A row's `RowLayout` (percentages of the shared axis) is mapped onto a track
//! of `width` columns:
//!
//! `<left spacer><min label><bar><max label><right spacer>`
//!
//! Labels are padded to a common width so bars of different rows line up.
//! Output is deterministic, which keeps golden tests simple.

use crate::domain::RowLayout;

pub const BAR_CHAR: char = '=';

/// Columns taken by the left spacer, the bar and the right spacer.
///
/// Both bar edges are rounded to a column, so the three always sum to `width`.
pub fn bar_columns(layout: &RowLayout, width: usize) -> (usize, usize, usize) {
    let to_cols = |pct: f64| {
        let cols = (pct.max(0.0) / 100.0 * width as f64).round();
        if cols.is_finite() { (cols as usize).min(width) } else { 0 }
    };

    let left = to_cols(layout.left_spacer_pct);
    let end = to_cols(layout.left_spacer_pct + layout.bar_width_pct).max(left);
    (left, end - left, width - end)
}

/// Temperature label as shown next to a bar (`40°`, `40.5°`).
pub fn temp_label(temp: f64) -> String {
    format!("{temp}°")
}

/// Render one bar track.
pub fn render_bar(layout: &RowLayout, width: usize, label_width: usize) -> String {
    let (left, bar, right) = bar_columns(layout, width);
    let min = temp_label(layout.row_min);
    let max = temp_label(layout.row_max);

    let mut out = String::new();
    out.push_str(&" ".repeat(left));
    out.push_str(&format!("{min:>label_width$}"));
    out.extend(std::iter::repeat_n(BAR_CHAR, bar));
    out.push_str(&format!("{max:<label_width$}"));
    out.push_str(&" ".repeat(right));
    out
}
