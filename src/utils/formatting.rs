//! Formatting utilities used for dashboard and stats output.

use crate::utils::colors::{RESET, color_for_progress};
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad on the right using display width, so emoji and wide glyphs line up.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// `HH:MM:SS`, negative values clamped to zero.
pub fn format_seconds(secs: i64) -> String {
    let s = secs.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

/// One decimal, trailing `.0` dropped.
pub fn format_amount(v: f64) -> String {
    if (v - v.round()).abs() < f64::EPSILON {
        format!("{:.0}", v)
    } else {
        format!("{:.1}", v)
    }
}

/// Colored `[#####-----]  42%` bar. `pct` is clamped to 0..=100.
pub fn progress_bar(pct: f64, width: usize) -> String {
    let pct = if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 100.0) };
    let filled = ((pct / 100.0) * width as f64).round() as usize;
    let color = color_for_progress(pct);

    format!(
        "{}[{}{}]{} {:>3.0}%",
        color,
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled)),
        RESET,
        pct
    )
}
