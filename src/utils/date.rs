use crate::errors::{AppError, AppResult};
use chrono::{Days, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse an optional `--date` argument, defaulting to today.
/// Accepts `today` and `yesterday` as shortcuts.
pub fn resolve_date(input: Option<&String>) -> AppResult<NaiveDate> {
    match input.map(|s| s.trim()) {
        None | Some("today") => Ok(today()),
        Some("yesterday") => Ok(days_before(today(), 1)),
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

/// `date` minus `n` calendar days (saturating at the earliest representable date).
pub fn days_before(date: NaiveDate, n: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(n)).unwrap_or(NaiveDate::MIN)
}
