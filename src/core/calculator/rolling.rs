use crate::core::calculator::ROLLING_WINDOW_DAYS;
use crate::utils::date::days_before;
use chrono::NaiveDate;

/// Trailing 7-day average of per-day totals.
///
/// Samples dated within `[today - 7 days, today]` are summed and the sum is
/// divided by 7. Days with no activity count as zero, so irregular activity
/// lowers the average.
pub fn rolling_average<I>(samples: I, today: NaiveDate) -> f64
where
    I: IntoIterator<Item = (NaiveDate, f64)>,
{
    let start = days_before(today, ROLLING_WINDOW_DAYS);

    let total: f64 = samples
        .into_iter()
        .filter(|(date, value)| *date >= start && *date <= today && value.is_finite())
        .map(|(_, value)| value)
        .sum();

    total / ROLLING_WINDOW_DAYS as f64
}

/// Sum of the samples logged on `date`.
pub fn total_on<I>(samples: I, date: NaiveDate) -> f64
where
    I: IntoIterator<Item = (NaiveDate, f64)>,
{
    samples
        .into_iter()
        .filter(|(d, v)| *d == date && v.is_finite())
        .map(|(_, v)| v)
        .sum()
}
