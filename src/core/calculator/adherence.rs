//! Habit adherence over per-day item flags (e.g. supplements).

use crate::models::daily_log::DailyLog;
use chrono::NaiveDate;
use std::collections::BTreeMap;

fn is_adherent(items: &BTreeMap<String, bool>) -> bool {
    items.values().any(|taken| *taken)
}

/// Consecutive adherent days counted backwards from the most recent logged
/// date. Stops at the first non-adherent day, at a calendar day with no entry,
/// or at the start of the log.
pub fn current_streak(log: &DailyLog<BTreeMap<String, bool>>) -> u32 {
    let mut streak = 0;
    let mut expected: Option<NaiveDate> = None;

    for (date, items) in log.iter().rev() {
        if let Some(exp) = expected
            && *date != exp
        {
            break;
        }
        if !is_adherent(items) {
            break;
        }

        streak += 1;
        match date.pred_opt() {
            Some(prev) => expected = Some(prev),
            None => break,
        }
    }

    streak
}

/// Longest run of consecutive adherent calendar days anywhere in the log.
pub fn longest_streak(log: &DailyLog<BTreeMap<String, bool>>) -> u32 {
    let mut best = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    for (date, items) in log.iter() {
        let contiguous = prev.and_then(|p| p.succ_opt()) == Some(*date);

        if is_adherent(items) {
            run = if contiguous { run + 1 } else { 1 };
            best = best.max(run);
        } else {
            run = 0;
        }
        prev = Some(*date);
    }

    best
}

/// Taken items over all recorded items, as a rounded percentage. Zero without data.
pub fn adherence_percentage(log: &DailyLog<BTreeMap<String, bool>>) -> u32 {
    let (taken, total) = log
        .iter()
        .flat_map(|(_, items)| items.values())
        .fold((0u32, 0u32), |(taken, total), t| {
            (taken + u32::from(*t), total + 1)
        });

    if total == 0 {
        return 0;
    }

    ((f64::from(taken) / f64::from(total)) * 100.0).round() as u32
}
