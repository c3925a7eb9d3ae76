//! Rest-to-activity ratio.

use crate::models::WorkoutLog;
use crate::models::recovery::RecoveryRecord;
use std::collections::BTreeMap;

/// Days on which every exercise with logged reps met its daily goal.
///
/// A day needs at least one exercise with reps. Exercises without a configured
/// goal never block completion.
pub fn completed_workout_days(workouts: &WorkoutLog, goals: &BTreeMap<String, u32>) -> usize {
    workouts
        .iter()
        .filter(|(_, reps)| {
            let mut logged = reps.iter().filter(|(_, n)| **n > 0).peekable();
            logged.peek().is_some()
                && logged.all(|(exercise, n)| goals.get(exercise).is_none_or(|goal| n >= goal))
        })
        .count()
}

/// Recovery days over fully-completed workout days, as a percentage rounded
/// to one decimal. Zero when no workout day was completed.
pub fn recovery_percentage(recovery_days: usize, completed_days: usize) -> f64 {
    if completed_days == 0 {
        return 0.0;
    }

    let pct = (recovery_days as f64 / completed_days as f64) * 100.0;
    (pct * 10.0).round() / 10.0
}

pub fn recovery_percentage_for(
    record: &RecoveryRecord,
    workouts: &WorkoutLog,
    goals: &BTreeMap<String, u32>,
) -> f64 {
    recovery_percentage(record.count(), completed_workout_days(workouts, goals))
}
