//! Logging of raw activity data.
//!
//! Each operation loads the domain document, applies an upsert and writes the
//! document back. Per-day logs hold one value per date: "add" operations sum
//! into that value, "set" operations replace it.

use crate::errors::{AppError, AppResult};
use crate::models::measurement::{MeasurementEntry, Measurements};
use crate::models::meditation::MeditationSession;
use crate::models::recovery::RecoveryRecord;
use crate::models::{CardioLog, HydrationLog, SupplementLog, WorkoutLog};
use crate::storage::keys;
use crate::storage::kv::{KvStore, load_or_default, save_json};
use chrono::{DateTime, Local, NaiveDate};

pub struct Tracker<'a> {
    store: &'a mut dyn KvStore,
}

fn positive(value: f64, what: &str) -> AppResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AppError::InvalidAmount(format!(
            "{} must be a positive number, got {}",
            what, value
        )))
    }
}

fn normalize_name(name: &str) -> AppResult<String> {
    let n = name.trim().to_lowercase();
    if n.is_empty() {
        return Err(AppError::InvalidAmount("name must not be empty".into()));
    }
    Ok(n)
}

impl<'a> Tracker<'a> {
    pub fn new(store: &'a mut dyn KvStore) -> Self {
        Self { store }
    }

    fn track(&mut self, target: &str, message: String) {
        self.store.audit("track", target, &message);
    }

    // ---------------------------
    // Workouts
    // ---------------------------

    pub fn workouts(&self) -> WorkoutLog {
        load_or_default(&*self.store, keys::WORKOUTS)
    }

    /// Add reps to the day's count for `exercise`. Returns the new total.
    pub fn add_workout_reps(&mut self, date: NaiveDate, exercise: &str, reps: u32) -> AppResult<u32> {
        if reps == 0 {
            return Err(AppError::InvalidAmount("reps must be at least 1".into()));
        }
        let exercise = normalize_name(exercise)?;

        let mut log = self.workouts();
        let day = log.entry(date);
        let total = day.get(&exercise).copied().unwrap_or(0).saturating_add(reps);
        day.insert(exercise.clone(), total);

        save_json(&mut *self.store, keys::WORKOUTS, &log);
        self.track("workout", format!("{date} {exercise} +{reps} (total {total})"));
        Ok(total)
    }

    /// Overwrite the day's count for `exercise`. Zero clears it.
    pub fn set_workout_reps(&mut self, date: NaiveDate, exercise: &str, reps: u32) -> AppResult<()> {
        let exercise = normalize_name(exercise)?;

        let mut log = self.workouts();
        let day = log.entry(date);
        if reps == 0 {
            day.remove(&exercise);
        } else {
            day.insert(exercise.clone(), reps);
        }
        if log.get(&date).is_some_and(|d| d.is_empty()) {
            log.remove(&date);
        }

        save_json(&mut *self.store, keys::WORKOUTS, &log);
        self.track("workout", format!("{date} {exercise} = {reps}"));
        Ok(())
    }

    // ---------------------------
    // Hydration / cardio
    // ---------------------------

    pub fn hydration(&self) -> HydrationLog {
        load_or_default(&*self.store, keys::HYDRATION)
    }

    /// Add ounces to the day's total. Returns the new total.
    pub fn add_hydration(&mut self, date: NaiveDate, ounces: f64) -> AppResult<f64> {
        let ounces = positive(ounces, "ounces")?;
        let mut log = self.hydration();
        let total = log.get(&date).copied().unwrap_or(0.0) + ounces;
        log.upsert(date, total);

        save_json(&mut *self.store, keys::HYDRATION, &log);
        self.track("hydration", format!("{date} +{ounces} oz (total {total})"));
        Ok(total)
    }

    pub fn cardio(&self) -> CardioLog {
        load_or_default(&*self.store, keys::CARDIO)
    }

    pub fn add_cardio(&mut self, date: NaiveDate, minutes: f64) -> AppResult<f64> {
        let minutes = positive(minutes, "minutes")?;
        let mut log = self.cardio();
        let total = log.get(&date).copied().unwrap_or(0.0) + minutes;
        log.upsert(date, total);

        save_json(&mut *self.store, keys::CARDIO, &log);
        self.track("cardio", format!("{date} +{minutes} min (total {total})"));
        Ok(total)
    }

    // ---------------------------
    // Meditation
    // ---------------------------

    pub fn meditation(&self) -> Vec<MeditationSession> {
        load_or_default(&*self.store, keys::MEDITATION)
    }

    pub fn add_meditation(
        &mut self,
        date: NaiveDate,
        minutes: f64,
        now: DateTime<Local>,
    ) -> AppResult<()> {
        let minutes = positive(minutes, "minutes")?;
        let mut sessions = self.meditation();
        sessions.push(MeditationSession {
            date,
            started_at: now,
            duration_minutes: minutes,
        });

        save_json(&mut *self.store, keys::MEDITATION, &sessions);
        self.track("meditation", format!("{date} {minutes} min"));
        Ok(())
    }

    // ---------------------------
    // Recovery
    // ---------------------------

    pub fn recovery(&self) -> RecoveryRecord {
        load_or_default(&*self.store, keys::RECOVERY)
    }

    /// Mark `date` as a rest day. Returns false if it was already marked.
    pub fn mark_recovery(&mut self, date: NaiveDate) -> bool {
        let mut record = self.recovery();
        let added = record.mark(date);
        if added {
            save_json(&mut *self.store, keys::RECOVERY, &record);
            self.track("recovery", format!("{date} marked"));
        }
        added
    }

    pub fn unmark_recovery(&mut self, date: NaiveDate) -> bool {
        let mut record = self.recovery();
        let removed = record.unmark(&date);
        if removed {
            save_json(&mut *self.store, keys::RECOVERY, &record);
            self.track("recovery", format!("{date} unmarked"));
        }
        removed
    }

    // ---------------------------
    // Supplements
    // ---------------------------

    pub fn supplements(&self) -> SupplementLog {
        load_or_default(&*self.store, keys::SUPPLEMENTS)
    }

    pub fn set_supplement(&mut self, date: NaiveDate, item: &str, taken: bool) -> AppResult<()> {
        let item = normalize_name(item)?;
        let mut log = self.supplements();
        log.entry(date).insert(item.clone(), taken);

        save_json(&mut *self.store, keys::SUPPLEMENTS, &log);
        self.track(
            "supplement",
            format!("{date} {item} {}", if taken { "taken" } else { "skipped" }),
        );
        Ok(())
    }

    // ---------------------------
    // Measurements
    // ---------------------------

    pub fn measurements(&self) -> Measurements {
        load_or_default(&*self.store, keys::MEASUREMENTS)
    }

    pub fn record_measurement(
        &mut self,
        date: NaiveDate,
        kind: &str,
        value: f64,
        unit: &str,
    ) -> AppResult<()> {
        let kind = normalize_name(kind)?;
        let value = positive(value, "measurement")?;

        let mut all = self.measurements();
        all.upsert(MeasurementEntry {
            date,
            kind: kind.clone(),
            value,
            unit: unit.to_string(),
        });

        save_json(&mut *self.store, keys::MEASUREMENTS, &all);
        self.track("measurement", format!("{date} {kind} {value}{unit}"));
        Ok(())
    }
}
