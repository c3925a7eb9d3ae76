//! Workout session timer and fasting windows.
//!
//! Both keep at most one open record. Starting while one is open is rejected
//! so the running record (and its elapsed time) is never lost.

use crate::core::calculator::progress::progress_percentage;
use crate::errors::{AppError, AppResult};
use crate::models::fasting::{FastingLog, FastingWindow};
use crate::models::workout::{SessionLog, WorkoutSession};
use crate::storage::keys;
use crate::storage::kv::{KvStore, load_or_default, save_json};
use crate::utils::formatting::format_seconds;
use chrono::{DateTime, Local, NaiveDate};

const WORKOUT_SESSION: &str = "workout session";
const FASTING_WINDOW: &str = "fasting window";

pub struct SessionLogic;

impl SessionLogic {
    pub fn load(store: &dyn KvStore) -> SessionLog {
        load_or_default(store, keys::WORKOUT_SESSIONS)
    }

    pub fn start(store: &mut dyn KvStore, now: DateTime<Local>) -> AppResult<WorkoutSession> {
        let mut log = Self::load(store);
        if let Some(open) = &log.active {
            return Err(AppError::SessionAlreadyOpen(format!(
                "{} (started {})",
                WORKOUT_SESSION,
                open.start_time.format("%Y-%m-%d %H:%M")
            )));
        }

        let session = WorkoutSession::start(now);
        log.active = Some(session.clone());

        save_json(&mut *store, keys::WORKOUT_SESSIONS, &log);
        store.audit("session", "start", &now.to_rfc3339());
        Ok(session)
    }

    /// Close the open session and move it to history.
    pub fn stop(store: &mut dyn KvStore, now: DateTime<Local>) -> AppResult<WorkoutSession> {
        let mut log = Self::load(store);
        let mut session = log
            .active
            .take()
            .ok_or_else(|| AppError::NoOpenSession(WORKOUT_SESSION.into()))?;

        let end = now.max(session.start_time);
        session.end_time = Some(end);
        session.duration = Some((end - session.start_time).num_seconds());
        log.history.push(session.clone());

        save_json(&mut *store, keys::WORKOUT_SESSIONS, &log);
        store.audit(
            "session",
            "stop",
            &format!("duration {}", format_seconds(session.duration.unwrap_or(0))),
        );
        Ok(session)
    }

    /// Elapsed seconds of the open session, if any.
    pub fn status(log: &SessionLog, now: DateTime<Local>) -> Option<i64> {
        log.active
            .as_ref()
            .filter(|s| s.is_open())
            .map(|s| s.elapsed_seconds(now))
    }

    /// Seconds of closed sessions dated `date`.
    pub fn total_seconds_on(log: &SessionLog, date: NaiveDate) -> i64 {
        log.history
            .iter()
            .filter(|s| s.date == date)
            .filter_map(|s| s.duration)
            .sum()
    }
}

pub struct FastingLogic;

impl FastingLogic {
    pub fn load(store: &dyn KvStore) -> FastingLog {
        load_or_default(store, keys::FASTING)
    }

    pub fn start(
        store: &mut dyn KvStore,
        now: DateTime<Local>,
        target_hours: u32,
    ) -> AppResult<FastingWindow> {
        if target_hours == 0 {
            return Err(AppError::InvalidAmount(
                "fasting target must be at least 1 hour".into(),
            ));
        }

        let mut log = Self::load(store);
        if let Some(open) = &log.active {
            return Err(AppError::SessionAlreadyOpen(format!(
                "{} (started {})",
                FASTING_WINDOW,
                open.start.format("%Y-%m-%d %H:%M")
            )));
        }

        let window = FastingWindow {
            start: now,
            end: None,
            target_hours,
        };
        log.active = Some(window.clone());

        save_json(&mut *store, keys::FASTING, &log);
        store.audit("fasting", "start", &format!("target {}h", target_hours));
        Ok(window)
    }

    pub fn stop(store: &mut dyn KvStore, now: DateTime<Local>) -> AppResult<FastingWindow> {
        let mut log = Self::load(store);
        let mut window = log
            .active
            .take()
            .ok_or_else(|| AppError::NoOpenSession(FASTING_WINDOW.into()))?;

        window.end = Some(now.max(window.start));
        log.history.push(window.clone());

        save_json(&mut *store, keys::FASTING, &log);
        store.audit(
            "fasting",
            "stop",
            &format!("elapsed {}", format_seconds(window.elapsed_seconds(now))),
        );
        Ok(window)
    }

    /// Progress of the open window towards its target, in percent.
    pub fn progress(log: &FastingLog, now: DateTime<Local>) -> Option<f64> {
        log.active.as_ref().map(|w| {
            progress_percentage(
                w.elapsed_seconds(now) as f64,
                f64::from(w.target_hours) * 3600.0,
            )
        })
    }
}
