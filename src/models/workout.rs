use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A timed workout. Open while `end_time` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub date: NaiveDate,
    pub start_time: DateTime<Local>,
    #[serde(default)]
    pub end_time: Option<DateTime<Local>>,
    /// Seconds, set when the session is closed.
    #[serde(default)]
    pub duration: Option<i64>,
}

impl WorkoutSession {
    pub fn start(now: DateTime<Local>) -> Self {
        Self {
            date: now.date_naive(),
            start_time: now,
            end_time: None,
            duration: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    pub fn elapsed_seconds(&self, now: DateTime<Local>) -> i64 {
        match self.duration {
            Some(d) => d,
            None => (self.end_time.unwrap_or(now) - self.start_time)
                .num_seconds()
                .max(0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionLog {
    #[serde(default)]
    pub active: Option<WorkoutSession>,
    #[serde(default)]
    pub history: Vec<WorkoutSession>,
}
