use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeditationSession {
    pub date: NaiveDate,
    pub started_at: DateTime<Local>,
    pub duration_minutes: f64,
}
