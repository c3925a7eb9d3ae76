use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastingWindow {
    pub start: DateTime<Local>,
    #[serde(default)]
    pub end: Option<DateTime<Local>>,
    pub target_hours: u32,
}

impl FastingWindow {
    pub fn elapsed_seconds(&self, now: DateTime<Local>) -> i64 {
        (self.end.unwrap_or(now) - self.start).num_seconds().max(0)
    }

    pub fn reached_target(&self, now: DateTime<Local>) -> bool {
        self.elapsed_seconds(now) >= i64::from(self.target_hours) * 3600
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FastingLog {
    #[serde(default)]
    pub active: Option<FastingWindow>,
    #[serde(default)]
    pub history: Vec<FastingWindow>,
}
