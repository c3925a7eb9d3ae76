pub mod daily_log;
pub mod fasting;
pub mod measurement;
pub mod meditation;
pub mod recovery;
pub mod widget;
pub mod workout;

use std::collections::BTreeMap;

use daily_log::DailyLog;

/// Per-day repetitions, keyed by exercise name.
pub type WorkoutLog = DailyLog<BTreeMap<String, u32>>;

/// Per-day ounces of water.
pub type HydrationLog = DailyLog<f64>;

/// Per-day cardio minutes.
pub type CardioLog = DailyLog<f64>;

/// Per-day supplement flags (item → taken).
pub type SupplementLog = DailyLog<BTreeMap<String, bool>>;
