//! Storage keys of the consolidated data model.

pub const WIDGETS: &str = "dashboard-widgets";
pub const WORKOUTS: &str = "workouts";
pub const WORKOUT_SESSIONS: &str = "workout-sessions";
pub const HYDRATION: &str = "hydration";
pub const MEDITATION: &str = "meditation";
pub const CARDIO: &str = "cardio";
pub const FASTING: &str = "fasting";
pub const RECOVERY: &str = "recovery";
pub const SUPPLEMENTS: &str = "supplements";
pub const MEASUREMENTS: &str = "measurements";

/// Every activity key, in export order.
pub const ACTIVITY_KEYS: [&str; 9] = [
    WORKOUTS,
    WORKOUT_SESSIONS,
    HYDRATION,
    MEDITATION,
    CARDIO,
    FASTING,
    RECOVERY,
    SUPPLEMENTS,
    MEASUREMENTS,
];

/// Prefix of the flat per-measurement keys written by older clients.
pub const LEGACY_MEASUREMENT_PREFIX: &str = "measurement-";

/// Prefix of the flat per-day hydration keys written by older clients.
pub const LEGACY_WATER_PREFIX: &str = "water-intake-";

/// Session-scoped flag: dashboard greeting already printed.
pub const SESSION_WELCOME_SHOWN: &str = "welcome-shown";
