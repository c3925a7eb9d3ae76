//! Pure derived-statistics functions.
//!
//! Nothing in here reads the clock or the store: callers pass "today" and the
//! raw logs explicitly.

pub mod adherence;
pub mod progress;
pub mod recovery;
pub mod rolling;
pub mod trend;

/// Length of the trailing window used by rolling averages, in days.
pub const ROLLING_WINDOW_DAYS: u64 = 7;
