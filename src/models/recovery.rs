use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Days explicitly marked as rest days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecoveryRecord {
    #[serde(default)]
    pub recovery_days: BTreeSet<NaiveDate>,
}

impl RecoveryRecord {
    /// Returns false if the day was already marked.
    pub fn mark(&mut self, date: NaiveDate) -> bool {
        self.recovery_days.insert(date)
    }

    pub fn unmark(&mut self, date: &NaiveDate) -> bool {
        self.recovery_days.remove(date)
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.recovery_days.contains(date)
    }

    /// Rest days on or before `date`.
    pub fn count_until(&self, date: NaiveDate) -> usize {
        self.recovery_days.range(..=date).count()
    }

    pub fn count(&self) -> usize {
        self.recovery_days.len()
    }
}
