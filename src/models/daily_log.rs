//! Generic per-date log shared by every tracked activity.
//!
//! Stored on disk as a JSON object keyed by `YYYY-MM-DD`. A date holds at
//! most one value: writing it again replaces the previous one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyLog<T> {
    entries: BTreeMap<NaiveDate, T>,
}

impl<T> Default for DailyLog<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T> DailyLog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the value for `date`. Returns the previous value.
    pub fn upsert(&mut self, date: NaiveDate, value: T) -> Option<T> {
        self.entries.insert(date, value)
    }

    pub fn get(&self, date: &NaiveDate) -> Option<&T> {
        self.entries.get(date)
    }

    pub fn remove(&mut self, date: &NaiveDate) -> Option<T> {
        self.entries.remove(date)
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.entries.contains_key(date)
    }

    /// Entries in chronological order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&NaiveDate, &T)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> DailyLog<T> {
    /// Copy of the entries dated on or before `date`.
    pub fn up_to(&self, date: NaiveDate) -> Self {
        self.entries
            .range(..=date)
            .map(|(d, v)| (*d, v.clone()))
            .collect()
    }
}

impl<T: Default> DailyLog<T> {
    /// Mutable access to the value for `date`, creating an empty one if missing.
    pub fn entry(&mut self, date: NaiveDate) -> &mut T {
        self.entries.entry(date).or_default()
    }
}

impl<T> FromIterator<(NaiveDate, T)> for DailyLog<T> {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
