use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementEntry {
    pub date: NaiveDate,
    pub kind: String,
    pub value: f64,
    #[serde(default)]
    pub unit: String,
}

/// Body measurements, at most one entry per (date, kind).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Measurements {
    entries: Vec<MeasurementEntry>,
}

impl Measurements {
    pub fn upsert(&mut self, entry: MeasurementEntry) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.date == entry.date && e.kind == entry.kind)
        {
            Some(existing) => *existing = entry,
            None => {
                self.entries.push(entry);
                self.entries.sort_by(|a, b| a.date.cmp(&b.date).then(a.kind.cmp(&b.kind)));
            }
        }
    }

    pub fn has(&self, date: &NaiveDate, kind: &str) -> bool {
        self.entries.iter().any(|e| &e.date == date && e.kind == kind)
    }

    /// Entries dated on or before `date`.
    pub fn up_to(&self, date: NaiveDate) -> Self {
        Self {
            entries: self.entries.iter().filter(|e| e.date <= date).cloned().collect(),
        }
    }

    /// Entries of one kind, oldest first.
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a MeasurementEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MeasurementEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
