//! One-time import of the flat keys written by older clients.
//!
//! Older versions stored each body measurement under `measurement-<kind>` and
//! each day's water intake under `water-intake-<YYYY-MM-DD>`. They are folded
//! into the `measurements` and `hydration` documents and then deleted. Values
//! already present in the consolidated documents always win.

use crate::errors::{AppError, AppResult};
use crate::models::HydrationLog;
use crate::models::measurement::{MeasurementEntry, Measurements};
use crate::storage::keys;
use crate::storage::kv::{KvStore, load_or_default, save_json};
use crate::ui::messages::warning;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum LegacyMeasurement {
    Plain(f64),
    Text(String),
    Detailed {
        value: f64,
        #[serde(default)]
        date: Option<NaiveDate>,
        #[serde(default)]
        unit: Option<String>,
    },
}

impl LegacyMeasurement {
    fn resolve(self, today: NaiveDate) -> Option<(NaiveDate, f64, String)> {
        match self {
            LegacyMeasurement::Plain(v) => Some((today, v, String::new())),
            LegacyMeasurement::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .map(|v| (today, v, String::new())),
            LegacyMeasurement::Detailed { value, date, unit } => {
                Some((date.unwrap_or(today), value, unit.unwrap_or_default()))
            }
        }
        .filter(|(_, v, _)| v.is_finite())
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct LegacyImportReport {
    pub measurements: usize,
    pub hydration_days: usize,
    pub skipped: usize,
    pub removed_keys: usize,
}

impl LegacyImportReport {
    pub fn is_empty(&self) -> bool {
        self.removed_keys == 0
    }

    pub fn summary(&self) -> String {
        format!(
            "imported {} measurement(s), {} hydration day(s); skipped {}; removed {} legacy key(s)",
            self.measurements, self.hydration_days, self.skipped, self.removed_keys
        )
    }
}

/// Import every legacy key into the consolidated model.
///
/// Legacy keys are only removed after the consolidated documents were written
/// successfully, so a failed write can be retried on the next run.
pub fn import_legacy_keys<S: KvStore + ?Sized>(
    store: &mut S,
    today: NaiveDate,
) -> AppResult<LegacyImportReport> {
    let legacy_keys: Vec<String> = store
        .keys()?
        .into_iter()
        .filter(|k| {
            k.starts_with(keys::LEGACY_MEASUREMENT_PREFIX) || k.starts_with(keys::LEGACY_WATER_PREFIX)
        })
        .collect();

    let mut report = LegacyImportReport::default();
    if legacy_keys.is_empty() {
        return Ok(report);
    }

    let mut measurements: Measurements = load_or_default(store, keys::MEASUREMENTS);
    let mut hydration: HydrationLog = load_or_default(store, keys::HYDRATION);

    for key in &legacy_keys {
        let raw = store.get(key)?.unwrap_or_default();

        if let Some(kind) = key.strip_prefix(keys::LEGACY_MEASUREMENT_PREFIX) {
            let parsed = serde_json::from_str::<LegacyMeasurement>(&raw)
                .ok()
                .and_then(|m| m.resolve(today));

            match parsed {
                Some((date, value, unit)) if !kind.is_empty() => {
                    if measurements.has(&date, kind) {
                        report.skipped += 1;
                    } else {
                        measurements.upsert(MeasurementEntry {
                            date,
                            kind: kind.to_string(),
                            value,
                            unit,
                        });
                        report.measurements += 1;
                    }
                }
                _ => {
                    warning(format!("Skipping malformed legacy key '{}'", key));
                    report.skipped += 1;
                }
            }
        } else if let Some(day) = key.strip_prefix(keys::LEGACY_WATER_PREFIX) {
            let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").ok();
            let ounces = serde_json::from_str::<f64>(&raw)
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0);

            match (date, ounces) {
                (Some(date), Some(oz)) => {
                    if hydration.contains(&date) {
                        report.skipped += 1;
                    } else {
                        hydration.upsert(date, oz);
                        report.hydration_days += 1;
                    }
                }
                _ => {
                    warning(format!("Skipping malformed legacy key '{}'", key));
                    report.skipped += 1;
                }
            }
        }
    }

    if report.measurements > 0 && !save_json(store, keys::MEASUREMENTS, &measurements) {
        return Err(AppError::Storage(
            "legacy import aborted: measurements not saved".into(),
        ));
    }
    if report.hydration_days > 0 && !save_json(store, keys::HYDRATION, &hydration) {
        return Err(AppError::Storage(
            "legacy import aborted: hydration not saved".into(),
        ));
    }

    for key in &legacy_keys {
        store.remove(key)?;
        report.removed_keys += 1;
    }

    Ok(report)
}
