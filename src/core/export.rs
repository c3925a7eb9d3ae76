//! Export of the consolidated data: a JSON snapshot or flattened CSV rows.

use crate::core::session::{FastingLogic, SessionLogic};
use crate::core::tracker::Tracker;
use crate::errors::{AppError, AppResult};
use crate::storage::keys;
use crate::storage::kv::{KvStore, load_json};
use crate::ui::messages::{info, success, warning};
use clap::ValueEnum;
use csv::Writer;
use serde_json::{Map, Value};
use std::io::{self, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// One flattened CSV row.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub domain: &'static str,
    pub date: String,
    pub item: String,
    pub value: String,
}

impl ExportRow {
    fn new(domain: &'static str, date: impl ToString, item: impl Into<String>, value: impl ToString) -> Self {
        Self {
            domain,
            date: date.to_string(),
            item: item.into(),
            value: value.to_string(),
        }
    }
}

/// Every consolidated key as one JSON object. Absent keys are omitted.
pub fn snapshot(store: &dyn KvStore) -> Value {
    let mut map = Map::new();
    for key in std::iter::once(keys::WIDGETS).chain(keys::ACTIVITY_KEYS) {
        if let Some(value) = load_json::<_, Value>(store, key) {
            map.insert(key.to_string(), value);
        }
    }
    Value::Object(map)
}

/// All activity data as `domain,date,item,value` rows.
pub fn rows(store: &mut dyn KvStore) -> Vec<ExportRow> {
    let mut out = Vec::new();

    {
        let tracker = Tracker::new(store);

        for (date, reps) in tracker.workouts().iter() {
            for (exercise, n) in reps {
                out.push(ExportRow::new("workout", date, exercise.clone(), n));
            }
        }
        for (date, oz) in tracker.hydration().iter() {
            out.push(ExportRow::new("hydration", date, "oz", oz));
        }
        for (date, min) in tracker.cardio().iter() {
            out.push(ExportRow::new("cardio", date, "minutes", min));
        }
        for s in tracker.meditation() {
            out.push(ExportRow::new("meditation", s.date, "minutes", s.duration_minutes));
        }
        for date in tracker.recovery().recovery_days {
            out.push(ExportRow::new("recovery", date, "rest_day", true));
        }
        for (date, items) in tracker.supplements().iter() {
            for (item, taken) in items {
                out.push(ExportRow::new("supplement", date, item.clone(), taken));
            }
        }
        for m in tracker.measurements().iter() {
            out.push(ExportRow::new("measurement", m.date, m.kind.clone(), m.value));
        }
    }

    for s in SessionLogic::load(store).history {
        out.push(ExportRow::new(
            "workout_session",
            s.date,
            "seconds",
            s.duration.unwrap_or(0),
        ));
    }
    for w in FastingLogic::load(store).history {
        let hours = w
            .end
            .map(|end| (end - w.start).num_minutes() as f64 / 60.0)
            .unwrap_or(0.0);
        out.push(ExportRow::new(
            "fasting",
            w.start.date_naive(),
            "hours",
            format!("{:.2}", hours),
        ));
    }

    out
}

pub fn write_csv(path: &Path, rows: &[ExportRow]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(["domain", "date", "item", "value"])?;
    for r in rows {
        wtr.write_record([r.domain, r.date.as_str(), r.item.as_str(), r.value.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json(path: &Path, snapshot: &Value) -> AppResult<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Check whether a file can be created or overwritten.
///
/// - If the file does NOT exist → Ok
/// - If it exists and `force` is set → Ok
/// - If it exists and `force == false` → ask the user.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}

pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        store: &mut dyn KvStore,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let count = match format {
            ExportFormat::Json => {
                let snap = snapshot(store);
                write_json(path, &snap)?;
                snap.as_object().map(|m| m.len()).unwrap_or(0)
            }
            ExportFormat::Csv => {
                let rows = rows(store);
                write_csv(path, &rows)?;
                rows.len()
            }
        };

        store.audit(
            "export",
            &path.to_string_lossy(),
            &format!("{} export, {} record(s)", format.as_str(), count),
        );
        success(format!(
            "{} export completed: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));
        Ok(())
    }
}
