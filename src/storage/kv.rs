//! Key-value persistence layer.
//!
//! Every domain is stored as one JSON document under its own key. Reads of
//! malformed documents fall back to defaults and writes are best-effort:
//! neither ever aborts the calling operation.

use crate::errors::{AppError, AppResult};
use crate::storage::log;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// Audit line as seen through a store.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub trait KvStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// All keys, sorted.
    fn keys(&self) -> AppResult<Vec<String>>;

    /// Record an audit line. Never fails: problems are only reported.
    fn audit(&mut self, operation: &str, target: &str, message: &str);

    /// Most recent audit lines for `operation`, newest first.
    fn recent_audit(&self, operation: &str, limit: usize) -> AppResult<Vec<AuditEntry>>;
}

// ---------------------------------------------------------------------------
// SQLite
// ---------------------------------------------------------------------------

/// Store backed by the `kv` and `log` tables.
pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl KvStore for SqliteStore<'_> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                 value = excluded.value,
                 updated_at = excluded.updated_at",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) {
        if let Err(e) = log::ttlog(self.conn, operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    fn recent_audit(&self, operation: &str, limit: usize) -> AppResult<Vec<AuditEntry>> {
        let rows = log::recent(self.conn, operation, limit)?;
        Ok(rows
            .into_iter()
            .map(|r| AuditEntry {
                date: r.date,
                operation: r.operation,
                target: r.target,
                message: r.message,
            })
            .collect())
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// Store living only as long as the process. Used for session-scoped flags
/// and as a test double.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
    audit_log: Vec<AuditEntry>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, as with an exhausted storage quota.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Store pre-filled with raw values, bypassing the write path.
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn audit_entries(&self) -> &[AuditEntry] {
        &self.audit_log
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.read_only {
            return Err(AppError::Storage(format!(
                "quota exceeded while writing '{}'",
                key
            )));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        if self.read_only {
            return Err(AppError::Storage(format!("cannot remove '{}'", key)));
        }
        self.values.remove(key);
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.values.keys().cloned().collect())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) {
        self.audit_log.push(AuditEntry {
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
    }

    fn recent_audit(&self, operation: &str, limit: usize) -> AppResult<Vec<AuditEntry>> {
        Ok(self
            .audit_log
            .iter()
            .rev()
            .filter(|e| e.operation == operation)
            .take(limit)
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Typed helpers
// ---------------------------------------------------------------------------

/// Strict read: `Ok(None)` when absent, `Err` when unreadable or malformed.
pub fn read_json<S, T>(store: &S, key: &str) -> AppResult<Option<T>>
where
    S: KvStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Lenient read: malformed or unreadable values are reported and treated as absent.
pub fn load_json<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KvStore + ?Sized,
    T: DeserializeOwned,
{
    match read_json(store, key) {
        Ok(value) => value,
        Err(e) => {
            warning(format!("Ignoring unreadable data under '{}': {}", key, e));
            None
        }
    }
}

pub fn load_or_default<S, T>(store: &S, key: &str) -> T
where
    S: KvStore + ?Sized,
    T: DeserializeOwned + Default,
{
    load_json(store, key).unwrap_or_default()
}

/// Best-effort write. Returns whether the value reached the store.
pub fn save_json<S, T>(store: &mut S, key: &str, value: &T) -> bool
where
    S: KvStore + ?Sized,
    T: Serialize + ?Sized,
{
    let result = serde_json::to_string(value)
        .map_err(AppError::from)
        .and_then(|raw| store.set(key, &raw));

    match result {
        Ok(()) => true,
        Err(e) => {
            warning(format!("Could not persist '{}': {}", key, e));
            store.audit("storage_error", key, &e.to_string());
            false
        }
    }
}
