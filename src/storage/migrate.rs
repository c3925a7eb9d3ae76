use crate::errors::{AppError, AppResult};
use crate::storage::kv::SqliteStore;
use crate::storage::legacy;
use crate::ui::messages::success;
use crate::utils::date;
use rusqlite::{Connection, OptionalExtension, Result, params};

const LEGACY_IMPORT_VERSION: &str = "20250301_0001_import_legacy_keys";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `kv` table exists.
fn kv_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='kv'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn create_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Fold the flat keys of older clients into the consolidated documents, once.
fn migrate_import_legacy_keys(conn: &Connection) -> AppResult<()> {
    if migration_applied(conn, LEGACY_IMPORT_VERSION)? {
        return Ok(());
    }

    let mut store = SqliteStore::new(conn);
    let report = legacy::import_legacy_keys(&mut store, date::today())
        .map_err(|e| AppError::Migration(format!("{}: {}", LEGACY_IMPORT_VERSION, e)))?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        params![LEGACY_IMPORT_VERSION, report.summary()],
    )?;

    if !report.is_empty() {
        success(format!(
            "Migration applied: {} → {}",
            LEGACY_IMPORT_VERSION,
            report.summary()
        ));
    }

    Ok(())
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure kv table
    if !kv_table_exists(conn)? {
        create_kv_table(conn)?;
        success("Created kv table.");
    }

    // 3) One-time import of legacy keys
    migrate_import_legacy_keys(conn)?;

    Ok(())
}
