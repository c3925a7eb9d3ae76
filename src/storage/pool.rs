//! SQLite connection wrapper (lightweight for CLI usage).

use crate::errors::AppResult;
use crate::storage::kv::SqliteStore;
use crate::storage::migrate::run_pending_migrations;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open the database and bring its schema up to date.
    pub fn open_migrated(path: &str) -> AppResult<Self> {
        let pool = Self::new(path)?;
        run_pending_migrations(&pool.conn)?;
        Ok(pool)
    }

    /// Key-value view over this connection.
    pub fn store(&self) -> SqliteStore<'_> {
        SqliteStore::new(&self.conn)
    }
}
