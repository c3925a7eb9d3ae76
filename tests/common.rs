#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ft() -> Command {
    cargo_bin_cmd!("fittrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fittrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fittrack_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize an empty database (schema only, config file untouched)
pub fn init_db(db_path: &str) {
    ft().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Read the persisted widget layout straight from the kv table
pub fn stored_widgets(db_path: &str) -> serde_json::Value {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    let raw: String = conn
        .query_row(
            "SELECT value FROM kv WHERE key = 'dashboard-widgets'",
            [],
            |row| row.get(0),
        )
        .expect("widgets stored");
    serde_json::from_str(&raw).expect("valid json")
}

/// Position of widget `id` in a stored layout
pub fn position_of(widgets: &serde_json::Value, id: &str) -> u64 {
    widgets
        .as_array()
        .expect("array")
        .iter()
        .find(|w| w["id"] == id)
        .and_then(|w| w["position"].as_u64())
        .expect("widget present")
}
