use crate::errors::AppResult;
use crate::storage::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) STORED KEYS
    //
    let mut stmt = pool
        .conn
        .prepare("SELECT key, LENGTH(value), updated_at FROM kv ORDER BY key ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, i64>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut keys = Vec::new();
    for r in rows {
        keys.push(r?);
    }

    println!(
        "{}• Stored keys:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        keys.len(),
        RESET
    );
    if keys.is_empty() {
        println!("    {GREY}--{RESET}");
    }
    for (key, len, updated) in &keys {
        println!("    {:<20} {:>8} B  {GREY}{}{RESET}", key, len, updated);
    }

    //
    // 3) AUDIT LOG
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log rows:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);

    println!();
    Ok(())
}
