use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::layout::WidgetLayout;
use crate::errors::AppResult;
use crate::storage::kv::SqliteStore;
use crate::storage::log;
use crate::storage::migrate::run_pending_migrations;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
///  - the default widget layout, unless one is already stored
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ CONFIGURATION
    //
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing fittrack…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    //
    // 2️⃣ OPEN DB + MIGRATIONS
    //
    let conn = Connection::open(&db_path)?;
    run_pending_migrations(&conn)?;

    let mut store = SqliteStore::new(&conn);
    let enabled = WidgetLayout::initialize(&mut store).list_enabled().len();
    println!("🧩 Dashboard   : {} widget(s) enabled", enabled);

    println!("✅ Database initialized at {}", &db_path);

    //
    // 3️⃣ INTERNAL LOG (non blocking)
    //
    if let Err(e) = log::ttlog(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 fittrack initialization completed!");
    Ok(())
}
