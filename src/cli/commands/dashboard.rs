use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::{build_views, greet_once, render};
use crate::core::layout::WidgetLayout;
use crate::errors::AppResult;
use crate::storage::kv::MemoryStore;
use crate::storage::pool::DbPool;
use crate::ui::messages::{header, info};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard = cmd {
        let now = Local::now();
        let pool = DbPool::open_migrated(&cfg.database)?;
        let mut store = pool.store();

        // session flags live only as long as this process
        let mut session = MemoryStore::new();
        if let Some(greeting) = greet_once(&mut session, now) {
            header(greeting);
        }

        let widgets = WidgetLayout::initialize(&mut store).list_enabled();
        if widgets.is_empty() {
            info("All widgets are disabled (use `widget enable <id>`).");
            return Ok(());
        }

        let views = build_views(&mut store, &widgets, cfg, now)?;
        print!("{}", render(&views));
    }

    Ok(())
}
