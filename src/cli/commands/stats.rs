use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::StatsReport;
use crate::errors::AppResult;
use crate::storage::pool::DbPool;
use crate::ui::messages::header;
use crate::utils::date::resolve_date;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { date } = cmd {
        let now = Local::now();
        let day = resolve_date(date.as_ref())?;

        // a past reference day is evaluated as of its last second
        let at = if day == now.date_naive() {
            now
        } else {
            day.and_hms_opt(23, 59, 59)
                .and_then(|dt| dt.and_local_timezone(Local).earliest())
                .unwrap_or(now)
        };

        let pool = DbPool::open_migrated(&cfg.database)?;
        let mut store = pool.store();

        let report = StatsReport::compute(&mut store, cfg, at);
        header(format!("Statistics for {}", day));
        report.print();
    }

    Ok(())
}
