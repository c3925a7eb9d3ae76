use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::storage::pool::DbPool;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let pool = DbPool::open_migrated(&cfg.database)?;
        let mut store = pool.store();
        ExportLogic::export(&mut store, *format, file, *force)?;
    }

    Ok(())
}
