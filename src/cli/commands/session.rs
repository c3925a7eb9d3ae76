use crate::cli::parser::{Commands, FastingAction, TimerAction};
use crate::config::Config;
use crate::core::session::{FastingLogic, SessionLogic};
use crate::errors::AppResult;
use crate::storage::pool::DbPool;
use crate::ui::messages::{info, success};
use crate::utils::formatting::{format_seconds, progress_bar};
use chrono::Local;

/// Handle `session` and `fasting`
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let now = Local::now();

    match cmd {
        Commands::Session { action } => {
            let pool = DbPool::open_migrated(&cfg.database)?;
            let mut store = pool.store();

            match action {
                TimerAction::Start => {
                    let s = SessionLogic::start(&mut store, now)?;
                    success(format!(
                        "Workout session started at {}",
                        s.start_time.format("%H:%M:%S")
                    ));
                }
                TimerAction::Stop => {
                    let s = SessionLogic::stop(&mut store, now)?;
                    success(format!(
                        "Workout session stopped after {}",
                        format_seconds(s.duration.unwrap_or(0))
                    ));
                }
                TimerAction::Status => {
                    let log = SessionLogic::load(&store);
                    match SessionLogic::status(&log, now) {
                        Some(elapsed) => info(format!("Session running: {}", format_seconds(elapsed))),
                        None => info("No workout session running."),
                    }
                    info(format!(
                        "Total today: {}",
                        format_seconds(SessionLogic::total_seconds_on(&log, now.date_naive()))
                    ));
                }
            }
        }

        Commands::Fasting { action } => {
            let pool = DbPool::open_migrated(&cfg.database)?;
            let mut store = pool.store();

            match action {
                FastingAction::Start { hours } => {
                    let target = hours.unwrap_or(cfg.fasting_target_hours);
                    let w = FastingLogic::start(&mut store, now, target)?;
                    success(format!(
                        "Fasting started at {} (target {}h)",
                        w.start.format("%H:%M"),
                        w.target_hours
                    ));
                }
                FastingAction::Stop => {
                    let w = FastingLogic::stop(&mut store, now)?;
                    let outcome = if w.reached_target(now) {
                        "target reached"
                    } else {
                        "ended before target"
                    };
                    success(format!(
                        "Fasting stopped after {} ({})",
                        format_seconds(w.elapsed_seconds(now)),
                        outcome
                    ));
                }
                FastingAction::Status => {
                    let log = FastingLogic::load(&store);
                    match (&log.active, FastingLogic::progress(&log, now)) {
                        (Some(w), Some(pct)) => {
                            info(format!(
                                "Fasting for {} of {}h",
                                format_seconds(w.elapsed_seconds(now)),
                                w.target_hours
                            ));
                            println!("{}", progress_bar(pct, 20));
                        }
                        _ => info("Not fasting."),
                    }
                }
            }
        }

        _ => {}
    }

    Ok(())
}
