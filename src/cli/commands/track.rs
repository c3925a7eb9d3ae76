use crate::cli::parser::{AmountAction, Commands, RecoveryAction, SupplementAction, WorkoutAction};
use crate::config::Config;
use crate::core::tracker::Tracker;
use crate::errors::AppResult;
use crate::storage::pool::DbPool;
use crate::ui::messages::{info, success};
use crate::utils::date::resolve_date;
use crate::utils::formatting::format_amount;
use chrono::Local;

/// Handle every raw-data logging command.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open_migrated(&cfg.database)?;
    let mut store = pool.store();
    let mut tracker = Tracker::new(&mut store);

    match cmd {
        //
        // 1) WORKOUT REPS
        //
        Commands::Workout { action } => match action {
            WorkoutAction::Add {
                exercise,
                reps,
                date,
            } => {
                let date = resolve_date(date.as_ref())?;
                let total = tracker.add_workout_reps(date, exercise, *reps)?;
                let goal = cfg
                    .workout_goal(&exercise.trim().to_lowercase())
                    .map(|g| format!(" / {}", g))
                    .unwrap_or_default();
                success(format!("{} on {}: {}{}", exercise, date, total, goal));
            }
            WorkoutAction::Set {
                exercise,
                reps,
                date,
            } => {
                let date = resolve_date(date.as_ref())?;
                tracker.set_workout_reps(date, exercise, *reps)?;
                if *reps == 0 {
                    success(format!("{} on {} cleared", exercise, date));
                } else {
                    success(format!("{} on {} set to {}", exercise, date, reps));
                }
            }
        },

        //
        // 2) AMOUNTS
        //
        Commands::Hydration {
            action: AmountAction::Add { amount, date },
        } => {
            let date = resolve_date(date.as_ref())?;
            let total = tracker.add_hydration(date, *amount)?;
            success(format!(
                "Hydration on {}: {} / {} oz",
                date,
                format_amount(total),
                format_amount(cfg.hydration_goal_oz)
            ));
        }
        Commands::Meditation {
            action: AmountAction::Add { amount, date },
        } => {
            let date = resolve_date(date.as_ref())?;
            tracker.add_meditation(date, *amount, Local::now())?;
            success(format!(
                "Meditation on {}: {} min logged",
                date,
                format_amount(*amount)
            ));
        }
        Commands::Cardio {
            action: AmountAction::Add { amount, date },
        } => {
            let date = resolve_date(date.as_ref())?;
            let total = tracker.add_cardio(date, *amount)?;
            success(format!("Cardio on {}: {} min", date, format_amount(total)));
        }

        //
        // 3) RECOVERY
        //
        Commands::Recovery { action } => match action {
            RecoveryAction::Mark { date } => {
                let date = resolve_date(date.as_ref())?;
                if tracker.mark_recovery(date) {
                    success(format!("{} marked as recovery day", date));
                } else {
                    info(format!("{} is already a recovery day", date));
                }
            }
            RecoveryAction::Unmark { date } => {
                let date = resolve_date(date.as_ref())?;
                if tracker.unmark_recovery(date) {
                    success(format!("{} is no longer a recovery day", date));
                } else {
                    info(format!("{} was not a recovery day", date));
                }
            }
        },

        //
        // 4) SUPPLEMENTS
        //
        Commands::Supplement { action } => {
            let (item, date, taken) = match action {
                SupplementAction::Take { item, date } => (item, date, true),
                SupplementAction::Skip { item, date } => (item, date, false),
            };
            let date = resolve_date(date.as_ref())?;
            tracker.set_supplement(date, item, taken)?;
            success(format!(
                "{} on {}: {}",
                item,
                date,
                if taken { "taken" } else { "skipped" }
            ));
        }

        //
        // 5) MEASUREMENTS
        //
        Commands::Measure {
            kind,
            value,
            unit,
            date,
        } => {
            let date = resolve_date(date.as_ref())?;
            let unit = unit.clone().unwrap_or_else(|| cfg.measurement_unit.clone());
            tracker.record_measurement(date, kind, *value, &unit)?;
            success(format!(
                "{} on {}: {}{}",
                kind,
                date,
                format_amount(*value),
                unit
            ));
        }

        _ => {}
    }

    Ok(())
}
