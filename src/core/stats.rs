//! Aggregated derived statistics, as printed by `stats`.

use crate::config::Config;
use crate::core::calculator::adherence::{adherence_percentage, current_streak, longest_streak};
use crate::core::calculator::progress::progress_percentage;
use crate::core::calculator::recovery::{completed_workout_days, recovery_percentage};
use crate::core::calculator::rolling::rolling_average;
use crate::core::calculator::trend::{Trend, trend};
use crate::core::session::SessionLogic;
use crate::core::tracker::Tracker;
use crate::models::measurement::MeasurementEntry;
use crate::storage::kv::KvStore;
use crate::utils::colors::{CYAN, RESET, colorize_optional};
use crate::utils::formatting::{format_amount, format_seconds, progress_bar};
use chrono::{DateTime, Local};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    pub meditation_avg: f64,
    pub meditation_progress: f64,
    pub cardio_avg: f64,
    pub cardio_progress: f64,
    pub hydration_today: f64,
    pub hydration_progress: f64,
    pub completed_workout_days: usize,
    pub recovery_days: usize,
    pub recovery_percentage: f64,
    pub supplement_streak: u32,
    pub supplement_longest_streak: u32,
    pub supplement_adherence: u32,
    pub session_seconds_today: i64,
    /// (kind, latest entry, trend)
    pub measurements: Vec<(String, MeasurementEntry, Trend)>,
}

impl StatsReport {
    pub fn compute(store: &mut dyn KvStore, cfg: &Config, now: DateTime<Local>) -> Self {
        let today = now.date_naive();
        let sessions = SessionLogic::load(store);
        let tracker = Tracker::new(store);

        let meditation = tracker.meditation();
        let meditation_avg =
            rolling_average(meditation.iter().map(|s| (s.date, s.duration_minutes)), today);

        let cardio = tracker.cardio();
        let cardio_avg = rolling_average(cardio.iter().map(|(d, m)| (*d, *m)), today);

        let hydration_today = tracker.hydration().get(&today).copied().unwrap_or(0.0);

        // nothing logged after the reference day may leak into the report
        let completed = completed_workout_days(&tracker.workouts().up_to(today), &cfg.workout_goals);
        let recovery_days = tracker.recovery().count_until(today);

        let supplements = tracker.supplements().up_to(today);

        let all_measurements = tracker.measurements().up_to(today);
        let kinds: BTreeSet<&str> = all_measurements.iter().map(|m| m.kind.as_str()).collect();
        let measurements = kinds
            .into_iter()
            .filter_map(|kind| {
                let latest = all_measurements.of_kind(kind).max_by_key(|e| e.date)?.clone();
                Some((kind.to_string(), latest, trend(all_measurements.iter(), kind)))
            })
            .collect();

        Self {
            meditation_avg,
            meditation_progress: progress_percentage(meditation_avg, cfg.meditation_goal_minutes),
            cardio_avg,
            cardio_progress: progress_percentage(cardio_avg, cfg.cardio_goal_minutes),
            hydration_today,
            hydration_progress: progress_percentage(hydration_today, cfg.hydration_goal_oz),
            completed_workout_days: completed,
            recovery_days,
            recovery_percentage: recovery_percentage(recovery_days, completed),
            supplement_streak: current_streak(&supplements),
            supplement_longest_streak: longest_streak(&supplements),
            supplement_adherence: adherence_percentage(&supplements),
            session_seconds_today: SessionLogic::total_seconds_on(&sessions, today),
            measurements,
        }
    }

    pub fn print(&self) {
        let label = |s: &str| format!("{CYAN}{:<22}{RESET}", s);

        println!(
            "{} {} min  {}",
            label("Meditation (7d avg)"),
            format_amount(self.meditation_avg),
            progress_bar(self.meditation_progress, 20)
        );
        println!(
            "{} {} min  {}",
            label("Cardio (7d avg)"),
            format_amount(self.cardio_avg),
            progress_bar(self.cardio_progress, 20)
        );
        println!(
            "{} {} oz  {}",
            label("Hydration (today)"),
            format_amount(self.hydration_today),
            progress_bar(self.hydration_progress, 20)
        );
        println!(
            "{} {}",
            label("Workout time (today)"),
            colorize_optional(&format_seconds(self.session_seconds_today))
        );
        println!(
            "{} {}",
            label("Completed workout days"),
            self.completed_workout_days
        );
        println!(
            "{} {} day(s) → {:.1}%",
            label("Recovery"),
            self.recovery_days,
            self.recovery_percentage
        );
        println!(
            "{} current {} / longest {} / adherence {}%",
            label("Supplements"),
            self.supplement_streak,
            self.supplement_longest_streak,
            self.supplement_adherence
        );

        if self.measurements.is_empty() {
            println!("{} {}", label("Measurements"), colorize_optional("--"));
        }
        for (kind, latest, t) in &self.measurements {
            println!(
                "{} {}{} ({}) {}",
                label(&format!("Measurement: {}", kind)),
                format_amount(latest.value),
                latest.unit,
                latest.date,
                t.arrow()
            );
        }
    }
}
