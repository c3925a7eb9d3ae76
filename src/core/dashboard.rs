//! Dashboard composition: one view per enabled widget, in layout order.

use crate::config::Config;
use crate::core::calculator::adherence::{adherence_percentage, current_streak};
use crate::core::calculator::progress::progress_percentage;
use crate::core::calculator::recovery::recovery_percentage_for;
use crate::core::calculator::rolling::{rolling_average, total_on};
use crate::core::calculator::trend::trend;
use crate::core::session::{FastingLogic, SessionLogic};
use crate::core::tracker::Tracker;
use crate::errors::AppResult;
use crate::models::widget::{DEFAULT_REST_SECONDS, WidgetConfig, WidgetDescriptor, WidgetSize, WidgetType};
use crate::storage::keys;
use crate::storage::kv::{KvStore, save_json};
use crate::utils::formatting::{bold, format_amount, format_seconds, pad_right, progress_bar};
use chrono::{DateTime, Datelike, Local, Timelike};

const QUOTES: [&str; 8] = [
    "The only bad workout is the one that didn't happen.",
    "Small daily improvements are the key to staggering long-term results.",
    "Motivation gets you started. Habit keeps you going.",
    "Take care of your body. It's the only place you have to live.",
    "Rest when you're weary. Refresh and renew yourself, your body, your mind, your spirit.",
    "Strength does not come from the body. It comes from the will.",
    "Discipline is choosing between what you want now and what you want most.",
    "A one-hour workout is 4% of your day.",
];

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetView {
    pub id: String,
    pub title: String,
    pub size: WidgetSize,
    pub lines: Vec<String>,
    /// Goal progress in percent, for widgets that have a goal.
    pub progress: Option<f64>,
}

/// Deterministic quote for a given day.
pub fn quote_of_the_day(day_of_year: u32, seed: u32) -> &'static str {
    QUOTES[((day_of_year + seed) as usize) % QUOTES.len()]
}

pub fn build_views(
    store: &mut dyn KvStore,
    widgets: &[WidgetDescriptor],
    cfg: &Config,
    now: DateTime<Local>,
) -> AppResult<Vec<WidgetView>> {
    widgets
        .iter()
        .filter(|w| w.enabled)
        .map(|w| build_view(store, w, cfg, now))
        .collect()
}

fn build_view(
    store: &mut dyn KvStore,
    widget: &WidgetDescriptor,
    cfg: &Config,
    now: DateTime<Local>,
) -> AppResult<WidgetView> {
    let today = now.date_naive();
    let mut lines = Vec::new();
    let mut progress = None;

    match widget.kind {
        WidgetType::Workout => {
            let workouts = Tracker::new(store).workouts();
            let reps_today = workouts.get(&today).cloned().unwrap_or_default();

            let exercises: Vec<String> = match &widget.config {
                Some(WidgetConfig::Workout { exercises }) => exercises.clone(),
                _ => cfg.workout_goals.keys().cloned().collect(),
            };

            let mut done = 0.0;
            let mut goal_total = 0.0;
            for exercise in &exercises {
                let reps = reps_today.get(exercise).copied().unwrap_or(0);
                let goal = cfg.workout_goal(exercise).unwrap_or(0);
                done += f64::from(reps.min(goal));
                goal_total += f64::from(goal);
                lines.push(format!("{} {} / {}", pad_right(exercise, 10), reps, goal));
            }
            progress = Some(progress_percentage(done, goal_total));
        }

        WidgetType::WorkoutSession => {
            let log = SessionLogic::load(store);
            match SessionLogic::status(&log, now) {
                Some(elapsed) => lines.push(format!("⏱  running {}", format_seconds(elapsed))),
                None => lines.push("No session running".to_string()),
            }
            lines.push(format!(
                "Today: {}",
                format_seconds(SessionLogic::total_seconds_on(&log, today))
            ));
            if let Some(WidgetConfig::WorkoutSession { show_history: true }) = &widget.config {
                for s in log.history.iter().rev().take(3) {
                    lines.push(format!(
                        "{}  {}",
                        s.date,
                        format_seconds(s.duration.unwrap_or(0))
                    ));
                }
            }
        }

        WidgetType::Meditation => {
            let goal = match &widget.config {
                Some(WidgetConfig::Meditation { goal_minutes }) => *goal_minutes,
                _ => cfg.meditation_goal_minutes,
            };
            let sessions = Tracker::new(store).meditation();
            let samples: Vec<_> = sessions.iter().map(|s| (s.date, s.duration_minutes)).collect();
            let avg = rolling_average(samples.iter().copied(), today);
            lines.push(format!(
                "Today {} min",
                format_amount(total_on(samples.iter().copied(), today))
            ));
            lines.push(format!(
                "7-day avg {} min / goal {} min",
                format_amount(avg),
                format_amount(goal)
            ));
            progress = Some(progress_percentage(avg, goal));
        }

        WidgetType::Hydration => {
            let goal = match &widget.config {
                Some(WidgetConfig::Hydration { goal_oz }) => *goal_oz,
                _ => cfg.hydration_goal_oz,
            };
            let log = Tracker::new(store).hydration();
            let oz = log.get(&today).copied().unwrap_or(0.0);
            lines.push(format!(
                "Today {} oz / goal {} oz",
                format_amount(oz),
                format_amount(goal)
            ));
            progress = Some(progress_percentage(oz, goal));
        }

        WidgetType::Cardio => {
            let goal = match &widget.config {
                Some(WidgetConfig::Cardio { goal_minutes }) => *goal_minutes,
                _ => cfg.cardio_goal_minutes,
            };
            let log = Tracker::new(store).cardio();
            let avg = rolling_average(log.iter().map(|(d, m)| (*d, *m)), today);
            lines.push(format!(
                "7-day avg {} min / goal {} min",
                format_amount(avg),
                format_amount(goal)
            ));
            progress = Some(progress_percentage(avg, goal));
        }

        WidgetType::Fasting => {
            let log = FastingLogic::load(store);
            match &log.active {
                Some(window) => {
                    lines.push(format!(
                        "Fasting {} / {}h",
                        format_seconds(window.elapsed_seconds(now)),
                        window.target_hours
                    ));
                    progress = FastingLogic::progress(&log, now);
                }
                None => {
                    let target = match &widget.config {
                        Some(WidgetConfig::Fasting { target_hours }) => *target_hours,
                        _ => cfg.fasting_target_hours,
                    };
                    lines.push(format!("Not fasting (target {}h)", target));
                    if let Some(last) = log.history.last() {
                        lines.push(format!(
                            "Last: {} ({})",
                            format_seconds(last.elapsed_seconds(now)),
                            if last.reached_target(now) { "completed" } else { "ended early" }
                        ));
                    }
                }
            }
        }

        WidgetType::Goals => {
            let tracker = Tracker::new(store);
            let recovery = recovery_percentage_for(
                &tracker.recovery(),
                &tracker.workouts(),
                &cfg.workout_goals,
            );
            let supplements = tracker.supplements();
            let kind = match &widget.config {
                Some(WidgetConfig::Goals { trend_measurement }) => trend_measurement.clone(),
                _ => "weight".to_string(),
            };
            let measurements = tracker.measurements();

            lines.push(format!("Recovery ratio {:.1}%", recovery));
            lines.push(format!(
                "Supplements: streak {} day(s), adherence {}%",
                current_streak(&supplements),
                adherence_percentage(&supplements)
            ));
            lines.push(format!(
                "{} trend {}",
                kind,
                trend(measurements.iter(), &kind).arrow()
            ));
        }

        WidgetType::Quote => {
            let seed = match &widget.config {
                Some(WidgetConfig::Quote { seed }) => *seed,
                _ => 0,
            };
            let text = quote_of_the_day(today.ordinal(), seed);
            let width = widget.size.bar_width() * 2 + 10;
            lines.extend(textwrap::wrap(text, width).into_iter().map(|l| l.into_owned()));
        }

        WidgetType::Timer => {
            let secs = match &widget.config {
                Some(WidgetConfig::Timer { rest_seconds }) => *rest_seconds,
                _ => DEFAULT_REST_SECONDS,
            };
            lines.push(format!("Rest interval {}", format_seconds(i64::from(secs))));
        }

        WidgetType::RecentActivity => {
            let limit = match &widget.config {
                Some(WidgetConfig::RecentActivity { limit }) => *limit,
                _ => cfg.recent_activity_limit,
            };
            let recent = store.recent_audit("track", limit)?;
            if recent.is_empty() {
                lines.push("Nothing logged yet".to_string());
            }
            for entry in recent {
                lines.push(format!("{:<11} {}", entry.target, entry.message));
            }
        }
    }

    Ok(WidgetView {
        id: widget.id.clone(),
        title: widget.title.clone(),
        size: widget.size,
        lines,
        progress,
    })
}

/// Render views as text blocks.
pub fn render(views: &[WidgetView]) -> String {
    let mut out = String::new();

    for view in views {
        out.push_str(&format!("{}\n", bold(&format!("▌ {}", view.title))));
        if let Some(pct) = view.progress {
            out.push_str(&format!("  {}\n", progress_bar(pct, view.size.bar_width())));
        }
        for line in &view.lines {
            out.push_str(&format!("  {}\n", line));
        }
        out.push('\n');
    }

    out
}

/// Greeting shown once per session. Returns `None` once it has been shown.
pub fn greet_once(session: &mut dyn KvStore, now: DateTime<Local>) -> Option<String> {
    if matches!(session.get(keys::SESSION_WELCOME_SHOWN), Ok(Some(_))) {
        return None;
    }
    save_json(session, keys::SESSION_WELCOME_SHOWN, &true);

    let part = match now.hour() {
        5..=11 => "morning",
        12..=17 => "afternoon",
        _ => "evening",
    };
    Some(format!("Good {}! Here is your day, {}.", part, now.format("%A %-d %B")))
}
