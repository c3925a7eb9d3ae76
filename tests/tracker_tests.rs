use chrono::{DateTime, Local, NaiveDate, TimeZone};
use fittrack::config::Config;
use fittrack::core::calculator::trend::Trend;
use fittrack::core::dashboard::{build_views, greet_once, quote_of_the_day, render};
use fittrack::core::layout::WidgetLayout;
use fittrack::core::session::{FastingLogic, SessionLogic};
use fittrack::core::stats::StatsReport;
use fittrack::core::tracker::Tracker;
use fittrack::errors::AppError;
use fittrack::models::widget::{DEFAULT_REST_SECONDS, WidgetConfig, WidgetType, default_widgets};
use fittrack::storage::kv::{KvStore, MemoryStore};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn at(y: i32, m: u32, day: u32, h: u32, min: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, m, day, h, min, 0).single().unwrap()
}

fn test_config() -> Config {
    Config::with_database(":memory:".into())
}

// ---------------------------
// Tracker
// ---------------------------

#[test]
fn test_adds_sum_within_a_day() {
    let mut store = MemoryStore::new();
    let mut tracker = Tracker::new(&mut store);
    let day = d("2025-09-01");

    assert_eq!(tracker.add_workout_reps(day, "Pushups", 20).unwrap(), 20);
    assert_eq!(tracker.add_workout_reps(day, " pushups ", 15).unwrap(), 35);
    assert_eq!(tracker.add_hydration(day, 16.0).unwrap(), 16.0);
    assert_eq!(tracker.add_hydration(day, 8.5).unwrap(), 24.5);

    let workouts = tracker.workouts();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts.get(&day).unwrap().get("pushups"), Some(&35));
}

#[test]
fn test_set_zero_clears_the_day() {
    let mut store = MemoryStore::new();
    let mut tracker = Tracker::new(&mut store);
    let day = d("2025-09-01");

    tracker.set_workout_reps(day, "squats", 40).unwrap();
    tracker.set_workout_reps(day, "squats", 0).unwrap();
    assert!(tracker.workouts().is_empty());
}

#[test]
fn test_invalid_amounts_are_rejected() {
    let mut store = MemoryStore::new();
    let mut tracker = Tracker::new(&mut store);
    let day = d("2025-09-01");

    assert!(matches!(
        tracker.add_hydration(day, -4.0),
        Err(AppError::InvalidAmount(_))
    ));
    assert!(matches!(
        tracker.add_cardio(day, f64::NAN),
        Err(AppError::InvalidAmount(_))
    ));
    assert!(matches!(
        tracker.add_workout_reps(day, "pushups", 0),
        Err(AppError::InvalidAmount(_))
    ));
    assert!(matches!(
        tracker.set_supplement(day, "   ", true),
        Err(AppError::InvalidAmount(_))
    ));
    assert!(tracker.hydration().is_empty());
}

#[test]
fn test_measurement_upsert_replaces_same_day() {
    let mut store = MemoryStore::new();
    let mut tracker = Tracker::new(&mut store);
    let day = d("2025-09-01");

    tracker.record_measurement(day, "Weight", 181.0, "lb").unwrap();
    tracker.record_measurement(day, "weight", 180.0, "lb").unwrap();
    tracker.record_measurement(day, "waist", 34.0, "in").unwrap();

    let all = tracker.measurements();
    assert_eq!(all.len(), 2);
    assert_eq!(all.of_kind("weight").next().unwrap().value, 180.0);
}

#[test]
fn test_recovery_marking_is_idempotent() {
    let mut store = MemoryStore::new();
    let day = d("2025-09-03");
    {
        let mut tracker = Tracker::new(&mut store);
        assert!(tracker.mark_recovery(day));
        assert!(!tracker.mark_recovery(day));
        assert_eq!(tracker.recovery().count(), 1);
        assert!(tracker.unmark_recovery(day));
        assert!(!tracker.unmark_recovery(day));
    }

    let tracked = store.recent_audit("track", 10).unwrap();
    assert_eq!(tracked.len(), 2);
    assert!(tracked.iter().all(|e| e.target == "recovery"));
}

// ---------------------------
// Sessions
// ---------------------------

#[test]
fn test_session_start_stop_records_duration() {
    let mut store = MemoryStore::new();
    let start = at(2025, 9, 1, 7, 0);
    let stop = at(2025, 9, 1, 7, 45);

    SessionLogic::start(&mut store, start).unwrap();
    assert!(matches!(
        SessionLogic::start(&mut store, start),
        Err(AppError::SessionAlreadyOpen(_))
    ));
    assert_eq!(
        SessionLogic::status(&SessionLogic::load(&store), at(2025, 9, 1, 7, 10)),
        Some(600)
    );

    let closed = SessionLogic::stop(&mut store, stop).unwrap();
    assert_eq!(closed.duration, Some(45 * 60));

    let log = SessionLogic::load(&store);
    assert!(log.active.is_none());
    assert_eq!(SessionLogic::total_seconds_on(&log, d("2025-09-01")), 2700);
    assert!(matches!(
        SessionLogic::stop(&mut store, stop),
        Err(AppError::NoOpenSession(_))
    ));
}

#[test]
fn test_fasting_progress_and_target() {
    let mut store = MemoryStore::new();
    let start = at(2025, 9, 1, 8, 0);

    assert!(matches!(
        FastingLogic::start(&mut store, start, 0),
        Err(AppError::InvalidAmount(_))
    ));
    FastingLogic::start(&mut store, start, 16).unwrap();

    let log = FastingLogic::load(&store);
    assert_eq!(FastingLogic::progress(&log, at(2025, 9, 1, 16, 0)), Some(50.0));

    let window = FastingLogic::stop(&mut store, at(2025, 9, 2, 1, 0)).unwrap();
    assert!(window.reached_target(at(2025, 9, 2, 1, 0)));
    assert_eq!(FastingLogic::progress(&FastingLogic::load(&store), start), None);
}

// ---------------------------
// Stats / dashboard
// ---------------------------

#[test]
fn test_stats_report_combines_domains() {
    let mut store = MemoryStore::new();
    let now = at(2025, 9, 10, 20, 0);
    let today = now.date_naive();
    {
        let mut tracker = Tracker::new(&mut store);
        tracker.add_meditation(today, 30.0, now).unwrap();
        tracker.add_workout_reps(today, "pushups", 50).unwrap();
        tracker.add_workout_reps(today, "squats", 50).unwrap();
        tracker.mark_recovery(d("2025-09-09"));
        tracker.set_supplement(today, "creatine", true).unwrap();
        tracker.record_measurement(d("2025-09-01"), "weight", 182.0, "lb").unwrap();
        tracker.record_measurement(today, "weight", 180.0, "lb").unwrap();
    }

    let report = StatsReport::compute(&mut store, &test_config(), now);
    assert!((report.meditation_avg - 30.0 / 7.0).abs() < 1e-9);
    assert_eq!(report.completed_workout_days, 1);
    assert_eq!(report.recovery_percentage, 100.0);
    assert_eq!(report.supplement_streak, 1);
    assert_eq!(report.measurements.len(), 1);
    assert_eq!(report.measurements[0].1.value, 180.0);
}

#[test]
fn test_stats_report_ignores_entries_after_reference_day() {
    let mut store = MemoryStore::new();
    let later = d("2025-09-10");
    {
        let mut tracker = Tracker::new(&mut store);
        tracker.set_supplement(d("2025-09-01"), "creatine", true).unwrap();
        tracker.set_supplement(later, "creatine", false).unwrap();
        tracker.record_measurement(d("2025-08-31"), "weight", 180.0, "lb").unwrap();
        tracker.record_measurement(d("2025-09-01"), "weight", 182.0, "lb").unwrap();
        tracker.record_measurement(later, "weight", 170.0, "lb").unwrap();
        tracker.add_workout_reps(later, "pushups", 50).unwrap();
        tracker.mark_recovery(later);
    }

    let end_of_day = Local.with_ymd_and_hms(2025, 9, 1, 23, 59, 59).single().unwrap();
    let report = StatsReport::compute(&mut store, &test_config(), end_of_day);

    assert_eq!(report.supplement_streak, 1);
    assert_eq!(report.supplement_adherence, 100);
    assert_eq!(report.measurements.len(), 1);
    assert_eq!(report.measurements[0].1.value, 182.0);
    assert_eq!(report.measurements[0].2, Trend::Up);
    assert_eq!(report.completed_workout_days, 0);
    assert_eq!(report.recovery_days, 0);
    assert_eq!(report.recovery_percentage, 0.0);
}

#[test]
fn test_dashboard_views_follow_layout() {
    let mut store = MemoryStore::new();
    let now = at(2025, 9, 10, 9, 0);
    let cfg = test_config();

    Tracker::new(&mut store)
        .add_hydration(now.date_naive(), 32.0)
        .unwrap();
    let widgets = {
        let mut layout = WidgetLayout::initialize(&mut store);
        layout.reorder_widget("hydration", 0).unwrap();
        layout.list_enabled()
    };

    let views = build_views(&mut store, &widgets, &cfg, now).unwrap();
    assert_eq!(views.len(), 7);
    assert_eq!(views[0].id, "hydration");
    assert_eq!(views[0].progress, Some(50.0));
    assert!(views[0].lines[0].contains("Today 32 oz / goal 64 oz"));

    let text = render(&views);
    assert!(text.contains("Daily Quote"));
    assert!(!text.contains("Rest Timer"));
}

#[test]
fn test_greeting_is_shown_once_per_session() {
    let mut session = MemoryStore::new();
    let now = at(2025, 9, 10, 9, 0);

    let first = greet_once(&mut session, now).unwrap();
    assert!(first.starts_with("Good morning"));
    assert!(greet_once(&mut session, now).is_none());
}

#[test]
fn test_greeting_still_shown_when_session_write_fails() {
    let mut session = MemoryStore::read_only();
    let now = at(2025, 9, 10, 15, 0);

    let greeting = greet_once(&mut session, now).unwrap();
    assert!(greeting.starts_with("Good afternoon"));
    assert!(
        session
            .audit_entries()
            .iter()
            .any(|e| e.operation == "storage_error" && e.target == "welcome-shown")
    );
}

#[test]
fn test_timer_without_config_uses_default_rest() {
    let mut store = MemoryStore::new();
    let now = at(2025, 9, 10, 9, 0);

    let mut timer = default_widgets()
        .into_iter()
        .find(|w| w.kind == WidgetType::Timer)
        .unwrap();
    assert_eq!(
        timer.config,
        Some(WidgetConfig::Timer {
            rest_seconds: DEFAULT_REST_SECONDS
        })
    );
    timer.config = None;
    timer.enabled = true;

    let views = build_views(&mut store, &[timer], &test_config(), now).unwrap();
    assert_eq!(views.len(), 1);
    assert!(views[0].lines.iter().any(|l| l == "Rest interval 00:01:30"));
}

#[test]
fn test_quote_is_stable_for_a_day() {
    assert_eq!(quote_of_the_day(100, 0), quote_of_the_day(100, 0));
    assert_ne!(quote_of_the_day(100, 0), quote_of_the_day(101, 0));
    assert_eq!(quote_of_the_day(100, 1), quote_of_the_day(101, 0));
}
