use predicates::str::contains;

mod common;
use common::{ft, init_db, setup_test_db, temp_out};

#[test]
fn test_workout_add_sums_into_day() {
    let db_path = setup_test_db("workout_add");
    init_db(&db_path);

    ft().args(["--db", &db_path, "workout", "add", "pushups", "20", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("2025-09-01: 20 / 50"));

    ft().args(["--db", &db_path, "workout", "add", "pushups", "15", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("2025-09-01: 35 / 50"));
}

#[test]
fn test_invalid_date_is_rejected() {
    let db_path = setup_test_db("workout_bad_date");
    init_db(&db_path);

    ft().args(["--db", &db_path, "hydration", "add", "8", "--date", "2025-13-45"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_hydration_add_reports_goal() {
    let db_path = setup_test_db("hydration_add");
    init_db(&db_path);

    ft().args(["--db", &db_path, "hydration", "add", "16"])
        .assert()
        .success()
        .stdout(contains("16 / 64 oz"));

    ft().args(["--db", &db_path, "hydration", "add", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));
}

#[test]
fn test_session_start_twice_fails() {
    let db_path = setup_test_db("session_twice");
    init_db(&db_path);

    ft().args(["--db", &db_path, "session", "start"])
        .assert()
        .success()
        .stdout(contains("Workout session started"));

    ft().args(["--db", &db_path, "session", "start"])
        .assert()
        .failure()
        .stderr(contains("already running"));

    ft().args(["--db", &db_path, "session", "stop"])
        .assert()
        .success()
        .stdout(contains("Workout session stopped"));

    ft().args(["--db", &db_path, "session", "stop"])
        .assert()
        .failure()
        .stderr(contains("No workout session is running"));
}

#[test]
fn test_fasting_status_when_idle() {
    let db_path = setup_test_db("fasting_idle");
    init_db(&db_path);

    ft().args(["--db", &db_path, "fasting", "status"])
        .assert()
        .success()
        .stdout(contains("Not fasting."));

    ft().args(["--db", &db_path, "fasting", "start", "--hours", "12"])
        .assert()
        .success()
        .stdout(contains("target 12h"));

    ft().args(["--db", &db_path, "fasting", "status"])
        .assert()
        .success()
        .stdout(contains("of 12h"));
}

#[test]
fn test_stats_after_logging() {
    let db_path = setup_test_db("stats_after_logging");
    init_db(&db_path);

    ft().args(["--db", &db_path, "meditation", "add", "70"])
        .assert()
        .success();
    ft().args(["--db", &db_path, "supplement", "take", "creatine"])
        .assert()
        .success();
    ft().args(["--db", &db_path, "measure", "weight", "180", "--unit", "lb", "--date", "yesterday"])
        .assert()
        .success();
    ft().args(["--db", &db_path, "measure", "weight", "178", "--unit", "lb"])
        .assert()
        .success();

    ft().args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("Meditation (7d avg)"))
        .stdout(contains("10 min"))
        .stdout(contains("current 1 / longest 1 / adherence 100%"))
        .stdout(contains("178lb"))
        .stdout(contains("↓"));
}

#[test]
fn test_dashboard_renders_enabled_widgets() {
    let db_path = setup_test_db("dashboard_render");
    init_db(&db_path);

    ft().args(["--db", &db_path, "hydration", "add", "32"])
        .assert()
        .success();

    ft().args(["--db", &db_path, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Good "))
        .stdout(contains("Today 32 oz / goal 64 oz"))
        .stdout(contains("Daily Quote"));
}

#[test]
fn test_export_json_and_csv() {
    let db_path = setup_test_db("export_json_csv");
    init_db(&db_path);

    ft().args(["--db", &db_path, "cardio", "add", "25", "--date", "2025-09-02"])
        .assert()
        .success();
    ft().args(["--db", &db_path, "recovery", "mark", "--date", "2025-09-03"])
        .assert()
        .success();

    let json_out = temp_out("export_json", "json");
    ft().args(["--db", &db_path, "export", "--format", "json", "--file", &json_out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = std::fs::read_to_string(&json_out).unwrap();
    let snap: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(snap["cardio"]["2025-09-02"], 25.0);
    assert!(snap["dashboard-widgets"].is_array());

    let csv_out = temp_out("export_csv", "csv");
    ft().args(["--db", &db_path, "export", "--format", "csv", "--file", &csv_out])
        .assert()
        .success();

    let content = std::fs::read_to_string(&csv_out).unwrap();
    assert!(content.starts_with("domain,date,item,value"));
    assert!(content.contains("cardio,2025-09-02,minutes,25"));
    assert!(content.contains("recovery,2025-09-03,rest_day,true"));
}

#[test]
fn test_export_refuses_existing_file_without_force() {
    let db_path = setup_test_db("export_existing");
    init_db(&db_path);

    let out = temp_out("export_existing", "json");
    std::fs::write(&out, "keep me").unwrap();

    ft().args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "keep me");

    ft().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert_ne!(std::fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_log_print_lists_operations() {
    let db_path = setup_test_db("log_print");
    init_db(&db_path);

    ft().args(["--db", &db_path, "workout", "add", "squats", "10"])
        .assert()
        .success();

    ft().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("track"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info_check");
    init_db(&db_path);

    ft().args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity OK"));
}
