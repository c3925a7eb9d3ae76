use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{ft, init_db, position_of, setup_test_db, stored_widgets};

#[test]
fn test_widget_list_shows_enabled_defaults() {
    let db_path = setup_test_db("widget_list_enabled");
    init_db(&db_path);

    ft().args(["--db", &db_path, "widget", "list"])
        .assert()
        .success()
        .stdout(contains("workout-session"))
        .stdout(contains("Daily Quote"))
        .stdout(contains("recent-activity").not())
        .stdout(contains("Rest Timer").not());
}

#[test]
fn test_widget_list_all_includes_disabled() {
    let db_path = setup_test_db("widget_list_all");
    init_db(&db_path);

    ft().args(["--db", &db_path, "widget", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("recent-activity"))
        .stdout(contains("Rest Timer"))
        .stdout(contains("cardio"));
}

#[test]
fn test_widget_move_shifts_neighbours() {
    let db_path = setup_test_db("widget_move");
    init_db(&db_path);

    ft().args(["--db", &db_path, "widget", "move", "hydration", "0"])
        .assert()
        .success()
        .stdout(contains("moved to position 0"));

    let widgets = stored_widgets(&db_path);
    assert_eq!(position_of(&widgets, "hydration"), 0);
    assert_eq!(position_of(&widgets, "workout"), 1);
    assert_eq!(position_of(&widgets, "workout-session"), 2);
    assert_eq!(position_of(&widgets, "meditation"), 3);
}

#[test]
fn test_widget_move_out_of_range_fails() {
    let db_path = setup_test_db("widget_move_invalid");
    init_db(&db_path);

    ft().args(["--db", &db_path, "widget", "move", "quote", "42"])
        .assert()
        .failure()
        .stderr(contains("Invalid widget position 42"));

    let widgets = stored_widgets(&db_path);
    assert_eq!(position_of(&widgets, "quote"), 7);
}

#[test]
fn test_widget_unknown_id_fails() {
    let db_path = setup_test_db("widget_unknown");
    init_db(&db_path);

    ft().args(["--db", &db_path, "widget", "toggle", "nope"])
        .assert()
        .failure()
        .stderr(contains("Widget not found: nope"));
}

#[test]
fn test_widget_toggle_twice_restores_state() {
    let db_path = setup_test_db("widget_toggle");
    init_db(&db_path);

    ft().args(["--db", &db_path, "widget", "toggle", "cardio"])
        .assert()
        .success()
        .stdout(contains("Widget 'cardio' enabled"));

    ft().args(["--db", &db_path, "widget", "list"])
        .assert()
        .success()
        .stdout(contains("cardio"));

    ft().args(["--db", &db_path, "widget", "toggle", "cardio"])
        .assert()
        .success()
        .stdout(contains("Widget 'cardio' disabled"));

    let widgets = stored_widgets(&db_path);
    let cardio = widgets
        .as_array()
        .unwrap()
        .iter()
        .find(|w| w["id"] == "cardio")
        .unwrap();
    assert_eq!(cardio["enabled"], false);
}

#[test]
fn test_widget_update_and_reset() {
    let db_path = setup_test_db("widget_update_reset");
    init_db(&db_path);

    ft().args([
        "--db",
        &db_path,
        "widget",
        "update",
        "quote",
        "--title",
        "Motivation",
        "--size",
        "large",
    ])
    .assert()
    .success();

    ft().args(["--db", &db_path, "widget", "list"])
        .assert()
        .success()
        .stdout(contains("Motivation"))
        .stdout(contains("Daily Quote").not());

    ft().args(["--db", &db_path, "widget", "reset"])
        .assert()
        .success()
        .stdout(contains("restored to defaults"));

    ft().args(["--db", &db_path, "widget", "list"])
        .assert()
        .success()
        .stdout(contains("Daily Quote"));
}

#[test]
fn test_corrupted_layout_falls_back_to_defaults() {
    let db_path = setup_test_db("widget_corrupted");
    init_db(&db_path);

    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES ('dashboard-widgets', '{not json', 'x')
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [],
        )
        .unwrap();
    }

    ft().args(["--db", &db_path, "widget", "list"])
        .assert()
        .success()
        .stdout(contains("workout-session"))
        .stderr(contains("using defaults"));

    let widgets = stored_widgets(&db_path);
    assert_eq!(widgets.as_array().unwrap().len(), 10);
}
