use predicates::str::contains;
use std::fs;
use tempfile::tempdir;

mod common;
use common::{ow, read_data, run_session};

#[test]
fn first_run_creates_zeroed_data_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("overwork.json");

    run_session(&file, "").success();

    let data = read_data(&file);
    assert_eq!(data["need_work"], 0);
    assert_eq!(data["overwork"], 0);
    assert_eq!(data["history"].as_array().unwrap().len(), 0);
}

#[test]
fn record_working_hours_persists_a_record() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("overwork.json");

    run_session(&file, "1\n09:15\n\n")
        .success()
        .stdout(contains("Worked hours are recorded."));

    let data = read_data(&file);
    let history = data["history"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["worked"], 555);
    assert_eq!(history[0]["need_work"], 0);
    assert_eq!(history[0]["overwork"], 555);
    assert_eq!(data["overwork"], 555);
}

#[test]
fn change_need_work_persists_the_quota() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("overwork.json");

    run_session(&file, "2\n08:00\n\n")
        .success()
        .stdout(contains("Today's need work time is changed."));

    let data = read_data(&file);
    assert_eq!(data["need_work"], 480);
    assert_eq!(data["history"].as_array().unwrap().len(), 0);
}

#[test]
fn same_day_resubmission_replaces_the_record() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("overwork.json");

    run_session(&file, "1\n08:00\n\n1\n10:00\n\n").success();

    let data = read_data(&file);
    let history = data["history"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["worked"], 600);
    assert_eq!(data["overwork"], 600);
}

#[test]
fn quota_applies_to_records_created_after_it() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("overwork.json");

    run_session(&file, "2\n08:00\n\n1\n07:00\n\n").success();

    let data = read_data(&file);
    let history = data["history"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["need_work"], 480);
    assert_eq!(history[0]["overwork"], -60);
    assert_eq!(data["overwork"], -60);
}

#[test]
fn malformed_durations_reprompt_until_valid() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("overwork.json");

    run_session(&file, "1\nabc\n25:00\n09:60\n08:30\n\n")
        .success()
        .stdout(contains("Wrong format! Input in this format: HH:MM"))
        .stdout(contains(
            "Wrong format! HH must be from 00 to 24 and MM from 00 to 59.",
        ));

    let data = read_data(&file);
    assert_eq!(data["history"][0]["worked"], 510);
}

#[test]
fn a_full_24_hour_day_is_accepted() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("overwork.json");

    run_session(&file, "1\n24:00\n\n").success();

    let data = read_data(&file);
    assert_eq!(data["history"][0]["worked"], 1440);
}

#[test]
fn unknown_menu_option_reprompts() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("overwork.json");

    run_session(&file, "9\nnope\n")
        .success()
        .stdout(contains("Invalid option, please try again."));
}

#[test]
fn history_table_shows_records_and_day_gaps() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("overwork.json");

    // Two records three calendar days apart: the table gets two blank rows.
    let seeded = r#"{
  "need_work": 480,
  "overwork": 135,
  "history": [
    { "date": "2026-08-03T12:00:00+00:00", "worked": 555, "need_work": 480, "overwork": 75 },
    { "date": "2026-08-06T12:00:00+00:00", "worked": 540, "need_work": 480, "overwork": 60 }
  ]
}"#;
    fs::write(&file, seeded).unwrap();

    run_session(&file, "3\n\n")
        .success()
        .stdout(contains("| Date  | Worked | Need work | Overwork |"))
        .stdout(contains("09:15"))
        .stdout(contains("09:00"))
        .stdout(contains("|       |        |           |          |"));
}

#[test]
fn stray_arguments_are_rejected() {
    ow().arg("unexpected").assert().failure();
}

#[test]
fn version_flag_prints_and_exits() {
    ow().arg("--version")
        .assert()
        .success()
        .stdout(contains("overwork"));
}
