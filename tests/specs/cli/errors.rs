//! CLI error handling specs

use crate::prelude::*;

#[test]
fn commands_require_a_snapshot() {
    let temp = Project::empty();

    temp.rollcall()
        .args(&["week", "show"])
        .fails()
        .stderr_has("rollcall init");
}

#[test]
fn corrupt_snapshot_is_reported() {
    let temp = Project::empty();
    temp.file("rollcall.json", "{not json");

    temp.rollcall()
        .args(&["week", "show"])
        .fails()
        .stderr_has("corrupt");
}

#[test]
fn unknown_status_token_is_rejected() {
    let temp = Project::empty();
    temp.init_demo(today());

    temp.rollcall()
        .args(&["mark", &ymd(today()), "am", "HS001", "attending"])
        .fails()
        .stderr_has("unknown attendance status");
}

#[test]
fn unknown_student_is_not_found() {
    let temp = Project::empty();
    temp.init_demo(today());

    temp.rollcall()
        .args(&["mark", &ymd(today()), "am", "HS999", "present"])
        .fails()
        .stderr_has("not found");
}

#[test]
fn date_outside_window_is_not_found() {
    let temp = Project::empty();
    temp.init_demo(today());
    let outside = monday_of(today()) - chrono::Duration::days(3);

    temp.rollcall()
        .args(&["report", &ymd(outside), "am"])
        .fails()
        .stderr_has("not found");
}

#[test]
fn custom_state_path_is_honored() {
    let temp = Project::empty();

    temp.rollcall()
        .args(&["--state", "class-9a.json", "init", "--demo"])
        .passes();

    assert!(temp.exists("class-9a.json"));
    assert!(!temp.exists("rollcall.json"));

    temp.rollcall()
        .args(&["--state", "class-9a.json", "week", "show"])
        .passes();
}
