//! Snapshot initialization specs

use crate::prelude::*;

#[test]
fn init_demo_creates_snapshot() {
    let temp = Project::empty();

    temp.rollcall()
        .args(&["init", "--demo"])
        .passes()
        .stdout_has("Initialized week of")
        .stdout_has("8 students");

    assert!(temp.exists("rollcall.json"));
}

#[test]
fn init_reports_the_monday_of_the_week() {
    let temp = Project::empty();

    temp.rollcall()
        .args(&["init", "--demo", "--week-of", &ymd(today())])
        .passes()
        .stdout_has(&format!("week of {}", ymd(monday_of(today()))));
}

#[test]
fn init_from_class_file() {
    let temp = Project::empty();
    temp.file(
        "class.json",
        r#"[{"id": "HS010", "name": "Ngô Thị Mai"}, {"id": "HS011", "name": "Đỗ Văn Nam"}]"#,
    );

    temp.rollcall()
        .args(&["init", "--class-file", "class.json"])
        .passes()
        .stdout_has("2 students");
}

#[test]
fn init_refuses_duplicate_student_ids() {
    let temp = Project::empty();
    temp.file(
        "class.json",
        r#"[{"id": "HS010", "name": "Ngô Thị Mai"}, {"id": "HS010", "name": "Đỗ Văn Nam"}]"#,
    );

    temp.rollcall()
        .args(&["init", "--class-file", "class.json"])
        .fails()
        .stderr_has("HS010");

    assert!(!temp.exists("rollcall.json"));
}

#[test]
fn init_requires_a_roster_source() {
    let temp = Project::empty();

    temp.rollcall()
        .args(&["init"])
        .fails()
        .stderr_has("--class-file or --demo");
}

#[test]
fn init_refuses_to_overwrite() {
    let temp = Project::empty();
    temp.init_demo(today());

    temp.rollcall()
        .args(&["init", "--demo"])
        .fails()
        .stderr_has("already exists");
}
