//! Marking and saving specs

use crate::prelude::*;

#[test]
fn mark_today_then_save_without_reason() {
    let temp = Project::empty();
    temp.init_demo(today());
    let date = ymd(today());

    temp.rollcall()
        .args(&["mark", &date, "am", "HS001", "present"])
        .passes()
        .stdout_has("Marked HS001 present");

    temp.rollcall()
        .args(&["save", &date, "am"])
        .passes()
        .stdout_has(&format!("Saved attendance for {} am", date));

    // today's save is not an audited override
    assert!(!temp.exists("audit.jsonl"));
}

#[test]
fn marks_persist_across_invocations() {
    let temp = Project::empty();
    temp.init_demo(today());
    let date = ymd(today());

    temp.rollcall()
        .args(&["mark", &date, "am", "HS001", "late"])
        .passes();

    temp.rollcall()
        .args(&["report", &date, "am"])
        .passes()
        .stdout_has("HS001")
        .stdout_has("Đi muộn");
}

#[test]
fn sessions_are_independent() {
    let temp = Project::empty();
    temp.init_demo(today());
    let date = ymd(today());

    temp.rollcall()
        .args(&["mark", &date, "am", "HS002", "absent_unexcused"])
        .passes();

    temp.rollcall()
        .args(&["report", &date, "pm"])
        .passes()
        .stdout_lacks("Vắng KP");
}

#[test]
fn past_save_requires_reason() {
    let temp = Project::empty();
    temp.init_demo(yesterday());
    let date = ymd(yesterday());

    temp.rollcall()
        .args(&["mark", &date, "am", "HS003", "present"])
        .passes();

    temp.rollcall()
        .args(&["save", &date, "am"])
        .fails()
        .stderr_has("justification");

    temp.rollcall()
        .args(&["save", &date, "am", "--reason", "teacher correction"])
        .passes();
}

#[test]
fn past_save_appends_one_audit_entry() {
    let temp = Project::empty();
    temp.init_demo(yesterday());
    let date = ymd(yesterday());

    temp.rollcall()
        .args(&["mark", &date, "pm", "HS004", "late"])
        .passes();
    temp.rollcall()
        .args(&["save", &date, "pm", "--reason", "missed roll call"])
        .passes();

    let log = temp.read("audit.jsonl");
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 1);

    let entry: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(entry["date"], date.as_str());
    assert_eq!(entry["session"], "pm");
    assert_eq!(entry["reason"], "missed roll call");
    // the prior snapshot predates the edit
    assert_eq!(entry["prior"]["statuses"]["HS004"], "unrecognized");
}

#[test]
fn whitespace_reason_is_rejected() {
    let temp = Project::empty();
    temp.init_demo(yesterday());
    let date = ymd(yesterday());

    temp.rollcall()
        .args(&["mark", &date, "am", "HS005", "present"])
        .passes();

    temp.rollcall()
        .args(&["save", &date, "am", "--reason", "   "])
        .fails()
        .stderr_has("justification");
}

#[test]
fn remarking_same_status_is_a_no_op() {
    let temp = Project::empty();
    temp.init_demo(today());
    let date = ymd(today());

    temp.rollcall()
        .args(&["mark", &date, "am", "HS001", "present"])
        .passes();
    temp.rollcall()
        .args(&["mark", &date, "am", "HS001", "present"])
        .passes();

    temp.rollcall()
        .args(&["report", &date, "am"])
        .passes()
        .stdout_has("1 present");
}
