//! Approval-driven attendance reconciliation specs

use crate::prelude::*;

fn submit(temp: &Project, student: &str, date: &str) -> String {
    let out = temp
        .rollcall()
        .args(&["leave", "submit", student, date, "--reason", "việc gia đình"])
        .passes();
    out.stdout.trim().rsplit(' ').next().unwrap().to_string()
}

#[test]
fn approval_excuses_both_sessions() {
    let temp = Project::empty();
    temp.init_demo(today());
    let date = ymd(today());
    let id = submit(&temp, "HS001", &date);

    temp.rollcall()
        .args(&["leave", "approve", &id, "--by", "GVCN"])
        .passes()
        .stdout_has("Approved");

    for session in ["am", "pm"] {
        temp.rollcall()
            .args(&["report", &date, session])
            .passes()
            .stdout_has("1 excused");
    }
}

#[test]
fn approval_overrides_an_existing_mark() {
    let temp = Project::empty();
    temp.init_demo(today());
    let date = ymd(today());

    temp.rollcall()
        .args(&["mark", &date, "am", "HS002", "present"])
        .passes();
    let id = submit(&temp, "HS002", &date);
    temp.rollcall()
        .args(&["leave", "approve", &id, "--by", "GVCN"])
        .passes();

    temp.rollcall()
        .args(&["report", &date, "am"])
        .passes()
        .stdout_has("0 present")
        .stdout_has("1 excused");
}

#[test]
fn future_leave_cannot_be_approved_yet() {
    let temp = Project::empty();
    temp.init_demo(today());
    let id = submit(&temp, "HS003", &ymd(tomorrow()));

    temp.rollcall()
        .args(&["leave", "approve", &id, "--by", "GVCN"])
        .fails()
        .stderr_has("policy violation");

    // still pending, approvable once the day arrives
    temp.rollcall()
        .args(&["leave", "list", "--status", "pending"])
        .passes()
        .stdout_has(&id);
}

#[test]
fn out_of_window_approval_defers() {
    let temp = Project::empty();
    temp.init_demo(today());
    let past = ymd(last_week());
    let id = submit(&temp, "HS004", &past);

    temp.rollcall()
        .args(&["leave", "approve", &id, "--by", "GVCN"])
        .passes()
        .stdout_has("deferred");

    // loading the target week applies the queued reconciliation
    temp.rollcall().args(&["week", "load", &past]).passes();

    temp.rollcall()
        .args(&["report", &past, "am"])
        .passes()
        .stdout_has("1 excused")
        .stdout_has("Vắng CP");
}

#[test]
fn deferred_entry_applies_only_once() {
    let temp = Project::empty();
    temp.init_demo(today());
    let past = ymd(last_week());
    let id = submit(&temp, "HS005", &past);

    temp.rollcall()
        .args(&["leave", "approve", &id, "--by", "GVCN"])
        .passes();

    temp.rollcall().args(&["week", "load", &past]).passes();
    // bounce away and back: recovery re-derives the excusal from the
    // approved request rather than the drained queue
    temp.rollcall().args(&["week", "load", &ymd(today())]).passes();
    temp.rollcall().args(&["week", "load", &past]).passes();

    temp.rollcall()
        .args(&["report", &past, "pm"])
        .passes()
        .stdout_has("1 excused");
}
