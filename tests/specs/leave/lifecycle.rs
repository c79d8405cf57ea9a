//! Leave request lifecycle specs

use crate::prelude::*;

fn submit(temp: &Project, student: &str, date: &str) -> String {
    let out = temp
        .rollcall()
        .args(&[
            "leave", "submit", student, date, "--reason", "khám bệnh", "--parent", "Phụ huynh",
        ])
        .passes()
        .stdout_has("Submitted leave request");
    out.stdout
        .trim()
        .rsplit(' ')
        .next()
        .unwrap()
        .to_string()
}

#[test]
fn submit_does_not_touch_attendance() {
    let temp = Project::empty();
    temp.init_demo(today());
    let date = ymd(today());

    submit(&temp, "HS001", &date);

    temp.rollcall()
        .args(&["report", &date, "am"])
        .passes()
        .stdout_has("8 unmarked of 8");
}

#[test]
fn submit_requires_known_student() {
    let temp = Project::empty();
    temp.init_demo(today());

    temp.rollcall()
        .args(&["leave", "submit", "HS999", &ymd(today()), "--reason", "khám bệnh"])
        .fails()
        .stderr_has("not found");
}

#[test]
fn submit_requires_a_reason() {
    let temp = Project::empty();
    temp.init_demo(today());

    temp.rollcall()
        .args(&["leave", "submit", "HS001", &ymd(today()), "--reason", "  "])
        .fails()
        .stderr_has("validation");
}

#[test]
fn empty_list_prints_a_placeholder() {
    let temp = Project::empty();
    temp.init_demo(today());

    temp.rollcall()
        .args(&["leave", "list"])
        .passes()
        .stdout_eq("No leave requests\n");
}

#[test]
fn list_filters_by_status() {
    let temp = Project::empty();
    temp.init_demo(today());
    let date = ymd(today());

    let first = submit(&temp, "HS001", &date);
    let second = submit(&temp, "HS002", &date);
    temp.rollcall()
        .args(&["leave", "approve", &first, "--by", "GVCN"])
        .passes();

    temp.rollcall()
        .args(&["leave", "list", "--status", "pending"])
        .passes()
        .stdout_has(&second)
        .stdout_lacks(&first);

    temp.rollcall()
        .args(&["leave", "list", "--status", "approved"])
        .passes()
        .stdout_has(&first)
        .stdout_lacks(&second);
}

#[test]
fn approve_is_terminal() {
    let temp = Project::empty();
    temp.init_demo(today());
    let id = submit(&temp, "HS003", &ymd(today()));

    temp.rollcall()
        .args(&["leave", "approve", &id, "--by", "GVCN"])
        .passes();

    temp.rollcall()
        .args(&["leave", "approve", &id, "--by", "GVCN"])
        .fails()
        .stderr_has("already approved");

    temp.rollcall()
        .args(&["leave", "reject", &id])
        .fails()
        .stderr_has("already approved");
}

#[test]
fn reject_leaves_attendance_untouched() {
    let temp = Project::empty();
    temp.init_demo(today());
    let date = ymd(today());
    let id = submit(&temp, "HS004", &date);

    temp.rollcall()
        .args(&["leave", "reject", &id])
        .passes()
        .stdout_has("Rejected");

    temp.rollcall()
        .args(&["report", &date, "am"])
        .passes()
        .stdout_has("8 unmarked of 8");
}

#[test]
fn unknown_request_id_is_not_found() {
    let temp = Project::empty();
    temp.init_demo(today());

    temp.rollcall()
        .args(&["leave", "approve", "no-such-id", "--by", "GVCN"])
        .fails()
        .stderr_has("not found");
}
