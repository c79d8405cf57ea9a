//! CSV export specs

use crate::prelude::*;

#[test]
fn export_writes_the_dated_report() {
    let temp = Project::empty();
    temp.init_demo(today());
    let date = ymd(today());

    temp.rollcall()
        .args(&["export", &date, "am"])
        .passes()
        .stdout_has("Exported 8 rows")
        .stdout_has(&format!("Bao_cao_diem_danh_{}.csv", date));

    assert!(temp.exists(&format!("Bao_cao_diem_danh_{}.csv", date)));
}

#[test]
fn export_starts_with_bom_and_header() {
    let temp = Project::empty();
    temp.init_demo(today());
    let date = ymd(today());

    temp.rollcall()
        .args(&["export", &date, "am", "--out", "report.csv"])
        .passes();

    let csv = temp.read("report.csv");
    assert!(csv.starts_with('\u{feff}'));
    assert_eq!(
        csv.lines().next().unwrap().trim_start_matches('\u{feff}'),
        "STT,Họ và tên,Mã HS,Trạng thái"
    );
}

#[test]
fn export_rows_carry_labels_and_quoted_names() {
    let temp = Project::empty();
    temp.init_demo(today());
    let date = ymd(today());

    temp.rollcall()
        .args(&["mark", &date, "am", "HS001", "present"])
        .passes();
    temp.rollcall()
        .args(&["export", &date, "am", "--out", "report.csv"])
        .passes();

    let csv = temp.read("report.csv");
    assert!(csv.contains("\"Nguyễn Văn An\",HS001,Có mặt"));
    assert!(csv.contains("Chưa nhận diện"));
}

#[test]
fn export_orders_unmarked_first() {
    let temp = Project::empty();
    temp.init_demo(today());
    let date = ymd(today());

    // HS008 Bùi Văn Hùng sorts first by name but drops below every
    // unmarked student once marked
    temp.rollcall()
        .args(&["mark", &date, "am", "HS008", "present"])
        .passes();
    temp.rollcall()
        .args(&["export", &date, "am", "--out", "report.csv"])
        .passes();

    let csv = temp.read("report.csv");
    let last = csv.lines().last().unwrap();
    assert!(last.starts_with("8,"));
    assert!(last.contains("HS008"));
}
