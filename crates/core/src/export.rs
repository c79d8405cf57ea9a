// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Report export and per-session statistics
//!
//! The delimited export matches the reporting collaborator's contract:
//! UTF-8 with byte-order mark, comma-separated, quoted names, Vietnamese
//! status labels. Display ordering puts unrecognized students first so
//! they surface at the top of the list, then sorts by name under `vi`
//! collation.

use crate::roster::{Roster, Student};
use crate::status::AttendanceStatus;
use crate::week::SessionRecord;
use chrono::NaiveDate;
use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::locale;
use serde::Serialize;
use thiserror::Error;

/// Header row of the exported report
pub const EXPORT_HEADER: &str = "STT,Họ và tên,Mã HS,Trạng thái";

const BOM: &str = "\u{feff}";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("vi collation unavailable: {0}")]
    Collator(String),
}

fn vi_collator() -> Result<Collator, ExportError> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(&locale!("vi").into(), options)
        .map_err(|e| ExportError::Collator(e.to_string()))
}

/// Students of a session in display order.
///
/// Unrecognized entries sort before all others; the rest order by name
/// under locale-aware comparison, with the student id as tiebreaker.
pub fn display_order<'a>(
    record: &SessionRecord,
    roster: &'a Roster,
) -> Result<Vec<(&'a Student, AttendanceStatus)>, ExportError> {
    let collator = vi_collator()?;
    let mut rows: Vec<_> = roster
        .iter()
        .filter_map(|s| record.status(&s.id).map(|status| (s, status)))
        .collect();
    rows.sort_by(|(a, sa), (b, sb)| {
        sb.is_unrecognized()
            .cmp(&sa.is_unrecognized())
            .then_with(|| collator.compare(&a.name, &b.name))
            .then_with(|| a.id.0.cmp(&b.id.0))
    });
    Ok(rows)
}

/// Render one session as the delimited report text
pub fn render_csv(record: &SessionRecord, roster: &Roster) -> Result<String, ExportError> {
    let rows = display_order(record, roster)?;
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(EXPORT_HEADER.to_string());
    for (i, (student, status)) in rows.iter().enumerate() {
        lines.push(format!(
            "{},\"{}\",{},{}",
            i + 1,
            student.name,
            student.id,
            status.label()
        ));
    }
    Ok(format!("{}{}", BOM, lines.join("\n")))
}

/// Download-style file name for a day's report
pub fn export_file_name(date: NaiveDate) -> String {
    format!("Bao_cao_diem_danh_{}.csv", date.format("%Y-%m-%d"))
}

/// Case-insensitive name/id substring match for report filtering
pub fn matches_query(student: &Student, query: &str) -> bool {
    let q = query.to_lowercase();
    student.name.to_lowercase().contains(&q) || student.id.0.to_lowercase().contains(&q)
}

/// Per-status headcount for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub total: usize,
    pub present: usize,
    pub late: usize,
    pub absent_excused: usize,
    pub absent_unexcused: usize,
    pub unrecognized: usize,
}

impl SessionStats {
    pub fn of(record: &SessionRecord) -> Self {
        let mut stats = SessionStats {
            total: record.len(),
            ..SessionStats::default()
        };
        for (_, status) in record.iter() {
            match status {
                AttendanceStatus::Present => stats.present += 1,
                AttendanceStatus::Late => stats.late += 1,
                AttendanceStatus::AbsentExcused => stats.absent_excused += 1,
                AttendanceStatus::AbsentUnexcused => stats.absent_unexcused += 1,
                AttendanceStatus::Unrecognized => stats.unrecognized += 1,
            }
        }
        stats
    }

    pub fn absent_total(&self) -> usize {
        self.absent_excused + self.absent_unexcused
    }
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
