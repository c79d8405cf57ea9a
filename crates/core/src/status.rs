// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Attendance status values and their display labels

use serde::{Deserialize, Serialize};

/// Exactly one value exists per (student, date, session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Late,
    AbsentExcused,
    AbsentUnexcused,
    /// Initial value: the student has not been recognized or marked yet
    Unrecognized,
}

impl AttendanceStatus {
    /// All statuses in display order
    pub const ALL: [AttendanceStatus; 5] = [
        AttendanceStatus::Present,
        AttendanceStatus::Late,
        AttendanceStatus::AbsentExcused,
        AttendanceStatus::AbsentUnexcused,
        AttendanceStatus::Unrecognized,
    ];

    /// Vietnamese display label used in views and exported reports
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Có mặt",
            AttendanceStatus::Late => "Đi muộn",
            AttendanceStatus::AbsentExcused => "Vắng CP",
            AttendanceStatus::AbsentUnexcused => "Vắng KP",
            AttendanceStatus::Unrecognized => "Chưa nhận diện",
        }
    }

    /// Wire/CLI token, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Late => "late",
            AttendanceStatus::AbsentExcused => "absent_excused",
            AttendanceStatus::AbsentUnexcused => "absent_unexcused",
            AttendanceStatus::Unrecognized => "unrecognized",
        }
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, AttendanceStatus::Unrecognized)
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(AttendanceStatus::Present),
            "late" => Ok(AttendanceStatus::Late),
            "absent_excused" => Ok(AttendanceStatus::AbsentExcused),
            "absent_unexcused" => Ok(AttendanceStatus::AbsentUnexcused),
            "unrecognized" => Ok(AttendanceStatus::Unrecognized),
            other => Err(format!("unknown attendance status: {}", other)),
        }
    }
}
