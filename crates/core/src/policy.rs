// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Temporal edit policy
//!
//! Pure classification of a target date against "today", by calendar-day
//! equality (a date earlier in the same day is `Today`, not `Past`), and
//! the permission table derived from it:
//!
//! | class  | mutation | save                        | leave approval |
//! |--------|----------|-----------------------------|----------------|
//! | Future | no       | no                          | no             |
//! | Today  | yes      | direct, no justification    | yes            |
//! | Past   | yes      | requires justification + audit | yes         |

use crate::error::AttendanceError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Classification of a target date relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayClass {
    Future,
    Today,
    Past,
}

impl DayClass {
    /// Attendance for unstarted days cannot exist
    pub fn allows_mutation(self) -> bool {
        !matches!(self, DayClass::Future)
    }

    /// Retroactive corrections must be explainable
    pub fn requires_justification(self) -> bool {
        matches!(self, DayClass::Past)
    }

    pub fn allows_approval(self) -> bool {
        !matches!(self, DayClass::Future)
    }
}

impl std::fmt::Display for DayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DayClass::Future => "future",
            DayClass::Today => "today",
            DayClass::Past => "past",
        };
        write!(f, "{}", s)
    }
}

/// Classify `target` against `today` by calendar-day comparison
pub fn classify(today: NaiveDate, target: NaiveDate) -> DayClass {
    match target.cmp(&today) {
        std::cmp::Ordering::Greater => DayClass::Future,
        std::cmp::Ordering::Equal => DayClass::Today,
        std::cmp::Ordering::Less => DayClass::Past,
    }
}

/// Reject disallowed attendance mutations (and saves) on `date`
pub fn check_mutation(
    class: DayClass,
    action: &str,
    date: NaiveDate,
) -> Result<(), AttendanceError> {
    if class.allows_mutation() {
        Ok(())
    } else {
        Err(AttendanceError::PolicyViolation {
            action: action.to_string(),
            class,
            date,
        })
    }
}

/// Reject leave approval when the leave date is not yet editable
pub fn check_approval(class: DayClass, date: NaiveDate) -> Result<(), AttendanceError> {
    if class.allows_approval() {
        Ok(())
    } else {
        Err(AttendanceError::PolicyViolation {
            action: "approve leave".to_string(),
            class,
            date,
        })
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
