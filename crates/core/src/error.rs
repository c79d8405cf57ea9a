// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for attendance operations
//!
//! Every error here is local and recoverable: the caller surfaces it and
//! retries or re-prompts. Nothing in this crate aborts the process.

use crate::leave::{LeaveStatus, RequestId};
use crate::policy::DayClass;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttendanceError {
    /// A mutation was attempted against a disallowed temporal state.
    #[error("policy violation: {action} is not permitted for {class} date {date}")]
    PolicyViolation {
        action: String,
        class: DayClass,
        date: NaiveDate,
    },

    /// Missing justification on a past-date save, empty leave reason, or
    /// other recoverable input problem. No state is mutated.
    #[error("validation error: {0}")]
    Validation(String),

    /// A date outside the loaded window, or an unknown student/request id.
    #[error("not found: {0}")]
    NotFound(String),

    /// A leave request in a terminal state was asked to transition.
    #[error("invalid transition: leave request {id} is already {status}")]
    InvalidTransition { id: RequestId, status: LeaveStatus },
}
