// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects and events requested by domain transitions
//!
//! State machines stay pure: a transition returns the next snapshot plus
//! the side effects it wants performed. The engine executes them.

use crate::audit::AuditEntry;
use crate::leave::RequestId;
use crate::roster::StudentId;
use crate::status::AttendanceStatus;
use crate::week::Session;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Side effects requested by transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Emit an event for observers (logged by the engine)
    Emit(Event),
    /// Append a justification record to the audit sink
    RecordAudit(AuditEntry),
}

/// Events emitted by domain transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    WeekLoaded {
        week_start: NaiveDate,
    },
    StatusChanged {
        date: NaiveDate,
        session: Session,
        student_id: StudentId,
        status: AttendanceStatus,
    },
    LeaveSubmitted {
        id: RequestId,
        student_id: StudentId,
        leave_date: NaiveDate,
    },
    LeaveApproved {
        id: RequestId,
        approved_by: String,
    },
    LeaveRejected {
        id: RequestId,
    },
    ReconciliationApplied {
        student_id: StudentId,
        date: NaiveDate,
    },
    ReconciliationDeferred {
        student_id: StudentId,
        date: NaiveDate,
    },
    AuditRecorded {
        date: NaiveDate,
        session: Session,
    },
}

impl Event {
    /// Stable event name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Event::WeekLoaded { .. } => "week.loaded",
            Event::StatusChanged { .. } => "attendance.status_changed",
            Event::LeaveSubmitted { .. } => "leave.submitted",
            Event::LeaveApproved { .. } => "leave.approved",
            Event::LeaveRejected { .. } => "leave.rejected",
            Event::ReconciliationApplied { .. } => "reconcile.applied",
            Event::ReconciliationDeferred { .. } => "reconcile.deferred",
            Event::AuditRecorded { .. } => "audit.recorded",
        }
    }
}
