// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! rollcall-core: Core library for the rollcall attendance tool
//!
//! This crate provides:
//! - Pure state machines for the weekly attendance window and leave requests
//! - The temporal edit policy (future immutable, today free, past audited)
//! - Reconciliation of approved leave into the attendance window
//! - The audit sink trait for past-date edit justifications
//! - CSV export and per-session statistics

pub mod clock;
pub mod error;

pub mod audit;
pub mod export;

// Domain state (order matters for dependencies)
pub mod roster;
pub mod status;
pub mod week;
pub mod policy;
pub mod effect;
pub mod leave;
pub mod reconcile;

// Re-exports
pub use audit::{AuditEntry, AuditError, AuditSink, MemoryAuditLog};
pub use clock::{Clock, FakeClock, SystemClock};
pub use effect::{Effect, Event};
pub use error::AttendanceError;
pub use export::{ExportError, SessionStats};
pub use leave::{
    IdGen, LeaveRegistry, LeaveRequest, LeaveStatus, RequestId, SequentialIdGen, UuidIdGen,
};
pub use policy::DayClass;
pub use reconcile::{DeferredQueue, DeferredReconciliation, ReconcileOutcome};
pub use roster::{Roster, Student, StudentId};
pub use status::AttendanceStatus;
pub use week::{week_start_of, DayRecord, Session, SessionRecord, WeekStore};
