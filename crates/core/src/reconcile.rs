// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reconciliation of approved leave into the attendance window
//!
//! Approval is authoritative: both sessions of the leave date go to
//! `absent_excused`, overwriting whatever was recorded before, including
//! a conflicting same-day `present` scan. Dates outside the loaded
//! window are deferred, never dropped.

use crate::effect::{Effect, Event};
use crate::roster::StudentId;
use crate::status::AttendanceStatus;
use crate::week::{Session, WeekStore, DAYS_IN_WEEK};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Result of applying one approved leave to the loaded window
#[derive(Debug, Clone)]
pub enum ReconcileOutcome {
    /// Both sessions rewritten to `absent_excused`
    Applied {
        store: WeekStore,
        effects: Vec<Effect>,
    },
    /// Both sessions already read `absent_excused`; nothing to do
    AlreadyApplied,
    /// The leave date is outside the loaded window; queue for later
    Deferred,
    /// The student has no record for that day (e.g. removed from the
    /// active roster); silent no-op
    Skipped,
}

/// Apply an approved leave request to the loaded window.
///
/// Idempotent: re-running for an already-reconciled request reports
/// `AlreadyApplied` and produces no further change.
pub fn apply_leave(
    store: &WeekStore,
    student: &StudentId,
    leave_date: NaiveDate,
) -> ReconcileOutcome {
    let Some(day) = store.day(leave_date) else {
        return ReconcileOutcome::Deferred;
    };
    if !day.am.contains(student) || !day.pm.contains(student) {
        return ReconcileOutcome::Skipped;
    }

    let excused = Some(AttendanceStatus::AbsentExcused);
    if day.am.status(student) == excused && day.pm.status(student) == excused {
        return ReconcileOutcome::AlreadyApplied;
    }

    let mut next = store.clone();
    if let Some(day) = next.day_mut(leave_date) {
        for session in [Session::Am, Session::Pm] {
            day.session_mut(session)
                .set(student.clone(), AttendanceStatus::AbsentExcused);
        }
        day.edited = true;
    }
    let effects = vec![Effect::Emit(Event::ReconciliationApplied {
        student_id: student.clone(),
        date: leave_date,
    })];
    ReconcileOutcome::Applied {
        store: next,
        effects,
    }
}

/// A reconciliation waiting for its week to be loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferredReconciliation {
    pub student_id: StudentId,
    pub leave_date: NaiveDate,
}

/// Insertion-ordered queue of deferred reconciliations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferredQueue {
    entries: Vec<DeferredReconciliation>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an entry; duplicates collapse into one
    pub fn push(&mut self, entry: DeferredReconciliation) {
        if !self.entries.contains(&entry) {
            self.entries.push(entry);
        }
    }

    /// Remove and return the entries covered by the week starting at
    /// `week_start`, preserving queue order. Everything else stays.
    pub fn drain_window(&mut self, week_start: NaiveDate) -> Vec<DeferredReconciliation> {
        let in_window = |e: &DeferredReconciliation| {
            let offset = (e.leave_date - week_start).num_days();
            (0..DAYS_IN_WEEK as i64).contains(&offset)
        };
        let (hit, keep) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(in_window);
        self.entries = keep;
        hit
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeferredReconciliation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
