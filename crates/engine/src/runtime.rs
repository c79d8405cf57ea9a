// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine runtime: one class, one week, one logical writer
//!
//! All operations are synchronous and run to completion before the next
//! is accepted. The engine gates mutations through the edit policy,
//! executes the effects core transitions request (logging events,
//! forwarding audit entries to the sink), and keeps the leave registry
//! and the attendance window consistent:
//!
//! - `approve_leave` commits the registry transition and the
//!   reconciliation as a pair; reconciliation itself cannot fail (it
//!   applies, defers, or skips), so no path leaves an approved request
//!   whose attendance outcome was lost.
//! - `recover` replays reconciliation for approved requests whose
//!   in-window attendance does not yet read `absent_excused`, so a
//!   process restart between the two writes heals on startup.

use chrono::NaiveDate;
use rollcall_core::export::{self, SessionStats};
use rollcall_core::policy::{self, DayClass};
use rollcall_core::reconcile::{self, ReconcileOutcome};
use rollcall_core::week::week_start_of;
use rollcall_core::{
    AttendanceError, AttendanceStatus, AuditEntry, AuditSink, Clock, DeferredQueue,
    DeferredReconciliation, Effect, Event, IdGen, LeaveRegistry, LeaveRequest, LeaveStatus,
    RequestId, Roster, Session, SessionRecord, StudentId, WeekStore,
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Session record captured before the first unsaved mutation of a
/// (date, session); becomes the audit entry's prior snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingBaseline {
    pub date: NaiveDate,
    pub session: Session,
    pub prior: SessionRecord,
}

/// The complete persistable state of one class's attendance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineState {
    pub roster: Roster,
    pub week: WeekStore,
    pub registry: LeaveRegistry,
    #[serde(default)]
    pub deferred: DeferredQueue,
    #[serde(default)]
    pub baselines: Vec<PendingBaseline>,
}

/// Orchestrates the attendance window, edit policy, leave registry,
/// reconciliation, and audit sink
pub struct Engine<C: Clock, S: AuditSink, G: IdGen> {
    state: EngineState,
    clock: C,
    audit: S,
    ids: G,
}

impl<C: Clock, S: AuditSink, G: IdGen> Engine<C, S, G> {
    /// Start a fresh week for the roster. `week_start` is normalized to
    /// the Monday of its week.
    pub fn new(roster: Roster, week_start: NaiveDate, clock: C, audit: S, ids: G) -> Self {
        let week = WeekStore::initialize(&roster, week_start);
        Self {
            state: EngineState {
                roster,
                week,
                registry: LeaveRegistry::new(),
                deferred: DeferredQueue::new(),
                baselines: Vec::new(),
            },
            clock,
            audit,
            ids,
        }
    }

    /// Resume from persisted state (call [`Engine::recover`] afterwards)
    pub fn from_state(state: EngineState, clock: C, audit: S, ids: G) -> Self {
        Self {
            state,
            clock,
            audit,
            ids,
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn into_state(self) -> EngineState {
        self.state
    }

    pub fn roster(&self) -> &Roster {
        &self.state.roster
    }

    pub fn week(&self) -> &WeekStore {
        &self.state.week
    }

    pub fn registry(&self) -> &LeaveRegistry {
        &self.state.registry
    }

    pub fn deferred(&self) -> &DeferredQueue {
        &self.state.deferred
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Classify a target date against the clock's current day
    pub fn classify(&self, date: NaiveDate) -> DayClass {
        policy::classify(self.clock.today(), date)
    }

    /// Load the window containing `start`, preserving already-mutated
    /// days that remain inside it and re-applying any reconciliation
    /// deferred for it.
    pub fn load_week(&mut self, start: NaiveDate) -> Result<(), EngineError> {
        let start = week_start_of(start);
        let (next, mut effects) = self.state.week.load_week(&self.state.roster, start);
        self.state.week = next;
        let week = &self.state.week;
        self.state.baselines.retain(|b| week.contains(b.date));

        for entry in self.state.deferred.drain_window(start) {
            if let ReconcileOutcome::Applied {
                store,
                effects: more,
            } = reconcile::apply_leave(&self.state.week, &entry.student_id, entry.leave_date)
            {
                self.state.week = store;
                effects.extend(more);
            }
        }
        self.dispatch(effects)
    }

    /// Restart recovery: replay reconciliation for approved requests
    /// whose loaded attendance does not yet reflect the leave
    pub fn recover(&mut self) -> Result<(), EngineError> {
        let targets: Vec<(StudentId, NaiveDate)> = self
            .state
            .registry
            .approved()
            .iter()
            .map(|r| (r.student_id.clone(), r.leave_date))
            .collect();
        let mut effects = Vec::new();
        for (student_id, leave_date) in targets {
            if let ReconcileOutcome::Applied {
                store,
                effects: more,
            } = reconcile::apply_leave(&self.state.week, &student_id, leave_date)
            {
                self.state.week = store;
                effects.extend(more);
            }
        }
        self.dispatch(effects)
    }

    /// Replace one student's status in one session, policy permitting
    pub fn set_status(
        &mut self,
        date: NaiveDate,
        session: Session,
        student: &StudentId,
        status: AttendanceStatus,
    ) -> Result<(), EngineError> {
        policy::check_mutation(self.classify(date), "edit attendance", date)?;
        let prior = self.state.week.session(date, session)?.clone();
        let (next, effects) = self.state.week.set_status(date, session, student, status)?;
        if !effects.is_empty() && !self.has_baseline(date, session) {
            self.state.baselines.push(PendingBaseline {
                date,
                session,
                prior,
            });
        }
        self.state.week = next;
        self.dispatch(effects)
    }

    /// Save one session's edits.
    ///
    /// Today saves directly; a past date requires a non-empty
    /// justification and appends exactly one audit entry carrying the
    /// pre-edit snapshot; a future date is a policy violation.
    pub fn save(
        &mut self,
        date: NaiveDate,
        session: Session,
        justification: Option<&str>,
    ) -> Result<(), EngineError> {
        let class = self.classify(date);
        policy::check_mutation(class, "save attendance", date)?;
        let current = self.state.week.session(date, session)?.clone();

        if class.requires_justification() {
            let reason = justification
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .ok_or_else(|| {
                    AttendanceError::Validation(
                        "saving a past date requires a written justification".to_string(),
                    )
                })?
                .to_string();
            let prior = self.take_baseline(date, session).unwrap_or(current);
            self.dispatch(vec![
                Effect::RecordAudit(AuditEntry {
                    date,
                    session,
                    reason,
                    prior,
                }),
                Effect::Emit(Event::AuditRecorded { date, session }),
            ])?;
        } else {
            self.take_baseline(date, session);
        }
        Ok(())
    }

    /// Ingest a parent-submitted leave request; no attendance effect
    pub fn submit_leave(
        &mut self,
        student_id: &StudentId,
        leave_date: NaiveDate,
        reason: &str,
        parent_name: &str,
    ) -> Result<LeaveRequest, EngineError> {
        let student = self
            .state
            .roster
            .get(student_id)
            .ok_or_else(|| AttendanceError::NotFound(format!("student {}", student_id)))?
            .clone();
        let id = self.ids.next();
        let (request, effects) =
            self.state
                .registry
                .submit(id, &student, parent_name, leave_date, reason)?;
        self.dispatch(effects)?;
        Ok(request)
    }

    /// Approve a pending request and reconcile its attendance.
    ///
    /// The registry transition and the reconciliation write commit
    /// together as a pair.
    pub fn approve_leave(
        &mut self,
        id: &RequestId,
        approver: &str,
    ) -> Result<LeaveRequest, EngineError> {
        let request = self
            .state
            .registry
            .get(id)
            .ok_or_else(|| AttendanceError::NotFound(format!("leave request {}", id)))?;
        request.ensure_pending()?;
        let leave_date = request.leave_date;
        policy::check_approval(self.classify(leave_date), leave_date)?;

        let (approved, mut effects) = self.state.registry.approve(id, approver)?;
        match reconcile::apply_leave(&self.state.week, &approved.student_id, approved.leave_date) {
            ReconcileOutcome::Applied {
                store,
                effects: more,
            } => {
                self.state.week = store;
                effects.extend(more);
            }
            ReconcileOutcome::AlreadyApplied | ReconcileOutcome::Skipped => {}
            ReconcileOutcome::Deferred => {
                self.state.deferred.push(DeferredReconciliation {
                    student_id: approved.student_id.clone(),
                    leave_date: approved.leave_date,
                });
                effects.push(Effect::Emit(Event::ReconciliationDeferred {
                    student_id: approved.student_id.clone(),
                    date: approved.leave_date,
                }));
            }
        }
        self.dispatch(effects)?;
        Ok(approved)
    }

    /// Reject a pending request; attendance is untouched
    pub fn reject_leave(&mut self, id: &RequestId) -> Result<LeaveRequest, EngineError> {
        let (rejected, effects) = self.state.registry.reject(id)?;
        self.dispatch(effects)?;
        Ok(rejected)
    }

    /// Requests with the given status, submission order preserved
    pub fn requests(&self, status: Option<LeaveStatus>) -> Vec<&LeaveRequest> {
        match status {
            Some(status) => self.state.registry.with_status(status),
            None => self.state.registry.iter().collect(),
        }
    }

    pub fn session_view(
        &self,
        date: NaiveDate,
        session: Session,
    ) -> Result<&SessionRecord, EngineError> {
        Ok(self.state.week.session(date, session)?)
    }

    /// Render one session as the delimited report
    pub fn export_csv(&self, date: NaiveDate, session: Session) -> Result<String, EngineError> {
        let record = self.state.week.session(date, session)?;
        Ok(export::render_csv(record, &self.state.roster)?)
    }

    pub fn stats(&self, date: NaiveDate, session: Session) -> Result<SessionStats, EngineError> {
        let record = self.state.week.session(date, session)?;
        Ok(SessionStats::of(record))
    }

    fn has_baseline(&self, date: NaiveDate, session: Session) -> bool {
        self.state
            .baselines
            .iter()
            .any(|b| b.date == date && b.session == session)
    }

    fn take_baseline(&mut self, date: NaiveDate, session: Session) -> Option<SessionRecord> {
        let idx = self
            .state
            .baselines
            .iter()
            .position(|b| b.date == date && b.session == session)?;
        Some(self.state.baselines.remove(idx).prior)
    }

    fn dispatch(&mut self, effects: Vec<Effect>) -> Result<(), EngineError> {
        for effect in effects {
            match effect {
                Effect::Emit(event) => {
                    tracing::debug!(event = event.name(), ?event, "domain event");
                }
                Effect::RecordAudit(entry) => {
                    self.audit.append(&entry)?;
                    tracing::info!(
                        date = %entry.date,
                        session = %entry.session,
                        "audit entry recorded"
                    );
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
