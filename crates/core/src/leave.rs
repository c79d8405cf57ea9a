// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Leave request state machine and registry
//!
//! A request is created `pending` and moves exactly once: to `approved`
//! (which triggers reconciliation in the engine) or to `rejected`. Both
//! are terminal. The registry preserves insertion order so chronological
//! display works without re-sorting.

use crate::effect::{Effect, Event};
use crate::error::AttendanceError;
use crate::roster::{Student, StudentId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Unique identifier for a leave request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub String);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RequestId {
    fn from(s: String) -> Self {
        RequestId(s)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        RequestId(s.to_string())
    }
}

/// Generates leave request identifiers
pub trait IdGen: Clone + Send + Sync {
    fn next(&self) -> RequestId;
}

/// UUID-based generator for production use
#[derive(Clone, Default)]
pub struct UuidIdGen;

impl IdGen for UuidIdGen {
    fn next(&self) -> RequestId {
        RequestId(uuid::Uuid::new_v4().to_string())
    }
}

/// Sequential generator for predictable ids in tests
#[derive(Clone)]
pub struct SequentialIdGen {
    prefix: String,
    counter: Arc<AtomicU64>,
}

impl SequentialIdGen {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::new("req")
    }
}

impl IdGen for SequentialIdGen {
    fn next(&self) -> RequestId {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        RequestId(format!("{}-{}", self.prefix, n))
    }
}

/// Lifecycle state of a leave request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    /// Terminal; `approved_by` is set and never cleared
    Approved,
    /// Terminal
    Rejected,
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for LeaveStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(LeaveStatus::Pending),
            "approved" => Ok(LeaveStatus::Approved),
            "rejected" => Ok(LeaveStatus::Rejected),
            other => Err(format!("unknown leave status: {}", other)),
        }
    }
}

/// A parent-submitted request for a student to miss one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: RequestId,
    pub student_id: StudentId,
    pub student_name: String,
    pub parent_name: String,
    pub leave_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub approved_by: Option<String>,
}

impl LeaveRequest {
    pub fn new(
        id: RequestId,
        student: &Student,
        parent_name: impl Into<String>,
        leave_date: NaiveDate,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id,
            student_id: student.id.clone(),
            student_name: student.name.clone(),
            parent_name: parent_name.into(),
            leave_date,
            reason: reason.into(),
            status: LeaveStatus::Pending,
            approved_by: None,
        }
    }

    /// Fail unless the request is still pending
    pub fn ensure_pending(&self) -> Result<(), AttendanceError> {
        if self.status == LeaveStatus::Pending {
            Ok(())
        } else {
            Err(AttendanceError::InvalidTransition {
                id: self.id.clone(),
                status: self.status,
            })
        }
    }

    /// Pure transition to `approved`
    pub fn approve(&self, approver: &str) -> Result<(LeaveRequest, Vec<Effect>), AttendanceError> {
        self.ensure_pending()?;
        let next = LeaveRequest {
            status: LeaveStatus::Approved,
            approved_by: Some(approver.to_string()),
            ..self.clone()
        };
        let effects = vec![Effect::Emit(Event::LeaveApproved {
            id: self.id.clone(),
            approved_by: approver.to_string(),
        })];
        Ok((next, effects))
    }

    /// Pure transition to `rejected`; attendance is untouched
    pub fn reject(&self) -> Result<(LeaveRequest, Vec<Effect>), AttendanceError> {
        self.ensure_pending()?;
        let next = LeaveRequest {
            status: LeaveStatus::Rejected,
            ..self.clone()
        };
        let effects = vec![Effect::Emit(Event::LeaveRejected {
            id: self.id.clone(),
        })];
        Ok((next, effects))
    }
}

/// Owns the lifecycle of all leave requests, independent of attendance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRegistry {
    requests: Vec<LeaveRequest>,
}

impl LeaveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `pending` request. No attendance side effect.
    pub fn submit(
        &mut self,
        id: RequestId,
        student: &Student,
        parent_name: impl Into<String>,
        leave_date: NaiveDate,
        reason: &str,
    ) -> Result<(LeaveRequest, Vec<Effect>), AttendanceError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(AttendanceError::Validation(
                "leave request reason must not be empty".to_string(),
            ));
        }
        if self.get(&id).is_some() {
            return Err(AttendanceError::Validation(format!(
                "leave request id {} already exists",
                id
            )));
        }
        let request = LeaveRequest::new(id, student, parent_name, leave_date, reason);
        let effects = vec![Effect::Emit(Event::LeaveSubmitted {
            id: request.id.clone(),
            student_id: request.student_id.clone(),
            leave_date: request.leave_date,
        })];
        self.requests.push(request.clone());
        Ok((request, effects))
    }

    pub fn get(&self, id: &RequestId) -> Option<&LeaveRequest> {
        self.requests.iter().find(|r| &r.id == id)
    }

    fn index_of(&self, id: &RequestId) -> Result<usize, AttendanceError> {
        self.requests
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| AttendanceError::NotFound(format!("leave request {}", id)))
    }

    /// Transition a pending request to `approved`
    pub fn approve(
        &mut self,
        id: &RequestId,
        approver: &str,
    ) -> Result<(LeaveRequest, Vec<Effect>), AttendanceError> {
        let idx = self.index_of(id)?;
        let (next, effects) = self.requests[idx].approve(approver)?;
        self.requests[idx] = next.clone();
        Ok((next, effects))
    }

    /// Transition a pending request to `rejected`
    pub fn reject(&mut self, id: &RequestId) -> Result<(LeaveRequest, Vec<Effect>), AttendanceError> {
        let idx = self.index_of(id)?;
        let (next, effects) = self.requests[idx].reject()?;
        self.requests[idx] = next.clone();
        Ok((next, effects))
    }

    /// All requests in submission order
    pub fn iter(&self) -> std::slice::Iter<'_, LeaveRequest> {
        self.requests.iter()
    }

    /// Requests with the given status, submission order preserved
    pub fn with_status(&self, status: LeaveStatus) -> Vec<&LeaveRequest> {
        self.requests.iter().filter(|r| r.status == status).collect()
    }

    pub fn pending(&self) -> Vec<&LeaveRequest> {
        self.with_status(LeaveStatus::Pending)
    }

    pub fn approved(&self) -> Vec<&LeaveRequest> {
        self.with_status(LeaveStatus::Approved)
    }

    pub fn rejected(&self) -> Vec<&LeaveRequest> {
        self.with_status(LeaveStatus::Rejected)
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

#[cfg(test)]
#[path = "leave_tests.rs"]
mod tests;
