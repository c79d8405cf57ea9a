// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Audit sink for past-date edit justifications
//!
//! The sink is an external collaborator: the core produces one
//! [`AuditEntry`] per past-date save and hands it over. Implementations
//! live behind the [`AuditSink`] trait; the in-memory log here doubles
//! as the test fake and the default sink.

use crate::week::{Session, SessionRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Justification record for a past-date edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub date: NaiveDate,
    pub session: Session,
    pub reason: String,
    /// The session record as it stood before the first unsaved mutation
    pub prior: SessionRecord,
}

/// Errors from audit sink implementations
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("audit sink io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("audit sink encoding error: {0}")]
    Encode(String),
}

/// Receives justification records for past-date edits
pub trait AuditSink: Send + Sync {
    fn append(&self, entry: &AuditEntry) -> Result<(), AuditError>;
}

/// Shared in-memory audit log
#[derive(Clone, Default)]
pub struct MemoryAuditLog {
    entries: Arc<Mutex<Vec<AuditEntry>>>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded entries, in append order
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for MemoryAuditLog {
    fn append(&self, entry: &AuditEntry) -> Result<(), AuditError> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(entry.clone());
        Ok(())
    }
}
