// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine runtime

use rollcall_core::{AttendanceError, AuditError, ExportError};
use thiserror::Error;

/// Errors surfaced by engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Domain(#[from] AttendanceError),
    #[error("audit error: {0}")]
    Audit(#[from] AuditError),
    #[error("export error: {0}")]
    Export(#[from] ExportError),
}

impl EngineError {
    /// The underlying domain error, if any
    pub fn domain(&self) -> Option<&AttendanceError> {
        match self {
            EngineError::Domain(e) => Some(e),
            _ => None,
        }
    }
}
