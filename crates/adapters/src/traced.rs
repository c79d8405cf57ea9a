// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced sink wrapper for consistent observability

use rollcall_core::{AuditEntry, AuditError, AuditSink};

/// Wrapper that adds tracing to any AuditSink
#[derive(Debug, Clone)]
pub struct Traced<S> {
    inner: S,
}

impl<S> Traced<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: AuditSink> AuditSink for Traced<S> {
    fn append(&self, entry: &AuditEntry) -> Result<(), AuditError> {
        let span = tracing::info_span!("audit.append", date = %entry.date, session = %entry.session);
        let _guard = span.enter();

        tracing::info!(reason_len = entry.reason.len(), "appending");
        let result = self.inner.append(entry);

        match &result {
            Ok(()) => tracing::info!("recorded"),
            Err(e) => tracing::error!(error = %e, "append failed"),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
