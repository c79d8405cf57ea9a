// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod init;
pub mod leave;
pub mod mark;
pub mod report;
pub mod week;

use anyhow::Result;
use std::path::PathBuf;

use rollcall_adapters::{JsonlAuditLog, Traced};
use rollcall_core::{SystemClock, UuidIdGen};
use rollcall_engine::Engine;

use crate::output::OutputFormat;
use crate::state;

pub type CliEngine = Engine<SystemClock, Traced<JsonlAuditLog>, UuidIdGen>;

/// Shared command environment: paths from the global flags plus the
/// selected output format
pub struct Context {
    pub state_path: PathBuf,
    pub audit_path: PathBuf,
    pub format: OutputFormat,
}

impl Context {
    /// Load the snapshot and run restart recovery before handing the
    /// engine to the command
    pub fn open(&self) -> Result<CliEngine> {
        let snapshot = state::load(&self.state_path)?;
        let mut engine = Engine::from_state(snapshot, SystemClock, self.audit_sink(), UuidIdGen);
        engine.recover()?;
        Ok(engine)
    }

    pub fn persist(&self, engine: CliEngine) -> Result<()> {
        state::save(&self.state_path, &engine.into_state())
    }

    pub fn audit_sink(&self) -> Traced<JsonlAuditLog> {
        Traced::new(JsonlAuditLog::new(self.audit_path.clone()))
    }
}
