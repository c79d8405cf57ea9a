// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot persistence for the CLI
//!
//! The whole engine state lives in a single pretty-printed JSON file.
//! Every command loads it, mutates in memory, and writes it back.

use anyhow::{Context, Result};
use rollcall_engine::EngineState;
use std::path::Path;

pub fn load(path: &Path) -> Result<EngineState> {
    let text = std::fs::read_to_string(path).with_context(|| {
        format!(
            "no class snapshot at {} (run `rollcall init` first)",
            path.display()
        )
    })?;
    serde_json::from_str(&text)
        .with_context(|| format!("corrupt class snapshot at {}", path.display()))
}

pub fn save(path: &Path, state: &EngineState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write snapshot to {}", path.display()))
}

pub fn exists(path: &Path) -> bool {
    path.exists()
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
