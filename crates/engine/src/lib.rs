// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! rollcall-engine: orchestrates the attendance state machines
//!
//! The engine owns one class's state for one week at a time, gates every
//! mutation through the temporal edit policy, executes the effects the
//! core transitions request, and keeps the registry and attendance in
//! step when leave requests are approved.

pub mod error;
pub mod runtime;

pub use error::EngineError;
pub use runtime::{Engine, EngineState, PendingBaseline};
