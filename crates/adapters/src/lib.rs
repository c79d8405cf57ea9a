// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! rollcall-adapters: audit sink implementations
//!
//! The core defines the [`rollcall_core::AuditSink`] trait; this crate
//! provides the file-backed sink used by the CLI and a tracing wrapper
//! for consistent observability.

pub mod jsonl;
pub mod traced;

pub use jsonl::JsonlAuditLog;
pub use traced::Traced;
