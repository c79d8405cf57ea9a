// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Leave request commands

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use rollcall_core::{LeaveRequest, LeaveStatus, RequestId, StudentId};
use serde::Serialize;
use std::fmt;

use super::Context;
use crate::output;

#[derive(Args)]
pub struct LeaveArgs {
    #[command(subcommand)]
    pub command: LeaveCommand,
}

#[derive(Subcommand)]
pub enum LeaveCommand {
    /// Submit a parent leave request
    Submit {
        /// Student id
        student_id: String,
        /// Day the student will be absent
        date: NaiveDate,
        /// Why the student will be absent
        #[arg(long)]
        reason: String,
        /// Name of the requesting parent
        #[arg(long, default_value = "")]
        parent: String,
    },
    /// List requests, newest last
    List {
        /// Only show requests with this status
        #[arg(long)]
        status: Option<LeaveStatus>,
    },
    /// Approve a pending request and reconcile its attendance
    Approve {
        /// Request id
        id: String,
        /// Who is approving
        #[arg(long = "by")]
        approver: String,
    },
    /// Reject a pending request
    Reject {
        /// Request id
        id: String,
    },
}

#[derive(Serialize)]
struct RequestInfo {
    id: String,
    student_id: String,
    student_name: String,
    leave_date: NaiveDate,
    status: String,
    reason: String,
    approved_by: Option<String>,
}

impl From<&LeaveRequest> for RequestInfo {
    fn from(r: &LeaveRequest) -> Self {
        Self {
            id: r.id.to_string(),
            student_id: r.student_id.to_string(),
            student_name: r.student_name.clone(),
            leave_date: r.leave_date,
            status: r.status.to_string(),
            reason: r.reason.clone(),
            approved_by: r.approved_by.clone(),
        }
    }
}

impl fmt::Display for RequestInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<38} {} {:<8} {:<6} {}: {}",
            self.id, self.leave_date, self.status, self.student_id, self.student_name, self.reason
        )
    }
}

pub fn handle(ctx: &Context, command: LeaveCommand) -> Result<()> {
    match command {
        LeaveCommand::Submit {
            student_id,
            date,
            reason,
            parent,
        } => submit(ctx, student_id, date, reason, parent),
        LeaveCommand::List { status } => list(ctx, status),
        LeaveCommand::Approve { id, approver } => approve(ctx, id, approver),
        LeaveCommand::Reject { id } => reject(ctx, id),
    }
}

fn submit(
    ctx: &Context,
    student_id: String,
    date: NaiveDate,
    reason: String,
    parent: String,
) -> Result<()> {
    let mut engine = ctx.open()?;
    let student = StudentId::from(student_id);
    let request = engine.submit_leave(&student, date, &reason, &parent)?;
    let id = request.id.clone();
    ctx.persist(engine)?;

    println!("Submitted leave request {}", id);
    Ok(())
}

fn list(ctx: &Context, status: Option<LeaveStatus>) -> Result<()> {
    let engine = ctx.open()?;
    let rows: Vec<RequestInfo> = engine
        .requests(status)
        .into_iter()
        .map(RequestInfo::from)
        .collect();

    output::print_list(&rows, "No leave requests", ctx.format);
    ctx.persist(engine)
}

fn approve(ctx: &Context, id: String, approver: String) -> Result<()> {
    let mut engine = ctx.open()?;
    let queued = engine.deferred().len();
    let request = engine.approve_leave(&RequestId::from(id), &approver)?;
    let deferred = engine.deferred().len() > queued;
    ctx.persist(engine)?;

    println!(
        "Approved {} for {} on {}",
        request.id, request.student_name, request.leave_date
    );
    if deferred {
        println!("Attendance update deferred until that week is loaded");
    }
    Ok(())
}

fn reject(ctx: &Context, id: String) -> Result<()> {
    let mut engine = ctx.open()?;
    let request = engine.reject_leave(&RequestId::from(id))?;
    ctx.persist(engine)?;

    println!("Rejected {}", request.id);
    Ok(())
}
