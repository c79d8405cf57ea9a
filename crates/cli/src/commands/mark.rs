// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Marking and saving attendance

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use rollcall_core::{AttendanceStatus, Session, StudentId};

use super::Context;

#[derive(Args)]
pub struct MarkArgs {
    /// Day to mark
    pub date: NaiveDate,
    /// Session to mark (am or pm)
    pub session: Session,
    /// Student id
    pub student_id: String,
    /// New status (present, late, absent_excused, absent_unexcused,
    /// unrecognized)
    pub status: AttendanceStatus,
}

#[derive(Args)]
pub struct SaveArgs {
    /// Day to save
    pub date: NaiveDate,
    /// Session to save (am or pm)
    pub session: Session,
    /// Justification, required when saving a past date
    #[arg(long)]
    pub reason: Option<String>,
}

pub fn mark(ctx: &Context, args: MarkArgs) -> Result<()> {
    let mut engine = ctx.open()?;
    let student = StudentId::from(args.student_id);
    engine.set_status(args.date, args.session, &student, args.status)?;
    ctx.persist(engine)?;

    println!(
        "Marked {} {} for {} {}",
        student, args.status, args.date, args.session
    );
    Ok(())
}

pub fn save(ctx: &Context, args: SaveArgs) -> Result<()> {
    let mut engine = ctx.open()?;
    engine.save(args.date, args.session, args.reason.as_deref())?;
    ctx.persist(engine)?;

    println!("Saved attendance for {} {}", args.date, args.session);
    Ok(())
}
