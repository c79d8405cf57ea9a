// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot creation

use anyhow::{bail, Context as _, Result};
use chrono::NaiveDate;
use clap::Args;
use rollcall_core::{Clock, Roster, Student, SystemClock, UuidIdGen};
use rollcall_engine::Engine;
use std::path::PathBuf;

use super::Context;
use crate::state;

#[derive(Args)]
pub struct InitArgs {
    /// JSON roster file: an array of {"id": ..., "name": ...} objects
    #[arg(long, conflicts_with = "demo")]
    pub class_file: Option<PathBuf>,

    /// Use the built-in demo roster
    #[arg(long)]
    pub demo: bool,

    /// Any date inside the week to initialize (defaults to today)
    #[arg(long)]
    pub week_of: Option<NaiveDate>,
}

pub fn handle(ctx: &Context, args: InitArgs) -> Result<()> {
    if state::exists(&ctx.state_path) {
        bail!(
            "snapshot already exists at {}; remove it to start over",
            ctx.state_path.display()
        );
    }

    let roster = match args.class_file {
        Some(path) => read_roster(&path)?,
        None if args.demo => demo_roster()?,
        None => bail!("provide --class-file or --demo"),
    };

    let week_of = args.week_of.unwrap_or_else(|| SystemClock.today());
    let students = roster.len();
    let engine = Engine::new(roster, week_of, SystemClock, ctx.audit_sink(), UuidIdGen);
    let week_start = engine.week().week_start();
    ctx.persist(engine)?;

    println!("Initialized week of {} with {} students", week_start, students);
    Ok(())
}

fn read_roster(path: &std::path::Path) -> Result<Roster> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file {}", path.display()))?;
    let students: Vec<Student> = serde_json::from_str(&text)
        .with_context(|| format!("invalid roster file {}", path.display()))?;
    Ok(Roster::new(students)?)
}

fn demo_roster() -> Result<Roster> {
    Ok(Roster::new(vec![
        Student::new("HS001", "Nguyễn Văn An"),
        Student::new("HS002", "Trần Thị Bình"),
        Student::new("HS003", "Lê Minh Cường"),
        Student::new("HS004", "Phạm Thị Dung"),
        Student::new("HS005", "Hoàng Văn Em"),
        Student::new("HS006", "Vũ Thị Hằng"),
        Student::new("HS007", "Đặng Thị Lan"),
        Student::new("HS008", "Bùi Văn Hùng"),
    ])?)
}
