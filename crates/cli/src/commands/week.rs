// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Week window commands

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use rollcall_core::export::SessionStats;
use rollcall_core::Session;
use serde::Serialize;
use std::fmt;

use super::Context;
use crate::output;

#[derive(Args)]
pub struct WeekArgs {
    #[command(subcommand)]
    pub command: WeekCommand,
}

#[derive(Subcommand)]
pub enum WeekCommand {
    /// Show the loaded week, one line per day
    Show {
        /// Only show this day
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Load the week containing DATE (edits to days still inside the
    /// new window are preserved)
    Load {
        /// Any date inside the target week
        date: NaiveDate,
    },
}

#[derive(Serialize)]
struct DayInfo {
    date: NaiveDate,
    am_marked: usize,
    pm_marked: usize,
    total: usize,
    edited: bool,
}

impl fmt::Display for DayInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  am {:>2}/{}  pm {:>2}/{}{}",
            self.date,
            self.am_marked,
            self.total,
            self.pm_marked,
            self.total,
            if self.edited { "  edited" } else { "" }
        )
    }
}

pub fn handle(ctx: &Context, command: WeekCommand) -> Result<()> {
    match command {
        WeekCommand::Show { date } => show(ctx, date),
        WeekCommand::Load { date } => load(ctx, date),
    }
}

fn show(ctx: &Context, only: Option<NaiveDate>) -> Result<()> {
    let engine = ctx.open()?;

    let days: Vec<DayInfo> = engine
        .week()
        .days()
        .iter()
        .filter(|day| only.is_none_or(|d| day.date == d))
        .map(|day| {
            let am = SessionStats::of(day.session(Session::Am));
            let pm = SessionStats::of(day.session(Session::Pm));
            DayInfo {
                date: day.date,
                am_marked: am.total - am.unrecognized,
                pm_marked: pm.total - pm.unrecognized,
                total: am.total,
                edited: day.edited,
            }
        })
        .collect();

    println!("Week of {}", engine.week().week_start());
    output::print_list(&days, "No such day in the loaded week", ctx.format);
    ctx.persist(engine)
}

fn load(ctx: &Context, date: NaiveDate) -> Result<()> {
    let mut engine = ctx.open()?;
    engine.load_week(date)?;
    let start = engine.week().week_start();
    ctx.persist(engine)?;

    println!("Loaded week of {}", start);
    Ok(())
}
