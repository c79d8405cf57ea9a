// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session reports and CSV export

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use rollcall_core::export::{self, SessionStats};
use rollcall_core::Session;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::Context;
use crate::output;

#[derive(Args)]
pub struct ExportArgs {
    /// Day to export
    pub date: NaiveDate,
    /// Session to export (am or pm)
    pub session: Session,
    /// Output file (defaults to the dated report name)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Day to report
    pub date: NaiveDate,
    /// Session to report (am or pm)
    pub session: Session,
    /// Filter rows by name or id substring
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Serialize)]
struct RowInfo {
    position: usize,
    id: String,
    name: String,
    status: String,
    label: String,
}

impl fmt::Display for RowInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>2}. {:<8} {:<20} {}",
            self.position, self.id, self.name, self.label
        )
    }
}

#[derive(Serialize)]
struct StatsInfo {
    date: NaiveDate,
    session: String,
    #[serde(flatten)]
    stats: SessionStats,
}

impl fmt::Display for StatsInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} present, {} late, {} excused, {} unexcused, {} unmarked of {}",
            self.date,
            self.session,
            self.stats.present,
            self.stats.late,
            self.stats.absent_excused,
            self.stats.absent_unexcused,
            self.stats.unrecognized,
            self.stats.total
        )
    }
}

pub fn export(ctx: &Context, args: ExportArgs) -> Result<()> {
    let engine = ctx.open()?;
    let csv = engine.export_csv(args.date, args.session)?;
    let rows = csv.lines().count().saturating_sub(1);
    let path = args
        .out
        .unwrap_or_else(|| PathBuf::from(export::export_file_name(args.date)));
    std::fs::write(&path, &csv)?;
    ctx.persist(engine)?;

    println!("Exported {} rows to {}", rows, path.display());
    Ok(())
}

pub fn report(ctx: &Context, args: ReportArgs) -> Result<()> {
    let engine = ctx.open()?;
    let record = engine.session_view(args.date, args.session)?;
    let stats = StatsInfo {
        date: args.date,
        session: args.session.to_string(),
        stats: SessionStats::of(record),
    };

    let rows: Vec<RowInfo> = export::display_order(record, engine.roster())?
        .into_iter()
        .filter(|(student, _)| {
            args.search
                .as_deref()
                .is_none_or(|q| export::matches_query(student, q))
        })
        .enumerate()
        .map(|(i, (student, status))| RowInfo {
            position: i + 1,
            id: student.id.to_string(),
            name: student.name.clone(),
            status: status.to_string(),
            label: status.label().to_string(),
        })
        .collect();

    output::print(&stats, ctx.format);
    output::print_list(&rows, "No matching students", ctx.format);
    ctx.persist(engine)
}
