// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! rollcall - classroom attendance CLI

mod commands;
mod output;
mod state;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use commands::{init, leave, mark, report, week, Context};
use output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "rollcall",
    version,
    about = "Rollcall - classroom attendance and leave reconciliation"
)]
struct Cli {
    /// Path to the class snapshot
    #[arg(long, global = true, default_value = "rollcall.json")]
    state: PathBuf,

    /// Path to the audit log
    #[arg(long, global = true, default_value = "audit.jsonl")]
    audit: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a class snapshot for the current week
    Init(init::InitArgs),
    /// Show or switch the loaded week
    Week(week::WeekArgs),
    /// Mark one student's status for a session
    Mark(mark::MarkArgs),
    /// Commit a session's edits (past dates need --reason)
    Save(mark::SaveArgs),
    /// Leave request management
    Leave(leave::LeaveArgs),
    /// Export a session as CSV
    Export(report::ExportArgs),
    /// Per-session attendance summary
    Report(report::ReportArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = Context {
        state_path: cli.state,
        audit_path: cli.audit,
        format: cli.format,
    };

    match cli.command {
        Commands::Init(args) => init::handle(&ctx, args),
        Commands::Week(args) => week::handle(&ctx, args.command),
        Commands::Mark(args) => mark::mark(&ctx, args),
        Commands::Save(args) => mark::save(&ctx, args),
        Commands::Leave(args) => leave::handle(&ctx, args.command),
        Commands::Export(args) => report::export(&ctx, args),
        Commands::Report(args) => report::report(&ctx, args),
    }
}
