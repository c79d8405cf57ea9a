// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands
//!
//! Listing commands print one `*Info` row per line in text mode and a
//! pretty JSON array in json mode. An empty listing always prints its
//! placeholder line, whatever the format: "no leave requests" is an
//! answer for a teacher scanning the terminal, not an empty array.

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print a single value in the selected format
pub fn print<T: Serialize + std::fmt::Display>(value: &T, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(value) {
                println!("{}", json);
            }
        }
    }
}

/// Print a listing, falling back to `empty` when there are no rows
pub fn print_list<T: Serialize + std::fmt::Display>(
    items: &[T],
    empty: &str,
    format: OutputFormat,
) {
    if items.is_empty() {
        println!("{}", empty);
        return;
    }
    match format {
        OutputFormat::Text => {
            for item in items {
                println!("{}", item);
            }
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(items) {
                println!("{}", json);
            }
        }
    }
}
