// Upcase
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Run command for uppercasing a batch of items

use super::CommandContext;
use crate::config::OutputFormat;
use anyhow::{Context, Result, bail};
use clap::Args;
use std::io::{BufRead, Write};
use tracing::{debug, info};
use upcase_core::{BatchReport, UppercaseBatch};

/// Arguments for the run command
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Items to uppercase
    #[arg(value_name = "ITEMS", conflicts_with = "stdin")]
    pub items: Vec<String>,

    /// Read items from standard input, one per line
    #[arg(long)]
    pub stdin: bool,

    /// Output format (defaults to `output.format` from the config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Execute the run command, failing when the batch is rejected
pub fn handle_run<R: BufRead, W: Write>(ctx: &CommandContext, args: &RunArgs, input: R, out: &mut W) -> Result<()> {
    let report = execute_run(ctx, args, input, out)?;
    if !report.is_ok() {
        bail!("Batch failed: {}", report.error.as_deref().unwrap_or("unknown error"));
    }
    info!(capacity = report.capacity, "Batch completed");
    Ok(())
}

/// Build the batch and write its report, returning the report
pub fn execute_run<R: BufRead, W: Write>(ctx: &CommandContext, args: &RunArgs, input: R, out: &mut W) -> Result<BatchReport> {
    let items = if args.stdin { read_items(input)? } else { args.items.clone() };
    debug!(count = items.len(), stdin = args.stdin, "Collected batch items");

    let report = BatchReport::from_result(UppercaseBatch::build(&items));
    let format = args.format.unwrap_or(ctx.config.output.format);

    match format {
        OutputFormat::Text => write_text(&report, ctx.config.output.show_items, out)?,
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)?;
            writeln!(out, "{json}")?;
        }
    }

    Ok(report)
}

fn read_items<R: BufRead>(input: R) -> Result<Vec<String>> {
    input.lines().collect::<std::io::Result<Vec<_>>>().context("Failed to read items from stdin")
}

fn write_text<W: Write>(report: &BatchReport, show_items: bool, out: &mut W) -> Result<()> {
    // Failures are reported through the log only
    if !report.is_ok() {
        return Ok(());
    }

    writeln!(out, "capacity: {}", report.capacity)?;
    if show_items {
        for item in &report.items {
            writeln!(out, "{item}")?;
        }
    }
    Ok(())
}
