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

//! Upcase CLI Tool
//!
//! Main entry point for the upcase command-line interface.

use clap::Parser;
use std::process;
use tracing::error;
use upcase_cli::{Cli, CommandContext, LogLevel, UpcaseConfig, dispatch};

fn main() {
    let cli = Cli::parse();

    let result = UpcaseConfig::resolve_config(cli.config.clone()).and_then(|config| {
        let level = config.log_level(cli.log_level)?;
        init_tracing(level);
        dispatch(&CommandContext::new(config), cli.command)
    });

    if let Err(e) = result {
        // Config loading may have failed before a subscriber was installed
        let _ = tracing_subscriber::fmt().with_writer(std::io::stderr).try_init();
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

/// Initialize tracing, keeping stdout free for command output
fn init_tracing(level: LogLevel) {
    tracing_subscriber::fmt().with_max_level(tracing::Level::from(level)).with_writer(std::io::stderr).init();
}
