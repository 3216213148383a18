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

//! Command handlers

pub mod config;
pub mod run;

use crate::cli::Commands;
use crate::config::UpcaseConfig;
use anyhow::Result;
use std::io;

pub struct CommandContext {
    pub config: UpcaseConfig,
}

impl CommandContext {
    pub fn new(config: UpcaseConfig) -> Self {
        Self { config }
    }
}

/// Dispatch a parsed command against stdin/stdout
pub fn dispatch(ctx: &CommandContext, command: Commands) -> Result<()> {
    match command {
        Commands::Run(args) => run::handle_run(ctx, &args, io::stdin().lock(), &mut io::stdout().lock()),
        Commands::Config { command } => config::handle_config_command(ctx, command, &mut io::stdout().lock()),
    }
}
