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

//! `config` subcommands

use super::CommandContext;
use crate::cli::ConfigCommands;
use anyhow::Result;
use std::io::Write;

pub fn handle_config_command<W: Write>(ctx: &CommandContext, command: ConfigCommands, out: &mut W) -> Result<()> {
    match command {
        ConfigCommands::Show => show_config(ctx, out),
    }
}

fn show_config<W: Write>(ctx: &CommandContext, out: &mut W) -> Result<()> {
    let rendered = toml::to_string_pretty(&ctx.config)?;
    write!(out, "{rendered}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputFormat, UpcaseConfig};

    #[test]
    fn test_show_config_round_trips() {
        let mut config = UpcaseConfig::default();
        config.output.format = OutputFormat::Json;
        let ctx = CommandContext::new(config.clone());

        let mut out = Vec::new();
        handle_config_command(&ctx, ConfigCommands::Show, &mut out).unwrap();

        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("format = \"json\""));
        assert_eq!(toml::from_str::<UpcaseConfig>(&rendered).unwrap(), config);
    }
}
