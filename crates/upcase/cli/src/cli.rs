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

//! Command-line argument definitions

use crate::commands::run::RunArgs;
use crate::config::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "upcase")]
#[command(about = "Upcase - uppercase batches of strings")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Path to configuration file (TOML, overrides $UPCASE_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Maximum log level (overrides $UPCASE_LOG)
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Uppercase a batch of items and report the buffer capacity
    Run(RunArgs),
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Show current effective configuration
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_run_items() {
        let cli = Cli::try_parse_from(["upcase", "run", "a", "b", "--format", "json"]).unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.items, vec!["a", "b"]);
                assert_eq!(args.format, Some(OutputFormat::Json));
                assert!(!args.stdin);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["upcase", "config", "show", "--log-level", "debug", "--config", "up.toml"]).unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert_eq!(cli.config, Some(PathBuf::from("up.toml")));
        assert!(matches!(cli.command, Commands::Config { command: ConfigCommands::Show }));
    }

    #[test]
    fn test_stdin_conflicts_with_items() {
        assert!(Cli::try_parse_from(["upcase", "run", "--stdin", "a"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["upcase", "run", "a", "--format", "yaml"]).is_err());
    }
}
