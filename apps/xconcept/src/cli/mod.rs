//! # XCONCEPT CLI Module
//!
//! This module implements the command line interface.
//!
//! ## Available Commands
//!
//! - `run` - Interactive ten-step assessment (default)
//! - `preview` - Render the summary and delivery links from a JSON answers file
//! - `config` - Print the effective configuration

mod commands;

use crate::config::AppConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use xconcept_core::XconceptError;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// XCONCEPT - Physical Assessment
///
/// Collects a student's physical assessment step by step and hands the
/// summary to the coach by WhatsApp or e-mail.
#[derive(Parser, Debug)]
#[command(name = "xconcept")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive assessment
    Run {
        /// Print delivery links instead of opening them
        #[arg(long)]
        dry_run: bool,

        /// Start date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        start: Option<String>,
    },

    /// Render summary and delivery links from a JSON answers file
    Preview {
        /// Path to the answers file
        #[arg(short, long)]
        input: PathBuf,

        /// Start date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        start: Option<String>,
    },

    /// Print the effective configuration
    Config,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), XconceptError> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Run { dry_run, start }) => cmd_run(&config, dry_run, start.as_deref()),
        Some(Commands::Preview { input, start }) => {
            cmd_preview(&config, json_mode, &input, start.as_deref())
        }
        Some(Commands::Config) => cmd_config(&config, json_mode),
        None => {
            // No subcommand - start the wizard
            cmd_run(&config, false, None)
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["xconcept", "-q"]).expect("parse");
        assert!(cli.quiet);
        assert!(cli.command.is_none());
    }

    #[test]
    fn preview_arguments() {
        let cli = Cli::try_parse_from([
            "xconcept",
            "preview",
            "-i",
            "answers.json",
            "--start",
            "2026-03-02",
            "--json-mode",
        ])
        .expect("parse");

        assert!(cli.json_mode);
        match cli.command {
            Some(Commands::Preview { input, start }) => {
                assert_eq!(input, PathBuf::from("answers.json"));
                assert_eq!(start.as_deref(), Some("2026-03-02"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["xconcept", "run", "--dry-run", "-c", "x.toml"])
            .expect("parse");
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(
            cli.command,
            Some(Commands::Run { dry_run: true, .. })
        ));
    }
}
