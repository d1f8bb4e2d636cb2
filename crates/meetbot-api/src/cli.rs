//! CLI definitions for the `meetbot` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Telegram bot that schedules meetings into a Google spreadsheet.
#[derive(Parser)]
#[command(name = "meetbot", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all log output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Directory holding meetbot.toml, token.txt and credentials.
    #[arg(long, global = true, env = "MEETBOT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start polling Telegram and serve conversations.
    Run,

    /// Load configuration, connect to the spreadsheet and report status.
    Check,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_with_globals() {
        let cli = Cli::try_parse_from(["meetbot", "-vv", "--otel", "run"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.otel);
        assert!(!cli.quiet);
        assert!(matches!(cli.command, Commands::Run));
    }

    #[test]
    fn test_parse_check_with_data_dir() {
        let cli =
            Cli::try_parse_from(["meetbot", "check", "--data-dir", "/srv/meetbot"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/srv/meetbot")));
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn test_parse_completions() {
        let cli = Cli::try_parse_from(["meetbot", "completions", "bash"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Completions { shell: Shell::Bash }
        ));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["meetbot"]).is_err());
    }
}
