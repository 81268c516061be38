use crate::io::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "errwrap")]
#[command(
    about = "Find Go error sentinels returned without wrapping the error that caused them",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze Go files and report unwrapped error sentinels
    Check {
        /// Files or directories to analyze
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Apply suggested fixes in place
        #[arg(long)]
        fix: bool,

        /// Output format (overrides the configuration file)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Configuration file (defaults to the nearest .errwrap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of worker threads (0 = all cores, 1 = sequential)
        #[arg(short = 'j', long, env = "ERRWRAP_JOBS")]
        jobs: Option<usize>,

        /// Skip `_test.go` files
        #[arg(long)]
        no_tests: bool,

        /// Print the suggested fix under each finding
        #[arg(long)]
        show_fixes: bool,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Write a default .errwrap.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_defaults_to_current_directory() {
        let cli = Cli::parse_from(["errwrap", "check"]);
        match cli.command {
            Commands::Check {
                paths, fix, format, ..
            } => {
                assert_eq!(paths, vec![PathBuf::from(".")]);
                assert!(!fix);
                assert!(format.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_verbosity_after_subcommand() {
        let cli = Cli::parse_from(["errwrap", "check", "-vv", "--format", "json", "a.go"]);
        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Check { format, paths, .. } => {
                assert_eq!(format, Some(FormatArg::Json));
                assert_eq!(paths, vec![PathBuf::from("a.go")]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
