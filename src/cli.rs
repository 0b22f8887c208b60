//! Command-line interface built on clap.
//!
//! Defines [`Cli`] with the [`Command`] subcommands (run, generate, summarize)
//! and global flags (--config, --format, --verbose).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// staffgen: synthetic employee rosters and their statistics.
#[derive(Debug, Parser)]
#[command(name = "staffgen", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the configuration file (defaults to ./staffgen.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled, human-readable report.
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate records and print their statistics.
    Run(GenerateArgs),

    /// Generate records and print them.
    Generate(GenerateArgs),

    /// Print statistics for records read from a JSON file.
    Summarize {
        /// JSON array of employee records.
        input: PathBuf,
    },
}

/// Generation parameters. Each flag overrides the configuration file.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Number of records to generate.
    #[arg(long, short)]
    pub count: Option<usize>,

    /// Lower age bound in years.
    #[arg(long)]
    pub min_age: Option<f64>,

    /// Upper age bound in years.
    #[arg(long)]
    pub max_age: Option<f64>,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Read the request from a JSON file instead of flags.
    #[arg(long, conflicts_with_all = ["count", "min_age", "max_age"])]
    pub request: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_run_subcommand() {
        let cli = Cli::parse_from(["staffgen", "run", "--count", "20", "--min-age", "25"]);
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.count, Some(20));
                assert_eq!(args.min_age, Some(25.0));
                assert!(args.max_age.is_none());
                assert!(args.request.is_none());
            }
            _ => panic!("expected Run command"),
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn cli_parses_global_flags() {
        let cli = Cli::parse_from([
            "staffgen",
            "--format",
            "json",
            "--verbose",
            "--config",
            "custom.toml",
            "generate",
            "--seed",
            "5",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        match cli.command {
            Command::Generate(args) => assert_eq!(args.seed, Some(5)),
            _ => panic!("expected Generate command"),
        }
    }

    #[test]
    fn cli_parses_summarize_subcommand() {
        let cli = Cli::parse_from(["staffgen", "summarize", "people.json"]);
        match cli.command {
            Command::Summarize { input } => assert_eq!(input, PathBuf::from("people.json")),
            _ => panic!("expected Summarize command"),
        }
    }

    #[test]
    fn request_file_conflicts_with_flags() {
        let parsed = Cli::try_parse_from([
            "staffgen",
            "run",
            "--request",
            "req.json",
            "--count",
            "3",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn cli_verify() {
        Cli::command().debug_assert();
    }
}
