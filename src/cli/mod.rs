//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod analyze;
pub mod config;
pub mod list;
pub mod suite;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{get_formatter, OutputFormatter};
use crate::source::{get_source, MessageSource};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Avalanche, bit-bias and runs diagnostics for hash functions
#[derive(Parser)]
#[command(name = "hash-diffusion")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log progress to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run all three tests on each candidate
    Suite(suite::SuiteArgs),

    /// Hamming distance between digests of messages one bit apart
    Avalanche(analyze::AnalyzeArgs),

    /// Per-bit-position probability of a 1
    Bias(analyze::AnalyzeArgs),

    /// Wald–Wolfowitz runs test summary
    Runs(analyze::AnalyzeArgs),

    /// List hash adapters, message sources and formats
    List,

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Output and sampling flags shared by the test commands
#[derive(Args)]
pub struct OutputArgs {
    /// Output format (json, text, csv)
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Message source (os, seeded)
    #[arg(long, short = 's')]
    pub source: Option<String>,

    /// Seed for reproducible runs (implies the seeded source)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl OutputArgs {
    /// Resolve the formatter from the flag or config default
    pub fn formatter(&self, config: &Config) -> Result<Box<dyn OutputFormatter>> {
        let name = self.format.as_deref().unwrap_or(&config.defaults.format);
        get_formatter(name).ok_or_else(|| Error::Config(format!("Unknown format: {}", name)))
    }

    /// Resolve the message source; a seed always selects the seeded source
    pub fn message_source(&self, config: &Config) -> Result<Box<dyn MessageSource>> {
        let name = match (self.seed, self.source.as_deref()) {
            (Some(_), _) => "seeded",
            (None, Some(name)) => name,
            (None, None) => config.defaults.source.as_str(),
        };
        get_source(name, self.seed)
    }

    /// Print `content` or write it to the output file
    pub fn emit(&self, content: &str) -> Result<()> {
        if let Some(path) = &self.output {
            std::fs::write(path, content)?;
            eprintln!("Output written to {}", path);
        } else {
            println!("{}", content);
        }
        Ok(())
    }
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Suite(args) => suite::run(args),
        Commands::Avalanche(args) => analyze::run(crate::analysis::TestKind::Avalanche, args),
        Commands::Bias(args) => analyze::run(crate::analysis::TestKind::BitBias, args),
        Commands::Runs(args) => analyze::run(crate::analysis::TestKind::Runs, args),
        Commands::List => list::run(),
        Commands::Config(args) => config::run(args),
    }
}

/// Log to stderr; RUST_LOG overrides the level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_suite_flags() {
        let cli = Cli::try_parse_from([
            "hash-diffusion",
            "suite",
            "-H",
            "sha2-256",
            "--hash",
            "ascon-stub",
            "--seed",
            "7",
            "-f",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Suite(args) => {
                assert_eq!(args.hashes, vec!["sha2-256", "ascon-stub"]);
                assert_eq!(args.out.seed, Some(7));
                assert_eq!(args.out.format.as_deref(), Some("json"));
            }
            _ => panic!("expected suite command"),
        }
    }

    #[test]
    fn test_seed_selects_seeded_source() {
        let config = Config::default();
        let args = OutputArgs {
            format: None,
            output: None,
            source: Some("os".to_string()),
            seed: Some(5),
        };
        assert_eq!(args.message_source(&config).unwrap().name(), "seeded");
    }

    #[test]
    fn test_unknown_format_rejected() {
        let config = Config::default();
        let args = OutputArgs {
            format: Some("png".to_string()),
            output: None,
            source: None,
            seed: None,
        };
        assert!(args.formatter(&config).is_err());
    }
}
