//! Suite command handler
//!
//! Runs every analyzer on each selected candidate.

use crate::cli::OutputArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::hash::get_hash;
use crate::suite::{run_suite_with, Candidate};
use clap::Args;

/// Suite command arguments
#[derive(Args)]
pub struct SuiteArgs {
    /// Hash adapter to test (repeatable; default from config)
    #[arg(long = "hash", short = 'H')]
    pub hashes: Vec<String>,

    /// Avalanche sample count
    #[arg(long)]
    pub samples: Option<usize>,

    /// Bit bias messages per bit position
    #[arg(long)]
    pub messages: Option<usize>,

    /// Runs test sample count
    #[arg(long)]
    pub runs_samples: Option<usize>,

    /// Message length in bytes for every test
    #[arg(long)]
    pub message_length: Option<usize>,

    #[command(flatten)]
    pub out: OutputArgs,
}

/// Run the suite command
pub fn run(args: SuiteArgs) -> Result<()> {
    let config = Config::load()?;

    let names = if args.hashes.is_empty() {
        config.defaults.hashes.clone()
    } else {
        args.hashes.clone()
    };
    let candidates = names
        .iter()
        .map(|name| {
            get_hash(name)
                .map(Candidate::from_hash)
                .ok_or_else(|| Error::Config(format!("Unknown hash function: {}", name)))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut params = config.suite_params();
    if let Some(n) = args.samples {
        params.avalanche.sample_count = n;
    }
    if let Some(n) = args.messages {
        params.bit_bias.message_count = n;
    }
    if let Some(n) = args.runs_samples {
        params.runs.sample_count = n;
    }
    if let Some(len) = args.message_length {
        params.avalanche.message_length_bytes = len;
        params.bit_bias.message_length_bytes = len;
        params.runs.message_length_bytes = len;
    }

    let formatter = args.out.formatter(&config)?;
    let source = args.out.message_source(&config)?;

    let report = run_suite_with(&candidates, &params, source.as_ref())?;
    args.out.emit(&formatter.format_suite(&report)?)
}
