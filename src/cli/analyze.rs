//! Single-analyzer command handlers
//!
//! `avalanche`, `bias` and `runs` share these arguments and differ only in
//! which analyzer they run.

use crate::analysis::{
    avalanche_test_with, bit_bias_test_with, runs_test_with, AnalysisReport, TestKind,
};
use crate::cli::OutputArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::hash::get_hash;
use clap::Args;

/// Single-analyzer command arguments
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Hash adapter to test
    #[arg(long = "hash", short = 'H', default_value = "sha2-256")]
    pub hash: String,

    /// Samples (avalanche, runs) or messages per bit position (bias)
    #[arg(long, short = 'n')]
    pub count: Option<usize>,

    /// Message length in bytes
    #[arg(long)]
    pub message_length: Option<usize>,

    #[command(flatten)]
    pub out: OutputArgs,
}

/// Run one analyzer
pub fn run(kind: TestKind, args: AnalyzeArgs) -> Result<()> {
    let config = Config::load()?;

    let hash = get_hash(&args.hash)
        .ok_or_else(|| Error::Config(format!("Unknown hash function: {}", args.hash)))?;
    let formatter = args.out.formatter(&config)?;
    let source = args.out.message_source(&config)?;

    let report = match kind {
        TestKind::Avalanche => {
            let mut params = config.avalanche;
            if let Some(n) = args.count {
                params.sample_count = n;
            }
            if let Some(len) = args.message_length {
                params.message_length_bytes = len;
            }
            AnalysisReport::Avalanche(avalanche_test_with(hash.as_ref(), source.as_ref(), &params)?)
        }
        TestKind::BitBias => {
            let mut params = config.bit_bias;
            if let Some(n) = args.count {
                params.message_count = n;
            }
            if let Some(len) = args.message_length {
                params.message_length_bytes = len;
            }
            AnalysisReport::BitBias(bit_bias_test_with(hash.as_ref(), source.as_ref(), &params)?)
        }
        TestKind::Runs => {
            let mut params = config.runs;
            if let Some(n) = args.count {
                params.sample_count = n;
            }
            if let Some(len) = args.message_length {
                params.message_length_bytes = len;
            }
            AnalysisReport::Runs(runs_test_with(hash.as_ref(), source.as_ref(), &params)?)
        }
    };

    args.out.emit(&formatter.format_analysis(hash.name(), &report)?)
}
