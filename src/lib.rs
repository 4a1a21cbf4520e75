//! hash-diffusion: statistical diagnostics for hash function outputs
//!
//! A library and CLI tool for checking how closely a hash function's output
//! behaves like an ideal random oracle.
//!
//! ## Features
//!
//! - Avalanche test: Hamming distance between digests of messages one bit apart
//! - Bit prediction test: per-position probability of a 1 bit
//! - Runs test: mean |Z| of the Wald–Wolfowitz run count
//! - Pluggable hash functions (standard digests, placeholders, closures)
//! - Seeded message sources for reproducible runs
//!
//! Results are plain report values; nothing is judged pass or fail.
//!
//! ## Quick Start
//!
//! ```rust
//! use hash_diffusion::analysis::{avalanche_test, runs_test};
//! use hash_diffusion::hash::adapters::Sha256Hash;
//!
//! let report = avalanche_test(&Sha256Hash, 200, 64).unwrap();
//! println!("mean distance {:.2} (ideal {:.2})", report.mean, report.ideal);
//!
//! let runs = runs_test(&Sha256Hash, 100, 64).unwrap();
//! println!("mean |Z| = {:.3}", runs.mean_abs_z);
//! ```

pub mod analysis;
pub mod bits;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod hash;
pub mod source;
pub mod suite;

// Re-export commonly used types
pub use analysis::{
    avalanche_test, bit_bias_test, runs_test, AnalysisReport, AvalancheReport,
    BitPredictionReport, RunsReport,
};
pub use config::Config;
pub use error::{Error, Result};
pub use hash::{FnHash, HashFunction};
pub use source::MessageSource;
pub use suite::{run_suite, Candidate, ReportBundle, SuiteReport};
