//! Statistical analyzers
//!
//! Three diagnostics for hash outputs:
//! - Avalanche: Hamming distance between digests of messages one bit apart
//! - Bit bias: per-position probability that a digest bit is 1
//! - Runs: Wald–Wolfowitz run-count z-scores of each digest's bit string
//!
//! Each analyzer draws its own samples from a [`MessageSource`] and returns
//! a fresh report. Nothing here decides pass or fail.
//!
//! [`MessageSource`]: crate::source::MessageSource

pub mod avalanche;
pub mod bias;
pub mod runs;

pub use avalanche::{avalanche_test, avalanche_test_with, AvalancheParams, AvalancheReport};
pub use bias::{bit_bias_test, bit_bias_test_with, BitBiasParams, BitPredictionReport, BitSummary};
pub use runs::{runs_statistic, runs_test, runs_test_with, RunsParams, RunsReport, RunsStatistic};

use crate::error::{Error, Result};
use crate::hash::HashFunction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Report from a single analyzer run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "test", rename_all = "snake_case")]
pub enum AnalysisReport {
    Avalanche(AvalancheReport),
    BitBias(BitPredictionReport),
    Runs(RunsReport),
}

/// Which analyzer to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    Avalanche,
    BitBias,
    Runs,
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestKind::Avalanche => write!(f, "avalanche"),
            TestKind::BitBias => write!(f, "bit_bias"),
            TestKind::Runs => write!(f, "runs"),
        }
    }
}

/// Reject a zero count or length
pub(crate) fn require_positive(what: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(Error::Config(format!("{} must be positive", what)));
    }
    Ok(())
}

/// Hash `data` and check the digest is `expected` bytes long
///
/// A digest of any other length aborts the run; it is never padded or
/// truncated.
pub(crate) fn hash_checked(
    hash: &dyn HashFunction,
    data: &[u8],
    expected: usize,
) -> Result<Vec<u8>> {
    let digest = hash.hash(data);
    if digest.len() != expected {
        return Err(Error::LengthMismatch {
            expected,
            actual: digest.len(),
        });
    }
    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::FnHash;

    #[test]
    fn test_require_positive() {
        assert!(require_positive("sample_count", 1).is_ok());
        let err = require_positive("sample_count", 0).unwrap_err();
        assert!(err.to_string().contains("sample_count"));
    }

    #[test]
    fn test_hash_checked() {
        let hash = FnHash::new("prefix", |data: &[u8]| data.to_vec());
        assert_eq!(hash_checked(&hash, b"abcd", 4).unwrap(), b"abcd".to_vec());
        assert!(matches!(
            hash_checked(&hash, b"abc", 4),
            Err(Error::LengthMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TestKind::Avalanche.to_string(), "avalanche");
        assert_eq!(TestKind::BitBias.to_string(), "bit_bias");
        assert_eq!(TestKind::Runs.to_string(), "runs");
    }
}
