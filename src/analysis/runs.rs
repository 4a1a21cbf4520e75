//! Runs test (Wald–Wolfowitz)
//!
//! Counts runs (maximal blocks of identical bits) in each digest and
//! compares the count to what an i.i.d. binary process with the same
//! number of ones and zeros would give. Reports the mean |Z| over samples;
//! values near 0 look like fair coin flips.

use crate::analysis::{hash_checked, require_positive};
use crate::bits::{count_ones, count_runs, to_bits};
use crate::error::Result;
use crate::hash::HashFunction;
use crate::source::os::OsSource;
use crate::source::MessageSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default number of sampled digests
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Default message length in bytes
pub const DEFAULT_MESSAGE_LENGTH: usize = 64;

/// Runs test parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunsParams {
    /// Number of digests to analyze
    pub sample_count: usize,
    /// Length of each random message in bytes
    pub message_length_bytes: usize,
}

impl RunsParams {
    pub fn new(sample_count: usize, message_length_bytes: usize) -> Self {
        Self {
            sample_count,
            message_length_bytes,
        }
    }

    /// Check both parameters are positive
    pub fn validate(&self) -> Result<()> {
        require_positive("sample_count", self.sample_count)?;
        require_positive("message_length_bytes", self.message_length_bytes)
    }
}

impl Default for RunsParams {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_COUNT, DEFAULT_MESSAGE_LENGTH)
    }
}

/// Runs statistics of one bit sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunsStatistic {
    /// Number of 1 bits (n1)
    pub ones: usize,
    /// Number of 0 bits (n0)
    pub zeros: usize,
    /// Observed run count R
    pub runs: usize,
    /// Expected run count R̄ = 2·n1·n0/(n1+n0) + 1
    pub expected_runs: f64,
    /// Standard deviation of the run count
    pub std_dev: f64,
    /// (R - R̄) / SD, or 0 when SD is 0
    pub z: f64,
}

/// Compute the runs statistic of an unpacked bit sequence
///
/// Degenerate sequences (all ones, all zeros, or at most one bit) have a
/// zero variance denominator; they get `std_dev = 0` and `z = 0` rather
/// than an error. An empty sequence yields all zeros.
pub fn runs_statistic(bits: &[u8]) -> RunsStatistic {
    let ones = count_ones(bits);
    let zeros = bits.len() - ones;
    let runs = count_runs(bits);

    if bits.is_empty() {
        return RunsStatistic {
            ones,
            zeros,
            runs,
            expected_runs: 0.0,
            std_dev: 0.0,
            z: 0.0,
        };
    }

    let n1 = ones as f64;
    let n0 = zeros as f64;
    let n = n1 + n0;
    let product = 2.0 * n1 * n0;

    let expected_runs = product / n + 1.0;

    let numerator = product * (product - n);
    let denominator = n * n * (n - 1.0);
    let std_dev = if denominator != 0.0 {
        (numerator / denominator).sqrt()
    } else {
        0.0
    };

    let z = if std_dev != 0.0 {
        (runs as f64 - expected_runs) / std_dev
    } else {
        0.0
    };

    RunsStatistic {
        ones,
        zeros,
        runs,
        expected_runs,
        std_dev,
        z,
    }
}

/// Runs test result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunsReport {
    /// Mean of |Z| across all samples
    pub mean_abs_z: f64,
    /// Number of digests analyzed
    pub sample_count: usize,
    /// Digest width L in bits
    pub output_bits: usize,
}

/// Run the runs test with the OS source
pub fn runs_test(
    hash: &dyn HashFunction,
    sample_count: usize,
    message_length_bytes: usize,
) -> Result<RunsReport> {
    runs_test_with(
        hash,
        &OsSource::new(),
        &RunsParams::new(sample_count, message_length_bytes),
    )
}

/// Run the runs test drawing messages from `source`
///
/// # Errors
/// - `Error::Config` if either parameter is zero
/// - `Error::LengthMismatch` if the digest width changes between calls
/// - `Error::RandomSource` if the source fails
pub fn runs_test_with(
    hash: &dyn HashFunction,
    source: &dyn MessageSource,
    params: &RunsParams,
) -> Result<RunsReport> {
    params.validate()?;

    let width = hash.output_len();
    info!(
        hash = hash.name(),
        samples = params.sample_count,
        "Running runs test"
    );

    let mut total_abs_z = 0.0;
    for _ in 0..params.sample_count {
        let message = source.generate(params.message_length_bytes)?;
        let digest = hash_checked(hash, &message, width)?;
        total_abs_z += runs_statistic(&to_bits(&digest)).z.abs();
    }

    let mean_abs_z = total_abs_z / params.sample_count as f64;
    debug!(hash = hash.name(), mean_abs_z, "Runs test finished");

    Ok(RunsReport {
        mean_abs_z,
        sample_count: params.sample_count,
        output_bits: width * 8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::hash::adapters::{Sha256Hash, Sha3_512Hash};
    use crate::hash::FnHash;
    use crate::source::seeded::SeededSource;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_alternating_bits_have_maximal_runs() {
        let bits = to_bits(&[0xAA; 32]);
        let stat = runs_statistic(&bits);

        assert_eq!(stat.ones, 128);
        assert_eq!(stat.zeros, 128);
        assert_eq!(stat.runs, 256);
        assert_abs_diff_eq!(stat.expected_runs, 129.0);
        assert!(stat.z > 10.0, "z = {}", stat.z);
    }

    #[test]
    fn test_known_small_sequence() {
        // 1100: n1 = n0 = 2, R = 2, R̄ = 3, SD = sqrt(8·4 / (16·3))
        let stat = runs_statistic(&[1, 1, 0, 0]);
        assert_eq!(stat.runs, 2);
        assert_abs_diff_eq!(stat.expected_runs, 3.0);
        assert_abs_diff_eq!(stat.std_dev, (32.0f64 / 48.0).sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(stat.z, -1.0 / (32.0f64 / 48.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_sequences_have_zero_z() {
        for bits in [vec![1u8; 64], vec![0u8; 64], vec![1u8], vec![0u8]] {
            let stat = runs_statistic(&bits);
            assert_abs_diff_eq!(stat.std_dev, 0.0);
            assert_abs_diff_eq!(stat.z, 0.0);
        }

        let empty = runs_statistic(&[]);
        assert_eq!(empty.runs, 0);
        assert_abs_diff_eq!(empty.z, 0.0);
    }

    #[test]
    fn test_alternating_hash_detected() {
        let hash = FnHash::new("alternating", |_: &[u8]| vec![0x55; 32]);
        let source = SeededSource::new(8);
        let report = runs_test_with(&hash, &source, &RunsParams::new(50, 64)).unwrap();

        let expected = runs_statistic(&to_bits(&[0x55; 32])).z.abs();
        assert_abs_diff_eq!(report.mean_abs_z, expected, epsilon = 1e-9);
        assert!(report.mean_abs_z > 10.0);
    }

    #[test]
    fn test_constant_hash_has_zero_mean() {
        let hash = FnHash::new("ones", |_: &[u8]| vec![0xFF; 16]);
        let source = SeededSource::new(9);
        let report = runs_test_with(&hash, &source, &RunsParams::new(10, 64)).unwrap();
        assert_abs_diff_eq!(report.mean_abs_z, 0.0);
    }

    #[test]
    fn test_good_hashes_look_random() {
        let source = SeededSource::new(42);
        for hash in [&Sha256Hash as &dyn HashFunction, &Sha3_512Hash] {
            let report = runs_test_with(hash, &source, &RunsParams::default()).unwrap();
            assert!(report.mean_abs_z >= 0.0);
            // E|Z| for a standard normal is about 0.8
            assert!(
                report.mean_abs_z > 0.5 && report.mean_abs_z < 1.1,
                "{}: mean |Z| = {}",
                hash.name(),
                report.mean_abs_z
            );
        }
    }

    #[test]
    fn test_rejects_zero_parameters() {
        let source = SeededSource::new(10);
        assert!(matches!(
            runs_test_with(&Sha256Hash, &source, &RunsParams::new(0, 64)),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            runs_test_with(&Sha256Hash, &source, &RunsParams::new(5, 0)),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let params = RunsParams::new(100, 32);
        let a = runs_test_with(&Sha3_512Hash, &SeededSource::new(12), &params).unwrap();
        let b = runs_test_with(&Sha3_512Hash, &SeededSource::new(12), &params).unwrap();
        assert_eq!(a.mean_abs_z, b.mean_abs_z);
    }
}
