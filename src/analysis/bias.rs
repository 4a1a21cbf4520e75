//! Bit prediction (per-position bias) test
//!
//! Estimates, for every digest bit position, the probability that the bit
//! is 1. Every position draws its own fresh messages, so the L estimates
//! are statistically independent. The ideal value at each position is 50%.

use crate::analysis::{hash_checked, require_positive};
use crate::bits::bit_at;
use crate::constants::ideal::BIT_PROBABILITY_PERCENT;
use crate::error::{Error, Result};
use crate::hash::HashFunction;
use crate::source::os::OsSource;
use crate::source::MessageSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default number of messages per bit position
pub const DEFAULT_MESSAGE_COUNT: usize = 1000;

/// Default message length in bytes
pub const DEFAULT_MESSAGE_LENGTH: usize = 64;

/// Bit bias test parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BitBiasParams {
    /// Messages hashed for each bit position
    pub message_count: usize,
    /// Length of each random message in bytes
    pub message_length_bytes: usize,
}

impl BitBiasParams {
    pub fn new(message_count: usize, message_length_bytes: usize) -> Self {
        Self {
            message_count,
            message_length_bytes,
        }
    }

    /// Check both parameters are positive
    pub fn validate(&self) -> Result<()> {
        require_positive("message_count", self.message_count)?;
        require_positive("message_length_bytes", self.message_length_bytes)
    }
}

impl Default for BitBiasParams {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE_COUNT, DEFAULT_MESSAGE_LENGTH)
    }
}

/// Summary of per-position probabilities, all in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BitSummary {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    /// Sample standard deviation (Bessel-corrected)
    pub sd: f64,
}

impl BitSummary {
    /// Summarize a non-empty set of probabilities
    ///
    /// `sd` divides by `n - 1`; a single value has `sd = 0`.
    pub fn from_probabilities(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let n = values.len() as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // Summation rounding can leave the mean a hair outside [min, max]
        let avg = (values.iter().sum::<f64>() / n).clamp(min, max);

        let sd = if values.len() < 2 {
            0.0
        } else {
            let ss: f64 = values.iter().map(|v| (v - avg) * (v - avg)).sum();
            (ss / (n - 1.0)).sqrt()
        };

        Some(Self { min, max, avg, sd })
    }
}

/// Bit prediction test result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BitPredictionReport {
    /// Probability (percent) that bit `i` is 1, indexed by bit position
    pub probabilities: Vec<f64>,
    pub summary: BitSummary,
    /// Messages hashed per position
    pub message_count: usize,
}

impl BitPredictionReport {
    /// Digest width L in bits
    pub fn output_bits(&self) -> usize {
        self.probabilities.len()
    }

    /// Ideal per-position probability in percent
    pub fn ideal(&self) -> f64 {
        BIT_PROBABILITY_PERCENT
    }

    /// Position whose estimate is furthest from 50%
    pub fn worst_position(&self) -> Option<(usize, f64)> {
        self.probabilities
            .iter()
            .copied()
            .enumerate()
            .max_by(|(_, a), (_, b)| {
                let da = (a - BIT_PROBABILITY_PERCENT).abs();
                let db = (b - BIT_PROBABILITY_PERCENT).abs();
                da.total_cmp(&db)
            })
    }
}

/// Run the bit bias test with the OS source
pub fn bit_bias_test(
    hash: &dyn HashFunction,
    message_count: usize,
    message_length_bytes: usize,
) -> Result<BitPredictionReport> {
    bit_bias_test_with(
        hash,
        &OsSource::new(),
        &BitBiasParams::new(message_count, message_length_bytes),
    )
}

/// Run the bit bias test drawing messages from `source`
///
/// Hashes `message_count` fresh messages for each of the L bit positions.
///
/// # Errors
/// - `Error::Config` if either parameter is zero or the digest is empty
/// - `Error::LengthMismatch` if the digest width changes between calls
/// - `Error::RandomSource` if the source fails
pub fn bit_bias_test_with(
    hash: &dyn HashFunction,
    source: &dyn MessageSource,
    params: &BitBiasParams,
) -> Result<BitPredictionReport> {
    params.validate()?;

    let width = hash.output_len();
    let output_bits = width * 8;
    if output_bits == 0 {
        return Err(Error::Config(format!(
            "hash function {} produced an empty digest",
            hash.name()
        )));
    }
    info!(
        hash = hash.name(),
        positions = output_bits,
        messages = params.message_count,
        "Running bit bias test"
    );

    let mut probabilities = Vec::with_capacity(output_bits);
    for position in 0..output_bits {
        let mut ones = 0usize;
        for _ in 0..params.message_count {
            let message = source.generate(params.message_length_bytes)?;
            let digest = hash_checked(hash, &message, width)?;
            if bit_at(&digest, position) {
                ones += 1;
            }
        }
        probabilities.push(100.0 * ones as f64 / params.message_count as f64);
    }

    let summary = BitSummary::from_probabilities(&probabilities).ok_or_else(|| {
        Error::Config("bit bias test produced no probabilities".to_string())
    })?;
    debug!(
        hash = hash.name(),
        min = summary.min,
        max = summary.max,
        avg = summary.avg,
        sd = summary.sd,
        "Bit bias test finished"
    );

    Ok(BitPredictionReport {
        probabilities,
        summary,
        message_count: params.message_count,
    })
}
