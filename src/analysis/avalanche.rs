//! Avalanche (Hamming distance) test
//!
//! For each sample, hashes a random message and a copy of it with one bit
//! flipped, then counts how many digest bits differ. A well-diffusing
//! function flips about half of its L output bits.

use crate::analysis::{hash_checked, require_positive};
use crate::bits::byte_hamming_distance;
use crate::constants::ideal::AVALANCHE_FRACTION;
use crate::error::Result;
use crate::hash::HashFunction;
use crate::source::os::OsSource;
use crate::source::MessageSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default number of message pairs
pub const DEFAULT_SAMPLE_COUNT: usize = 2000;

/// Default message length in bytes
pub const DEFAULT_MESSAGE_LENGTH: usize = 64;

/// Avalanche test parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvalancheParams {
    /// Number of message pairs to hash
    pub sample_count: usize,
    /// Length of each random message in bytes
    pub message_length_bytes: usize,
}

impl AvalancheParams {
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

impl Default for AvalancheParams {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_COUNT, DEFAULT_MESSAGE_LENGTH)
    }
}

/// Avalanche test result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvalancheReport {
    /// Distance for each sample, in generation order
    pub distances: Vec<usize>,
    /// Mean distance in bits
    pub mean: f64,
    /// Digest width L in bits
    pub output_bits: usize,
    /// Ideal mean distance (L/2)
    pub ideal: f64,
}

impl AvalancheReport {
    /// Mean minus the ideal value, in bits
    pub fn deviation(&self) -> f64 {
        self.mean - self.ideal
    }

    /// Smallest and largest observed distance
    pub fn range(&self) -> Option<(usize, usize)> {
        let min = *self.distances.iter().min()?;
        let max = *self.distances.iter().max()?;
        Some((min, max))
    }
}

/// Run the avalanche test with the OS source
pub fn avalanche_test(
    hash: &dyn HashFunction,
    sample_count: usize,
    message_length_bytes: usize,
) -> Result<AvalancheReport> {
    avalanche_test_with(
        hash,
        &OsSource::new(),
        &AvalancheParams::new(sample_count, message_length_bytes),
    )
}

/// Run the avalanche test drawing messages from `source`
///
/// # Errors
/// - `Error::Config` if either parameter is zero
/// - `Error::LengthMismatch` if the digest width changes between calls
/// - `Error::RandomSource` if the source fails
pub fn avalanche_test_with(
    hash: &dyn HashFunction,
    source: &dyn MessageSource,
    params: &AvalancheParams,
) -> Result<AvalancheReport> {
    params.validate()?;

    let width = hash.output_len();
    let output_bits = width * 8;
    info!(
        hash = hash.name(),
        samples = params.sample_count,
        "Running avalanche test"
    );
    debug!(hash = hash.name(), output_bits, "Probed digest width");

    let mut distances = Vec::with_capacity(params.sample_count);
    for _ in 0..params.sample_count {
        let message = source.generate(params.message_length_bytes)?;
        let mutated = source.mutate_one_bit(&message)?;

        let original = hash_checked(hash, &message, width)?;
        let flipped = hash_checked(hash, &mutated, width)?;

        distances.push(byte_hamming_distance(&original, &flipped)?);
    }

    let mean = distances.iter().sum::<usize>() as f64 / distances.len() as f64;
    debug!(hash = hash.name(), mean, "Avalanche test finished");

    Ok(AvalancheReport {
        distances,
        mean,
        output_bits,
        ideal: output_bits as f64 * AVALANCHE_FRACTION,
    })
}
