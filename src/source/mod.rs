//! Random message sources
//!
//! This module defines the `MessageSource` trait and its implementations.
//! Analyzers draw every sample message through a source, so swapping the
//! OS generator for a seeded one makes a whole run reproducible.
//!
//! ## Flex Point
//! Adding a new source requires:
//! 1. Create `src/source/{source_name}.rs` implementing `MessageSource`
//! 2. Add `pub mod {source_name};` below
//! 3. Register it in `get_source` and `available_sources`

pub mod os;
pub mod seeded;

use crate::constants::seed::DEFAULT_SEED;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Trait for random message sources
///
/// Implementations must be thread-safe (Send + Sync) so a source can be
/// shared across analyzer runs.
pub trait MessageSource: Send + Sync {
    /// Returns the source name (e.g., "os", "seeded")
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of this source
    fn description(&self) -> &'static str;

    /// Fill `buf` with random bytes
    ///
    /// A failure here means the entropy source is broken and is not retried.
    fn fill(&self, buf: &mut [u8]) -> Result<()>;

    /// Draw an index uniformly from `0..upper`
    ///
    /// Used only for picking bit positions, so it need not be
    /// cryptographically secure. `upper` must be positive.
    fn index(&self, upper: usize) -> Result<usize>;

    /// Generate a random message of `n` bytes
    ///
    /// # Errors
    /// `Error::Config` if `n` is zero.
    fn generate(&self, n: usize) -> Result<Vec<u8>> {
        if n == 0 {
            return Err(Error::Config(
                "message length must be positive".to_string(),
            ));
        }
        let mut message = vec![0u8; n];
        self.fill(&mut message)?;
        Ok(message)
    }

    /// Copy `message` with exactly one bit flipped
    ///
    /// The flipped position is uniform over all `8 * message.len()` bits and
    /// uses the same MSB-first numbering as [`crate::bits::to_bits`].
    fn mutate_one_bit(&self, message: &[u8]) -> Result<Vec<u8>> {
        if message.is_empty() {
            return Err(Error::Config(
                "cannot mutate an empty message".to_string(),
            ));
        }
        let bit = self.index(message.len() * 8)?;
        let mut mutated = message.to_vec();
        mutated[bit / 8] ^= 0x80 >> (bit % 8);
        Ok(mutated)
    }
}

/// Information about a message source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Source name (used in config/CLI)
    pub name: String,
    /// Human-readable description
    pub description: String,
}

/// Get a source by name
///
/// `seed` only applies to the seeded source; it falls back to
/// [`DEFAULT_SEED`] when absent.
pub fn get_source(name: &str, seed: Option<u64>) -> Result<Box<dyn MessageSource>> {
    match name {
        "os" => Ok(Box::new(os::OsSource::new())),
        "seeded" => Ok(Box::new(seeded::SeededSource::new(
            seed.unwrap_or(DEFAULT_SEED),
        ))),
        _ => Err(Error::Config(format!("Unknown message source: {}", name))),
    }
}

/// List all available sources with their info
pub fn available_sources() -> Vec<SourceInfo> {
    vec![
        SourceInfo {
            name: "os".to_string(),
            description: "Operating system CSPRNG".to_string(),
        },
        SourceInfo {
            name: "seeded".to_string(),
            description: "Seeded generator for reproducible runs".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::{hamming_distance, to_bits};

    #[test]
    fn test_generate_rejects_zero_length() {
        let source = seeded::SeededSource::new(1);
        assert!(matches!(source.generate(0), Err(Error::Config(_))));
    }

    #[test]
    fn test_mutate_one_bit_flips_exactly_one() {
        let source = seeded::SeededSource::new(7);
        for _ in 0..200 {
            let message = source.generate(16).unwrap();
            let mutated = source.mutate_one_bit(&message).unwrap();
            let distance = hamming_distance(&to_bits(&message), &to_bits(&mutated)).unwrap();
            assert_eq!(distance, 1);
        }
    }

    #[test]
    fn test_mutate_one_bit_single_byte_covers_all_positions() {
        let source = seeded::SeededSource::new(99);
        let mut seen = [false; 8];
        for _ in 0..500 {
            let mutated = source.mutate_one_bit(&[0x00]).unwrap();
            assert_eq!(mutated[0].count_ones(), 1);
            seen[mutated[0].leading_zeros() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "positions hit: {:?}", seen);
    }

    #[test]
    fn test_mutate_empty_message() {
        let source = os::OsSource::new();
        assert!(matches!(source.mutate_one_bit(&[]), Err(Error::Config(_))));
    }

    #[test]
    fn test_get_source() {
        assert_eq!(get_source("os", None).unwrap().name(), "os");
        assert_eq!(get_source("seeded", Some(3)).unwrap().name(), "seeded");
        assert!(get_source("quantum", None).is_err());
    }

    #[test]
    fn test_available_sources() {
        let sources = available_sources();
        assert_eq!(sources.len(), 2);
        assert!(sources.iter().any(|s| s.name == "os"));
        assert!(sources.iter().any(|s| s.name == "seeded"));
    }
}
