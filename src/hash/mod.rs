//! Hash function capability
//!
//! Analyzers only see `&dyn HashFunction`. Concrete algorithms live outside
//! the analytical core: `adapters` wraps library digests, and `FnHash` wraps
//! any closure, so an experimental or placeholder design plugs in the same
//! way as a standard digest.

pub mod adapters;

use crate::constants::probe::PROBE_INPUT;
use serde::{Deserialize, Serialize};

/// A deterministic mapping from arbitrary bytes to a fixed-length digest
///
/// Implementations must return the same output for the same input, and
/// every output of one function must have the same length. Analyzers check
/// the second property and abort with `Error::LengthMismatch` when it fails.
pub trait HashFunction: Send + Sync {
    /// Returns the candidate name (e.g., "sha2-256")
    fn name(&self) -> &str;

    /// Returns a human-readable description
    fn description(&self) -> &str {
        ""
    }

    /// Hash `data`
    fn hash(&self, data: &[u8]) -> Vec<u8>;

    /// Output length in bytes, discovered by hashing a fixed probe input
    fn output_len(&self) -> usize {
        self.hash(PROBE_INPUT).len()
    }

    /// Output length in bits
    fn output_bits(&self) -> usize {
        self.output_len() * 8
    }
}

/// Adapter turning a closure into a [`HashFunction`]
///
/// ```rust
/// use hash_diffusion::hash::{FnHash, HashFunction};
///
/// let constant = FnHash::new("constant", |_: &[u8]| vec![0u8; 32]);
/// assert_eq!(constant.output_bits(), 256);
/// ```
pub struct FnHash<F> {
    name: String,
    description: String,
    f: F,
}

impl<F> FnHash<F>
where
    F: Fn(&[u8]) -> Vec<u8> + Send + Sync,
{
    /// Wrap `f` under the given candidate name
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            f,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl<F> HashFunction for FnHash<F>
where
    F: Fn(&[u8]) -> Vec<u8> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn hash(&self, data: &[u8]) -> Vec<u8> {
        (self.f)(data)
    }
}

/// Information about a registered hash adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashInfo {
    /// Adapter name (used in config/CLI)
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Digest width in bits
    pub output_bits: usize,
}

/// Get a registered adapter by name
pub fn get_hash(name: &str) -> Option<Box<dyn HashFunction>> {
    match name.to_lowercase().as_str() {
        "sha2-256" => Some(Box::new(adapters::Sha256Hash)),
        "sha3-512" => Some(Box::new(adapters::Sha3_512Hash)),
        "ascon-stub" => Some(Box::new(adapters::AsconStub)),
        _ => None,
    }
}

/// Names of all registered adapters, in registration order
pub fn hash_names() -> Vec<&'static str> {
    vec!["sha2-256", "sha3-512", "ascon-stub"]
}

/// List all registered adapters with their info
pub fn available_hashes() -> Vec<HashInfo> {
    hash_names()
        .into_iter()
        .filter_map(get_hash)
        .map(|hash| HashInfo {
            name: hash.name().to_string(),
            description: hash.description().to_string(),
            output_bits: hash.output_bits(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_hash() {
        let identity = FnHash::new("identity", |data: &[u8]| data.to_vec())
            .with_description("returns its input");
        assert_eq!(identity.name(), "identity");
        assert_eq!(identity.description(), "returns its input");
        assert_eq!(identity.hash(b"abc"), b"abc".to_vec());
        assert_eq!(identity.output_len(), PROBE_INPUT.len());
    }

    #[test]
    fn test_get_hash() {
        assert!(get_hash("sha2-256").is_some());
        assert!(get_hash("SHA3-512").is_some());
        assert!(get_hash("ascon-stub").is_some());
        assert!(get_hash("md5").is_none());
    }

    #[test]
    fn test_available_hashes() {
        let hashes = available_hashes();
        assert_eq!(hashes.len(), 3);

        let widths: Vec<(String, usize)> = hashes
            .into_iter()
            .map(|h| (h.name, h.output_bits))
            .collect();
        assert_eq!(
            widths,
            vec![
                ("sha2-256".to_string(), 256),
                ("sha3-512".to_string(), 512),
                ("ascon-stub".to_string(), 256),
            ]
        );
    }
}
