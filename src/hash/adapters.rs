//! Digest adapters
//!
//! Thin wrappers around RustCrypto digests. None of them implement an
//! algorithm; they only expose the library digest as a [`HashFunction`].

use crate::hash::HashFunction;
use sha2::{Digest, Sha256};
use sha3::Sha3_512;

/// Output length of the placeholder adapter in bytes
pub const ASCON_STUB_LEN: usize = 32;

/// SHA-256 (256-bit digest)
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hash;

impl HashFunction for Sha256Hash {
    fn name(&self) -> &str {
        "sha2-256"
    }

    fn description(&self) -> &str {
        "SHA-256 (FIPS 180-4)"
    }

    fn hash(&self, data: &[u8]) -> Vec<u8> {
        Sha256::digest(data).to_vec()
    }
}

/// SHA3-512 (512-bit digest)
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha3_512Hash;

impl HashFunction for Sha3_512Hash {
    fn name(&self) -> &str {
        "sha3-512"
    }

    fn description(&self) -> &str {
        "SHA3-512 (FIPS 202)"
    }

    fn hash(&self, data: &[u8]) -> Vec<u8> {
        Sha3_512::digest(data).to_vec()
    }
}

/// Placeholder for an unfinished Ascon-Hash design
///
/// Produces SHAKE256 output truncated to 256 bits until a real Ascon
/// adapter is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsconStub;

impl HashFunction for AsconStub {
    fn name(&self) -> &str {
        "ascon-stub"
    }

    fn description(&self) -> &str {
        "Placeholder: SHAKE256 truncated to 256 bits"
    }

    fn hash(&self, data: &[u8]) -> Vec<u8> {
        shake256(data, ASCON_STUB_LEN)
    }
}

fn shake256(data: &[u8], len: usize) -> Vec<u8> {
    use sha3::digest::{ExtendableOutput, Update, XofReader};

    let mut hasher = sha3::Shake256::default();
    hasher.update(data);
    let mut reader = hasher.finalize_xof();
    let mut out = vec![0u8; len];
    reader.read(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    #[test]
    fn test_sha256_known_answer() {
        assert_eq!(
            hex(&Sha256Hash.hash(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha3_512_width() {
        assert_eq!(Sha3_512Hash.hash(b"").len(), 64);
        assert_eq!(Sha3_512Hash.output_bits(), 512);
    }

    #[test]
    fn test_shake256_empty_known_answer() {
        assert_eq!(
            hex(&AsconStub.hash(b"")),
            "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f"
        );
    }

    #[test]
    fn test_adapters_deterministic() {
        let data = b"hash-diffusion";
        assert_eq!(Sha256Hash.hash(data), Sha256Hash.hash(data));
        assert_eq!(Sha3_512Hash.hash(data), Sha3_512Hash.hash(data));
        assert_eq!(AsconStub.hash(data), AsconStub.hash(data));
    }
}
