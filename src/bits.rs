//! Bit sequence helpers
//!
//! Bytes unpack most-significant bit first, so bit `i` of a digest is
//! `(digest[i / 8] >> (7 - i % 8)) & 1`. Each unpacked bit is a `u8`
//! holding 0 or 1.

use crate::error::{Error, Result};

/// Unpack a byte slice into individual bits (MSB first per byte)
pub fn to_bits(data: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(data.len() * 8);
    for &byte in data {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

/// Read bit `index` of a byte slice without unpacking it
///
/// Uses the same MSB-first numbering as [`to_bits`]. Panics if `index`
/// is past the end of the slice.
pub fn bit_at(data: &[u8], index: usize) -> bool {
    (data[index / 8] >> (7 - index % 8)) & 1 == 1
}

/// Count positions where two equal-length bit sequences differ
///
/// # Errors
/// `Error::LengthMismatch` if the sequences differ in length.
pub fn hamming_distance(a: &[u8], b: &[u8]) -> Result<usize> {
    ensure_same_length(a, b)?;
    Ok(a.iter().zip(b).filter(|(x, y)| x != y).count())
}

/// Hamming distance between two packed byte slices
///
/// Equal to `hamming_distance(&to_bits(a), &to_bits(b))` but works on the
/// packed bytes via XOR popcount.
pub fn byte_hamming_distance(a: &[u8], b: &[u8]) -> Result<usize> {
    ensure_same_length(a, b)?;
    Ok(a.iter()
        .zip(b)
        .map(|(x, y)| (x ^ y).count_ones() as usize)
        .sum())
}

/// Number of 1s in an unpacked bit sequence
pub fn count_ones(bits: &[u8]) -> usize {
    bits.iter().filter(|&&b| b == 1).count()
}

/// Number of maximal runs of identical bits (transitions + 1)
///
/// An empty sequence has no runs.
pub fn count_runs(bits: &[u8]) -> usize {
    if bits.is_empty() {
        return 0;
    }
    1 + bits.windows(2).filter(|w| w[0] != w[1]).count()
}

fn ensure_same_length(a: &[u8], b: &[u8]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}
