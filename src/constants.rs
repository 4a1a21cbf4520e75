//! Centralized constants for the hash-diffusion crate
//!
//! Values shared by the analyzers, the config layer and the formatters.

/// Output-width probing
pub mod probe {
    /// Fixed input hashed once to discover a function's output length
    pub const PROBE_INPUT: &[u8] = b"test";
}

/// Reference values of an ideal random oracle
pub mod ideal {
    /// Ideal probability (in percent) that any output bit equals 1
    pub const BIT_PROBABILITY_PERCENT: f64 = 50.0;

    /// Ideal fraction of output bits flipped by a one-bit input change
    pub const AVALANCHE_FRACTION: f64 = 0.5;
}

/// Seeding
pub mod seed {
    /// Seed used by the seeded source when none is given
    pub const DEFAULT_SEED: u64 = 42;
}
