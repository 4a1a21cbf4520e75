//! Operating-system CSPRNG source
//!
//! Message bytes come from `OsRng`. Bit positions for mutation come from
//! the thread-local generator, which is uniform but not required to be
//! cryptographically secure.

use crate::error::{Error, Result};
use crate::source::MessageSource;
use rand::rngs::OsRng;
use rand::{Rng, RngCore};

/// Source backed by the operating system's secure generator
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSource;

impl OsSource {
    /// Create a new OS source
    pub fn new() -> Self {
        Self
    }
}

impl MessageSource for OsSource {
    fn name(&self) -> &'static str {
        "os"
    }

    fn description(&self) -> &'static str {
        "Operating system CSPRNG"
    }

    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| Error::RandomSource(format!("OS entropy source failed: {}", e)))
    }

    fn index(&self, upper: usize) -> Result<usize> {
        if upper == 0 {
            return Err(Error::Config("index range must be non-empty".to_string()));
        }
        Ok(rand::thread_rng().gen_range(0..upper))
    }
}
