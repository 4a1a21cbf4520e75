//! Test suite orchestration
//!
//! Runs all three analyzers for each named candidate and bundles the
//! reports. Rendering is left to the `format` module.

use crate::analysis::{
    avalanche_test_with, bit_bias_test_with, runs_test_with, AvalancheParams, AvalancheReport,
    BitBiasParams, BitPredictionReport, RunsParams, RunsReport,
};
use crate::error::{Error, Result};
use crate::hash::HashFunction;
use crate::source::os::OsSource;
use crate::source::MessageSource;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::info;

/// A named hash function under test
pub struct Candidate {
    pub name: String,
    pub hash: Box<dyn HashFunction>,
}

impl Candidate {
    pub fn new(name: impl Into<String>, hash: Box<dyn HashFunction>) -> Self {
        Self {
            name: name.into(),
            hash,
        }
    }

    /// Use the hash function's own name as the candidate name
    pub fn from_hash(hash: Box<dyn HashFunction>) -> Self {
        Self {
            name: hash.name().to_string(),
            hash,
        }
    }
}

/// Parameters for every analyzer in a suite run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteParams {
    pub avalanche: AvalancheParams,
    pub bit_bias: BitBiasParams,
    pub runs: RunsParams,
}

impl SuiteParams {
    /// Check every analyzer's parameters
    pub fn validate(&self) -> Result<()> {
        self.avalanche.validate()?;
        self.bit_bias.validate()?;
        self.runs.validate()
    }
}

/// All three reports for one candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportBundle {
    pub avalanche: AvalancheReport,
    pub bitbias: BitPredictionReport,
    pub runs: RunsReport,
}

/// Result of a suite run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Unique ID for this run
    pub id: String,
    /// When this run started (RFC 3339)
    pub created_at: String,
    /// Name of the message source used
    pub source: String,
    pub params: SuiteParams,
    /// Report bundle per candidate name
    pub bundles: BTreeMap<String, ReportBundle>,
}

/// Run every analyzer with default parameters and the OS source
pub fn run_suite(candidates: &[Candidate]) -> Result<SuiteReport> {
    run_suite_with(candidates, &SuiteParams::default(), &OsSource::new())
}

/// Run every analyzer for every candidate
///
/// The first failure aborts the whole run; no partial report is returned.
///
/// # Errors
/// `Error::Config` on duplicate candidate names or invalid parameters, plus
/// any analyzer error.
pub fn run_suite_with(
    candidates: &[Candidate],
    params: &SuiteParams,
    source: &dyn MessageSource,
) -> Result<SuiteReport> {
    params.validate()?;

    let mut seen = HashSet::new();
    for candidate in candidates {
        if !seen.insert(candidate.name.as_str()) {
            return Err(Error::Config(format!(
                "Duplicate candidate name: {}",
                candidate.name
            )));
        }
    }

    let id = uuid::Uuid::new_v4().to_string();
    let created_at = chrono::Utc::now().to_rfc3339();
    info!(
        id = %id,
        candidates = candidates.len(),
        source = source.name(),
        "Starting suite"
    );

    let mut bundles = BTreeMap::new();
    for candidate in candidates {
        info!(candidate = %candidate.name, "Testing candidate");
        let bundle = run_candidate(candidate.hash.as_ref(), params, source)?;
        bundles.insert(candidate.name.clone(), bundle);
    }

    info!(id = %id, "Suite finished");

    Ok(SuiteReport {
        id,
        created_at,
        source: source.name().to_string(),
        params: *params,
        bundles,
    })
}

/// Run all three analyzers on a single hash function
pub fn run_candidate(
    hash: &dyn HashFunction,
    params: &SuiteParams,
    source: &dyn MessageSource,
) -> Result<ReportBundle> {
    Ok(ReportBundle {
        avalanche: avalanche_test_with(hash, source, &params.avalanche)?,
        bitbias: bit_bias_test_with(hash, source, &params.bit_bias)?,
        runs: runs_test_with(hash, source, &params.runs)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::adapters::Sha256Hash;
    use crate::hash::FnHash;
    use crate::source::seeded::SeededSource;

    fn small_params() -> SuiteParams {
        SuiteParams {
            avalanche: AvalancheParams::new(20, 16),
            bit_bias: BitBiasParams::new(10, 16),
            runs: RunsParams::new(20, 16),
        }
    }

    #[test]
    fn test_default_params() {
        let params = SuiteParams::default();
        assert_eq!(params.avalanche, AvalancheParams::new(2000, 64));
        assert_eq!(params.bit_bias, BitBiasParams::new(1000, 64));
        assert_eq!(params.runs, RunsParams::new(1000, 64));
    }

    #[test]
    fn test_suite_bundles_every_candidate() {
        let candidates = vec![
            Candidate::from_hash(Box::new(Sha256Hash)),
            Candidate::new("zeros", Box::new(FnHash::new("zeros", |_: &[u8]| vec![0u8; 8]))),
        ];
        let source = SeededSource::new(1);
        let report = run_suite_with(&candidates, &small_params(), &source).unwrap();

        assert_eq!(report.bundles.len(), 2);
        assert_eq!(report.source, "seeded");
        assert!(!report.id.is_empty());

        let sha = &report.bundles["sha2-256"];
        assert_eq!(sha.avalanche.distances.len(), 20);
        assert_eq!(sha.bitbias.probabilities.len(), 256);
        assert_eq!(sha.runs.sample_count, 20);

        let zeros = &report.bundles["zeros"];
        assert_eq!(zeros.avalanche.mean, 0.0);
        assert_eq!(zeros.bitbias.summary.max, 0.0);
        assert_eq!(zeros.runs.mean_abs_z, 0.0);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let candidates = vec![
            Candidate::new("same", Box::new(Sha256Hash)),
            Candidate::new("same", Box::new(Sha256Hash)),
        ];
        let source = SeededSource::new(2);
        let result = run_suite_with(&candidates, &small_params(), &source);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_failure_aborts_suite() {
        let candidates = vec![
            Candidate::from_hash(Box::new(Sha256Hash)),
            Candidate::new("empty", Box::new(FnHash::new("empty", |_: &[u8]| Vec::new()))),
        ];
        let source = SeededSource::new(3);
        assert!(run_suite_with(&candidates, &small_params(), &source).is_err());
    }

    #[test]
    fn test_invalid_params_rejected_before_work() {
        let mut params = small_params();
        params.runs.sample_count = 0;
        let candidates = vec![Candidate::from_hash(Box::new(Sha256Hash))];
        let source = SeededSource::new(4);
        assert!(matches!(
            run_suite_with(&candidates, &params, &source),
            Err(Error::Config(_))
        ));
    }
}
