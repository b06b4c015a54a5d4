//! rsaddr conformance suite.
//!
//! Runs the decoder against reference vectors and sweeps the properties a
//! checksum-protected address format must have. Results are collected in a
//! [`ConformanceReport`].
//!
//! # Checks
//!
//! | Check | What it establishes |
//! |-------|---------------------|
//! | `checksum/field` | GF(32) tables equal the published constants; field laws hold |
//! | `vectors/<set>` | Each vector decodes to its expected identifier or error |
//! | `checksum/detection` | Every single substitution and adjacent swap is rejected |
//! | `decode/invariance` | Separators are ignored; length guard; determinism |
//!
//! # Entry Point
//!
//! ```no_run
//! use rsaddr_conformance::{run_all, SuiteConfig};
//!
//! let report = run_all(&SuiteConfig::default()).expect("vector files load");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod checks;
pub mod report;
pub mod vectors;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

pub use report::{CheckResult, ConformanceReport, Severity, Summary};
pub use vectors::{Expectation, ExpectedError, Vector, VectorError, VectorSet};

/// Which vector sets the suite runs over.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Run the bundled reference vectors.
    pub reference: bool,
    /// Additional vector files.
    pub extra_vectors: Vec<PathBuf>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            reference: true,
            extra_vectors: Vec::new(),
        }
    }
}

/// Runs every check and returns the aggregated report.
///
/// Checks run in this order:
/// 1. GF(32) tables and field laws
/// 2. For each vector set: known answers, detection sweeps, invariants
///
/// # Errors
///
/// Returns an error if a vector file cannot be read or parsed, or if a
/// vector does not state exactly one expectation.
pub fn run_all(config: &SuiteConfig) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    report.extend(checks::field::validate());

    let mut sets = Vec::new();
    if config.reference {
        sets.push(VectorSet::reference().context("bundled reference vectors")?);
    }
    for path in &config.extra_vectors {
        sets.push(
            VectorSet::load(path)
                .with_context(|| format!("loading vectors from {}", path.display()))?,
        );
    }

    for set in &sets {
        info!(set = %set.name, vectors = set.vectors.len(), "running vector set");
        report.extend(checks::vectors::validate(set)?);
        report.extend(checks::detection::validate(set));
        report.extend(checks::invariance::validate(set));
    }

    let summary = report.summary();
    info!(
        passed = summary.passed,
        warned = summary.warned,
        failed = summary.failed,
        "conformance run finished"
    );
    Ok(report)
}
