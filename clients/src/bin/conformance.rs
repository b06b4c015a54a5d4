//! `rsaddr-conformance` — Runs the rsaddr conformance suite.
//!
//! Checks the GF(32) tables, the bundled reference vectors, and any vector
//! files given on the command line, then sweeps single-symbol substitutions,
//! adjacent transpositions and separator handling over every valid address.
//!
//! **Usage:**
//! ```text
//! rsaddr-conformance [--vectors <path>]... [--no-reference]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use rsaddr_conformance::{run_all, SuiteConfig};

/// Run the rsaddr conformance suite.
#[derive(Parser)]
#[command(
    name = "rsaddr-conformance",
    about = "Validate the rsaddr decoder against reference vectors"
)]
struct Args {
    /// Additional vector file (JSON); may be repeated.
    #[arg(long = "vectors")]
    vectors: Vec<PathBuf>,

    /// Skip the bundled reference vectors.
    #[arg(long)]
    no_reference: bool,
}

fn main() -> Result<()> {
    rsaddr_clients::init_logging(tracing::Level::WARN);
    let args = Args::parse();

    let config = SuiteConfig {
        reference: !args.no_reference,
        extra_vectors: args.vectors,
    };

    let report = run_all(&config)?;

    println!("rsaddr Conformance Report");
    println!("=========================");
    println!();

    for result in &report.results {
        println!("{}", result);
    }

    let summary = report.summary();
    println!();
    println!("{}", summary);

    if summary.failed > 0 {
        eprintln!(
            "Conformance FAILED: {} check(s) did not pass.",
            summary.failed
        );
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
