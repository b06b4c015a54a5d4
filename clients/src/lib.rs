//! Shared plumbing for the rsaddr client binaries.
//!
//! The library decodes bare addresses. Everything a caller has to do around
//! that lives here: removing network prefixes, rendering results, and
//! setting up logging.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod output;
pub mod prefix;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// `default_level` applies when `RUST_LOG` is unset.
pub fn init_logging(default_level: tracing::Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
