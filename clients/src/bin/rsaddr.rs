//! `rsaddr` — Decodes Reed-Solomon account addresses into 64-bit account ids.
//!
//! **Usage:**
//! ```text
//! rsaddr decode [--line <n>] [--format hex|decimal|json] <ADDRESS>...
//! rsaddr check [--format hex|decimal|json] [FILE]
//! ```
//!
//! Network prefixes (`S-`, `BURST-`, `TS-`, plus any given with `--prefix`)
//! are removed before decoding. Exits non-zero if any address is rejected.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rsaddr::{decode_account_id, AddressDecodeError};
use rsaddr_clients::output::{Format, Record};
use rsaddr_clients::prefix::PrefixStripper;
use tracing::{debug, info, warn};

/// Decode Reed-Solomon account addresses.
#[derive(Parser)]
#[command(name = "rsaddr", about = "Decode Reed-Solomon account addresses")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Extra network prefix to strip (repeatable, comma-separated).
    #[arg(long, global = true, value_delimiter = ',')]
    prefix: Vec<String>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value = "hex")]
    format: Format,
}

#[derive(Subcommand)]
enum Command {
    /// Decode the addresses given on the command line.
    Decode {
        /// Addresses, with or without network prefix.
        #[arg(required = true)]
        addresses: Vec<String>,

        /// Line number reported in diagnostics for the first address.
        #[arg(long, default_value_t = 1)]
        line: usize,
    },
    /// Decode one address per line from a file (or stdin).
    ///
    /// Blank lines and lines starting with `#` are skipped.
    Check {
        /// Input file; reads stdin when omitted.
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    rsaddr_clients::init_logging(tracing::Level::INFO);
    let args = Args::parse();
    let stripper = PrefixStripper::with_extra(args.prefix);

    let failed = match args.command {
        Command::Decode { addresses, line } => {
            let lines = addresses
                .into_iter()
                .enumerate()
                .map(|(i, address)| io::Result::Ok((line + i, address)));
            run(lines, &stripper, args.format)?
        }
        Command::Check { file } => {
            let reader: Box<dyn BufRead> = match &file {
                Some(path) => Box::new(BufReader::new(
                    File::open(path)
                        .with_context(|| format!("Failed to open {}", path.display()))?,
                )),
                None => Box::new(BufReader::new(io::stdin())),
            };
            let lines = reader
                .lines()
                .enumerate()
                .map(|(i, line)| line.map(|l| (i + 1, l)))
                .filter(|entry| match entry {
                    Ok((_, l)) => {
                        let l = l.trim();
                        !l.is_empty() && !l.starts_with('#')
                    }
                    Err(_) => true,
                });
            let failed = run(lines, &stripper, args.format)?;
            let source = file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<stdin>".to_string());
            info!(%source, failed, "check finished");
            failed
        }
    };

    if failed > 0 {
        eprintln!("{} address(es) could not be decoded.", failed);
        process::exit(1);
    }
    Ok(())
}

/// Decodes each `(line, text)` entry, printing one result per entry.
///
/// Returns the number of rejected addresses.
///
/// # Errors
///
/// Returns an error if reading input or rendering output fails.
fn run(
    entries: impl Iterator<Item = io::Result<(usize, String)>>,
    stripper: &PrefixStripper,
    format: Format,
) -> Result<usize> {
    let mut failed = 0usize;
    let mut total = 0usize;

    for entry in entries {
        let (line, text) = entry.context("Failed to read input")?;
        total += 1;
        let bare = stripper.strip(&text);
        let outcome = decode_account_id(bare)
            .map_err(|kind| AddressDecodeError::new(kind, line, bare));

        match &outcome {
            Ok(id) => debug!(line, address = %bare, %id, "decoded"),
            Err(err) => {
                failed += 1;
                warn!(line, address = %bare, kind = err.kind().name(), "rejected");
            }
        }

        let record = Record::new(text.trim(), &outcome);
        let rendered = record.render(format).context("Failed to render result")?;
        if record.is_error() && format != Format::Json {
            eprintln!("{rendered}");
        } else {
            println!("{rendered}");
        }
    }

    if format != Format::Json && total > 1 {
        println!("Summary: {} decoded, {} rejected", total - failed, failed);
    }
    Ok(failed)
}
