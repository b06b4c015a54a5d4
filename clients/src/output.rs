//! Rendering decode results.

use clap::ValueEnum;
use rsaddr::{AccountId, AddressDecodeError};
use serde::Serialize;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// 16 lowercase hex digits.
    Hex,
    /// Unsigned decimal.
    Decimal,
    /// One JSON object per line.
    Json,
}

/// One decoded (or rejected) address, as printed in JSON mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Record {
    /// The address decoded.
    Ok {
        /// Address as given, prefix included.
        address: String,
        /// Identifier, decimal.
        id: String,
        /// Identifier, 16 hex digits.
        hex: String,
    },
    /// The address was rejected.
    Error {
        /// Address as given, prefix included.
        address: String,
        /// Source line of the address.
        line: usize,
        /// Failure kind name, e.g. `checksum_invalid`.
        kind: &'static str,
        /// Diagnostic message.
        message: String,
    },
}

impl Record {
    /// Builds a record from a decode outcome.
    pub fn new(address: &str, outcome: &Result<AccountId, AddressDecodeError>) -> Self {
        match outcome {
            Ok(id) => Self::Ok {
                address: address.to_string(),
                id: id.to_string(),
                hex: id.to_hex(),
            },
            Err(err) => Self::Error {
                address: address.to_string(),
                line: err.line(),
                kind: err.kind().name(),
                message: err.to_string(),
            },
        }
    }

    /// Renders a successful record; rejected records render as their
    /// diagnostic in every format but JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, format: Format) -> serde_json::Result<String> {
        match (format, self) {
            (Format::Json, record) => serde_json::to_string(record),
            (Format::Hex, Self::Ok { hex, .. }) => Ok(hex.clone()),
            (Format::Decimal, Self::Ok { id, .. }) => Ok(id.clone()),
            (_, Self::Error { message, kind, .. }) => Ok(format!("{message} ({kind})")),
        }
    }

    /// Returns true for rejected addresses.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}
