//! Reference vector files.
//!
//! A vector pairs an address with what decoding it must produce: either an
//! identifier (`id`, decimal string) or an error kind (`error`).
//!
//! ```json
//! { "name": "reference",
//!   "vectors": [
//!     { "address": "K37B-9V85-FB95-793HN", "id": "6502115112683865257" },
//!     { "address": "2222-2222-7Q7P-Z2222", "error": "overflow" } ] }
//! ```

use std::path::{Path, PathBuf};

use rsaddr::{AccountId, DecodeErrorKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The vector set shipped with this crate.
const REFERENCE_JSON: &str = include_str!("../vectors/reference.json");

/// Errors while loading or interpreting vector files.
#[derive(Debug, Error)]
pub enum VectorError {
    /// The file could not be read.
    #[error("failed to read vector file {}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid vector set.
    #[error("failed to parse vector file {}", path.display())]
    Json {
        /// File that failed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
    /// A vector sets both or neither of `id` and `error`.
    #[error("vector '{address}': exactly one of `id` or `error` must be set")]
    Ambiguous {
        /// Address of the offending vector.
        address: String,
    },
    /// The `id` field is not a decimal u64.
    #[error("vector '{address}': invalid id '{id}'")]
    InvalidId {
        /// Address of the offending vector.
        address: String,
        /// The rejected id text.
        id: String,
    },
}

/// A named collection of vectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorSet {
    /// Label used in report lines.
    pub name: String,
    /// The vectors, in file order.
    pub vectors: Vec<Vector>,
}

/// One address and its expected outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vector {
    /// Address text as a user would type it, without network prefix.
    pub address: String,
    /// Expected identifier, decimal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Expected failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ExpectedError>,
}

/// Failure kinds as they appear in vector files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedError {
    /// Symbol count other than 17.
    TooShort,
    /// Syndrome check failed.
    ChecksumInvalid,
    /// Value ≥ 2^64.
    Overflow,
}

impl ExpectedError {
    /// Returns true if `kind` is this failure, ignoring symbol counts.
    pub fn matches(self, kind: DecodeErrorKind) -> bool {
        matches!(
            (self, kind),
            (Self::TooShort, DecodeErrorKind::TooShort { .. })
                | (Self::ChecksumInvalid, DecodeErrorKind::ChecksumInvalid)
                | (Self::Overflow, DecodeErrorKind::Overflow)
        )
    }
}

/// What a vector requires of the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// Decodes to this identifier.
    Decodes(AccountId),
    /// Fails with this kind.
    Fails(ExpectedError),
}

impl Vector {
    /// Interprets the `id`/`error` fields.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Ambiguous`] if both or neither field is set and
    /// [`VectorError::InvalidId`] if `id` is not a decimal u64.
    pub fn expectation(&self) -> Result<Expectation, VectorError> {
        match (&self.id, self.error) {
            (Some(id), None) => id
                .parse::<AccountId>()
                .map(Expectation::Decodes)
                .map_err(|_| VectorError::InvalidId {
                    address: self.address.clone(),
                    id: id.clone(),
                }),
            (None, Some(error)) => Ok(Expectation::Fails(error)),
            _ => Err(VectorError::Ambiguous {
                address: self.address.clone(),
            }),
        }
    }
}

impl VectorSet {
    /// The bundled reference vectors.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Json`] if the bundled file is malformed.
    pub fn reference() -> Result<Self, VectorError> {
        serde_json::from_str(REFERENCE_JSON).map_err(|source| VectorError::Json {
            path: PathBuf::from("vectors/reference.json"),
            source,
        })
    }

    /// Reads a vector set from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Io`] or [`VectorError::Json`].
    pub fn load(path: &Path) -> Result<Self, VectorError> {
        let content = std::fs::read_to_string(path).map_err(|source| VectorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| VectorError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Addresses whose vectors expect a successful decode.
    pub fn valid_addresses(&self) -> impl Iterator<Item = &str> {
        self.vectors
            .iter()
            .filter(|v| matches!(v.expectation(), Ok(Expectation::Decodes(_))))
            .map(|v| v.address.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_set_parses() {
        let set = VectorSet::reference().unwrap();
        assert_eq!(set.name, "reference");
        assert!(set.vectors.iter().all(|v| v.expectation().is_ok()));
        assert_eq!(set.valid_addresses().count(), 10);
    }

    #[test]
    fn error_names_match_library() {
        let kinds = [
            DecodeErrorKind::TooShort { found: 0 },
            DecodeErrorKind::TooShort { found: 18 },
            DecodeErrorKind::ChecksumInvalid,
            DecodeErrorKind::Overflow,
        ];
        for kind in kinds {
            let parsed: ExpectedError =
                serde_json::from_value(serde_json::Value::String(kind.name().into())).unwrap();
            assert!(parsed.matches(kind));
        }
    }

    #[test]
    fn surplus_symbols_expect_the_length_error() {
        let v: Vector = serde_json::from_str(
            r#"{ "address": "2222-2222-2222-222222", "error": "too_short" }"#,
        )
        .unwrap();
        let kind = rsaddr::decode_account_id(&v.address).unwrap_err();
        assert_eq!(v.expectation().unwrap(), Expectation::Fails(ExpectedError::TooShort));
        assert!(ExpectedError::TooShort.matches(kind));

        let unknown = serde_json::from_str::<Vector>(r#"{ "address": "2", "error": "too_long" }"#);
        assert!(unknown.is_err());
    }

    #[test]
    fn ambiguous_vector_is_rejected() {
        let v: Vector = serde_json::from_str(
            r#"{ "address": "2222-2222-2222-22222", "id": "0", "error": "overflow" }"#,
        )
        .unwrap();
        assert!(matches!(v.expectation(), Err(VectorError::Ambiguous { .. })));

        let v: Vector = serde_json::from_str(r#"{ "address": "2222" }"#).unwrap();
        assert!(matches!(v.expectation(), Err(VectorError::Ambiguous { .. })));
    }

    #[test]
    fn bad_id_is_rejected() {
        let v = Vector {
            address: "2222-2222-2222-22222".into(),
            id: Some("0x10".into()),
            error: None,
        };
        assert!(matches!(v.expectation(), Err(VectorError::InvalidId { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = VectorSet::load(Path::new("/nonexistent/vectors.json")).unwrap_err();
        assert!(matches!(err, VectorError::Io { .. }));
    }
}
