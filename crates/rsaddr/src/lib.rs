//! Reed-Solomon account addresses.
//!
//! An account address is a 17-character, checksum-protected rendering of a
//! 64-bit account identifier. Thirteen characters carry the identifier as
//! base-32 digits; the remaining four are parity symbols of a shortened
//! (31, 13) Reed-Solomon code over GF(32). This crate validates addresses
//! and recovers the identifier. It does not encode.
//!
//! # Pipeline
//!
//! ```text
//! "K37B-9V85-FB95-793HN"
//!      │ alphabet: drop separators, map chars → symbols, permute into slots
//!      ▼
//! Codeword [17 × 5-bit]
//!      │ checksum: four syndromes over GF(32), all must vanish
//!      ▼
//! Σ codeword[k] · 32^k, k = 0..13   (128-bit accumulator, must be < 2^64)
//!      │
//!      ▼
//! "5a3c273ecc3884a9"
//! ```
//!
//! # Modules
//!
//! | Module | Role |
//! |--------|------|
//! | [`alphabet`] | Symbol filtering and codeword slot permutation |
//! | [`gf32`] | Log/antilog tables and multiplication over GF(32) |
//! | [`checksum`] | Syndrome evaluation |
//! | [`decode`] | End-to-end decoding and identifier reconstruction |
//!
//! # Example
//!
//! ```
//! use rsaddr::{decode_address, DecodeErrorKind};
//!
//! assert_eq!(
//!     decode_address("K37B-9V85-FB95-793HN", 1).unwrap(),
//!     "5a3c273ecc3884a9"
//! );
//!
//! let err = decode_address("K37B-9V85-FB95-793HM", 7).unwrap_err();
//! assert_eq!(err.kind(), DecodeErrorKind::ChecksumInvalid);
//! assert_eq!(
//!     err.to_string(),
//!     "At line: 7. Error decoding address: S-K37B-9V85-FB95-793HM"
//! );
//! ```
//!
//! Network prefixes (`S-`, `BURST-`, ...) are not part of the address as
//! far as this crate is concerned. Callers strip them first.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod alphabet;
pub mod checksum;
pub mod decode;
pub mod gf32;

mod account;
mod error;

pub use account::{AccountId, ParseAccountIdError};
pub use alphabet::{Codeword, Symbol, SymbolCount};
pub use decode::{decode_account_id, decode_address, reconstruct};
pub use error::{AddressDecodeError, DecodeErrorKind};

/// Number of symbols in a codeword.
pub const CODEWORD_LEN: usize = 17;

/// Number of codeword symbols that carry identifier digits.
pub const DATA_LEN: usize = 13;

/// Number of parity symbols (and syndromes).
pub const PARITY_LEN: usize = 4;

#[cfg(test)]
mod tests;
