//! End-to-end address decoding.
//!
//! ```text
//! text ─► count symbols ─► 17? ─► codeword ─► syndromes = 0? ─► Σ c_k·32^k < 2^64? ─► hex
//!              │              │                    │                      │
//!              └─ TooShort                         └─ ChecksumInvalid     └─ Overflow
//! ```
//!
//! Each stage either hands its result to the next or stops with one error.

use alloc::string::String;

use crate::alphabet::Codeword;
use crate::{checksum, AccountId, AddressDecodeError, DecodeErrorKind};

/// Decodes an address into the 16-digit hex form of its identifier.
///
/// `source_line` is carried into the error for diagnostics and has no
/// effect on decoding.
///
/// # Errors
///
/// Returns an [`AddressDecodeError`] whose [`kind`](AddressDecodeError::kind)
/// says which stage rejected the input.
///
/// # Example
///
/// ```
/// use rsaddr::{decode_address, DecodeErrorKind};
///
/// assert_eq!(decode_address("2222-2222-2222-22222", 1).unwrap(), "0000000000000000");
/// assert_eq!(decode_address("ZZZZ-ZZZZ-QY2K-HZZZZ", 1).unwrap(), "ffffffffffffffff");
///
/// let err = decode_address("2222-2222-22", 12).unwrap_err();
/// assert_eq!(err.kind(), DecodeErrorKind::TooShort { found: 10 });
/// assert_eq!(err.line(), 12);
/// ```
pub fn decode_address(text: &str, source_line: usize) -> Result<String, AddressDecodeError> {
    decode_account_id(text)
        .map(AccountId::to_hex)
        .map_err(|kind| AddressDecodeError::new(kind, source_line, text))
}

/// Decodes an address into its identifier without attaching context.
///
/// # Errors
///
/// Returns the [`DecodeErrorKind`] of the first failing stage.
///
/// # Example
///
/// ```
/// use rsaddr::{decode_account_id, DecodeErrorKind};
///
/// let id = decode_account_id("K37B-9V85-FB95-793HN").unwrap();
/// assert_eq!(id.get(), 6502115112683865257);
///
/// assert_eq!(
///     decode_account_id("2222-2222-7Q7P-Z2222"),
///     Err(DecodeErrorKind::Overflow)
/// );
/// ```
pub fn decode_account_id(text: &str) -> Result<AccountId, DecodeErrorKind> {
    let codeword =
        Codeword::map(text).map_err(|count| DecodeErrorKind::TooShort { found: count.found })?;

    if !checksum::is_valid(&codeword) {
        return Err(DecodeErrorKind::ChecksumInvalid);
    }

    reconstruct(&codeword)
        .map(AccountId::new)
        .ok_or(DecodeErrorKind::Overflow)
}

/// Reads the identifier out of the data slots of a codeword.
///
/// Computes `Σ codeword[k] · 32^k` for `k = 0..13`. Thirteen 5-bit digits
/// span 65 bits, so the sum is accumulated in 128 bits and `None` is
/// returned when it reaches 2^64. The checksum is not consulted.
///
/// # Example
///
/// ```
/// use rsaddr::alphabet::Codeword;
/// use rsaddr::reconstruct;
///
/// let mut digits = [0u8; 17];
/// digits[1] = 1;
/// assert_eq!(reconstruct(&Codeword::from_values(digits)), Some(32));
///
/// digits[12] = 16;
/// assert_eq!(reconstruct(&Codeword::from_values(digits)), None);
/// ```
#[must_use]
pub fn reconstruct(codeword: &Codeword) -> Option<u64> {
    let value = codeword
        .data()
        .iter()
        .enumerate()
        .fold(0u128, |acc, (k, digit)| {
            acc + (u128::from(digit.value()) << (5 * k))
        });
    u64::try_from(value).ok()
}
