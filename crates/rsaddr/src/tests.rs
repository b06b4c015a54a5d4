//! Tests for end-to-end address decoding.

use super::{decode_account_id, decode_address, AccountId, DecodeErrorKind};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Known address/identifier pairs.
const VECTORS: &[(&str, u64, &str)] = &[
    ("2222-2222-2222-22222", 0, "0000000000000000"),
    ("2223-2222-KB8Y-22222", 1, "0000000000000001"),
    ("222Z-2222-TWAF-22222", 31, "000000000000001f"),
    ("2232-2222-A69P-22222", 32, "0000000000000020"),
    ("2E3T-2222-2YW9-22222", 12345, "0000000000003039"),
    ("K37B-9V85-FB95-793HN", 6502115112683865257, "5a3c273ecc3884a9"),
    ("M2AP-YKYY-P84J-3JJA4", 1234567890123456789, "112210f47de98115"),
    ("2222-2222-YVYK-A2222", 1 << 63, "8000000000000000"),
    ("RE6K-UW9A-9KU4-FMZ9L", 15645491735495946385, "d91ff3d70e8bb091"),
    ("ZZZZ-ZZZZ-QY2K-HZZZZ", u64::MAX, "ffffffffffffffff"),
];

fn strip_separators(s: &str) -> String {
    s.chars().filter(|c| *c != '-').collect()
}

// ============================================================================
// Successful decoding
// ============================================================================

#[test]
fn test_known_vectors() {
    for &(address, id, hex) in VECTORS {
        assert_eq!(decode_address(address, 1).unwrap(), hex, "{address}");
        assert_eq!(decode_account_id(address).unwrap(), AccountId::new(id));
    }
}

#[test]
fn test_all_zero_address() {
    let address: String = core::iter::repeat('2').take(17).collect();
    assert_eq!(decode_address(&address, 1).unwrap(), "0000000000000000");
}

#[test]
fn test_hex_is_big_endian() {
    let hex = decode_address("2222-2222-YVYK-A2222", 1).unwrap();
    assert!(hex.starts_with('8'));
    assert_eq!(u64::from_str_radix(&hex, 16).unwrap(), 1 << 63);
}

#[test]
fn test_hex_shape() {
    for &(address, _, _) in VECTORS {
        let hex = decode_address(address, 1).unwrap();
        assert_eq!(hex.len(), 16);
        assert!(hex
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

// ============================================================================
// Separator handling
// ============================================================================

#[test]
fn test_separators_are_ignored() {
    for &(address, _, hex) in VECTORS {
        let bare = strip_separators(address);
        assert_eq!(decode_address(&bare, 1).unwrap(), hex);

        let spaced: String = bare.chars().flat_map(|c| [c, ' ']).collect();
        assert_eq!(decode_address(&spaced, 1).unwrap(), hex);

        let noisy = alloc::format!("--{}..!", bare.replace('9', "_9_"));
        assert_eq!(decode_address(&noisy, 1).unwrap(), hex);
    }
}

#[test]
fn test_dash_every_four() {
    let bare = "K37B9V85FB95793HN";
    let chunks: Vec<&str> = bare
        .as_bytes()
        .chunks(4)
        .map(|c| core::str::from_utf8(c).unwrap())
        .collect();
    let dashed = chunks.join("-");
    assert_eq!(dashed, "K37B-9V85-FB95-793H-N");
    assert_eq!(
        decode_address(&dashed, 1).unwrap(),
        decode_address(bare, 1).unwrap()
    );
}

// ============================================================================
// Length guard
// ============================================================================

#[test]
fn test_too_short() {
    let err = decode_address("K37B-9V85-FB", 3).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::TooShort { found: 10 });

    assert_eq!(
        decode_account_id(""),
        Err(DecodeErrorKind::TooShort { found: 0 })
    );
    assert_eq!(
        decode_account_id("----"),
        Err(DecodeErrorKind::TooShort { found: 0 })
    );
}

#[test]
fn test_too_short_ignores_checksum() {
    // Every prefix of a valid address is rejected on length alone.
    let bare = strip_separators("K37B-9V85-FB95-793HN");
    for n in 0..17 {
        assert_eq!(
            decode_account_id(&bare[..n]),
            Err(DecodeErrorKind::TooShort { found: n })
        );
    }
}

#[test]
fn test_surplus_symbols_share_the_length_error() {
    let err = decode_address("2222-2222-2222-222222", 5).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::TooShort { found: 18 });
    assert_eq!(err.kind().name(), "too_short");
    assert_eq!(
        decode_account_id("K37B-9V85-FB95-793HN-K37B"),
        Err(DecodeErrorKind::TooShort { found: 21 })
    );
}

#[test]
fn test_lowercase_is_not_folded() {
    assert_eq!(
        decode_account_id("k37b-9v85-fb95-793hn"),
        Err(DecodeErrorKind::TooShort { found: 10 })
    );
}

// ============================================================================
// Checksum
// ============================================================================

#[test]
fn test_every_single_substitution_is_caught() {
    const ALPHABET: &str = "23456789ABCDEFGHJKLMNPQRSTUVWXYZ";
    for &(address, _, _) in VECTORS {
        let bare: Vec<char> = strip_separators(address).chars().collect();
        for pos in 0..bare.len() {
            for replacement in ALPHABET.chars().filter(|c| *c != bare[pos]) {
                let mut corrupted = bare.clone();
                corrupted[pos] = replacement;
                let corrupted: String = corrupted.into_iter().collect();
                assert_eq!(
                    decode_account_id(&corrupted),
                    Err(DecodeErrorKind::ChecksumInvalid),
                    "{corrupted} passed"
                );
            }
        }
    }
}

#[test]
fn test_adjacent_transposition_is_caught() {
    let bare: Vec<char> = strip_separators("K37B-9V85-FB95-793HN").chars().collect();
    for pos in 0..bare.len() - 1 {
        if bare[pos] == bare[pos + 1] {
            continue;
        }
        let mut swapped = bare.clone();
        swapped.swap(pos, pos + 1);
        let swapped: String = swapped.into_iter().collect();
        assert_eq!(
            decode_account_id(&swapped),
            Err(DecodeErrorKind::ChecksumInvalid),
            "{swapped}"
        );
    }
}

// ============================================================================
// Overflow guard
// ============================================================================

#[test]
fn test_overflow() {
    // 31 · 32^12, checksum valid
    assert_eq!(
        decode_account_id("2222-2222-7Q7P-Z2222"),
        Err(DecodeErrorKind::Overflow)
    );
    // exactly 2^64, checksum valid
    assert_eq!(
        decode_account_id("2222-2222-TMT9-J2222"),
        Err(DecodeErrorKind::Overflow)
    );
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_error_message_keeps_original_text() {
    let err = decode_address("K37B-9V85-FB95-793HM", 42).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::ChecksumInvalid);
    assert_eq!(err.line(), 42);
    assert_eq!(err.text(), "K37B-9V85-FB95-793HM");
    assert_eq!(
        err.to_string(),
        "At line: 42. Error decoding address: S-K37B-9V85-FB95-793HM"
    );
}

#[test]
fn test_error_kind_names() {
    let names: Vec<&str> = [
        DecodeErrorKind::TooShort { found: 0 },
        DecodeErrorKind::ChecksumInvalid,
        DecodeErrorKind::Overflow,
    ]
    .iter()
    .map(|k| k.name())
    .collect();
    assert_eq!(names, ["too_short", "checksum_invalid", "overflow"]);
}

#[test]
fn test_kind_display() {
    assert_eq!(
        DecodeErrorKind::TooShort { found: 10 }.to_string(),
        "expected 17 symbols, found 10"
    );
    assert_eq!(
        DecodeErrorKind::TooShort { found: 18 }.to_string(),
        "expected 17 symbols, found 18"
    );
    assert_eq!(DecodeErrorKind::Overflow.to_string(), "value exceeds 64 bits");
}

// ============================================================================
// AccountId
// ============================================================================

#[test]
fn test_account_id_formats() {
    let id = AccountId::new(255);
    assert_eq!(id.to_hex(), "00000000000000ff");
    assert_eq!(alloc::format!("{id:x}"), "ff");
    assert_eq!(id.to_string(), "255");
    assert_eq!(u64::from(id), 255);
}

#[test]
fn test_account_id_parse() {
    assert_eq!(" 42 ".parse::<AccountId>(), Ok(AccountId::new(42)));
    assert!("-1".parse::<AccountId>().is_err());
    assert!("18446744073709551616".parse::<AccountId>().is_err());
}
