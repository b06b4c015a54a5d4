//! Input-handling invariants: separators, length guard, determinism.

use rsaddr::alphabet::symbols;
use rsaddr::{decode_account_id, decode_address, DecodeErrorKind, CODEWORD_LEN};

use crate::report::{CheckResult, ConformanceReport};
use crate::vectors::VectorSet;

const VALIDATOR: &str = "decode/invariance";

/// Checks that formatting noise, truncation and padding behave as required
/// for every valid address in `set`.
pub fn validate(set: &VectorSet) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let mut details = Vec::new();
    for address in set.valid_addresses() {
        let expected = decode_account_id(address);
        for variant in reformat(address) {
            let got = decode_account_id(&variant);
            if got != expected {
                details.push(format!("{address:?} vs {variant:?}: {expected:?} ≠ {got:?}"));
            }
        }
    }
    report.push(CheckResult::from_details(
        VALIDATOR,
        format!("{}: separators do not change results", set.name),
        format!("{}: separator sensitivity", set.name),
        details,
    ));

    let mut details = Vec::new();
    for address in set.valid_addresses() {
        let bare: String = symbols(address).map(|s| s.character()).collect();
        for n in 0..CODEWORD_LEN {
            let got = decode_account_id(&bare[..n]);
            if got != Err(DecodeErrorKind::TooShort { found: n }) {
                details.push(format!("{:?}: {got:?}", &bare[..n]));
            }
        }
        let padded = format!("{bare}2");
        let got = decode_account_id(&padded);
        if got != Err(DecodeErrorKind::TooShort { found: CODEWORD_LEN + 1 }) {
            details.push(format!("{padded:?}: {got:?}"));
        }
    }
    report.push(CheckResult::from_details(
        VALIDATOR,
        format!("{}: length guard holds for prefixes and padding", set.name),
        format!("{}: length guard violated", set.name),
        details,
    ));

    let mut details = Vec::new();
    for vector in &set.vectors {
        let first = decode_address(&vector.address, 1).map_err(|e| e.kind());
        let again = decode_address(&vector.address, usize::MAX).map_err(|e| e.kind());
        if first != again {
            details.push(format!("{:?}: {first:?} then {again:?}", vector.address));
        }
    }
    report.push(CheckResult::from_details(
        VALIDATOR,
        format!("{}: decoding is deterministic", set.name),
        format!("{}: nondeterministic results", set.name),
        details,
    ));

    report
}

/// The same address written several ways.
fn reformat(address: &str) -> Vec<String> {
    let bare: Vec<char> = symbols(address).map(|s| s.character()).collect();
    let grouped = |sep: &str| -> String {
        bare.chunks(4)
            .map(|c| c.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(sep)
    };
    vec![
        bare.iter().collect(),
        grouped("-"),
        grouped(" "),
        format!("  {}\t", grouped("--")),
        bare.iter().flat_map(|&c| [c, '.']).collect(),
    ]
}
