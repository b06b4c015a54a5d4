//! Error-detection sweeps over valid addresses.
//!
//! The code has minimum distance 5, so every edit touching at most four
//! codeword symbols must be rejected. Two sweeps cover the common typing
//! mistakes: one wrong character, and two neighbouring characters swapped.

use rsaddr::alphabet::{symbols, ALPHABET};
use rsaddr::{decode_account_id, DecodeErrorKind};

use crate::report::{CheckResult, ConformanceReport};
use crate::vectors::VectorSet;

const VALIDATOR: &str = "checksum/detection";

/// Runs the substitution and transposition sweeps over every valid address
/// in `set`.
pub fn validate(set: &VectorSet) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let addresses: Vec<String> = set
        .valid_addresses()
        .map(|a| symbols(a).map(|s| s.character()).collect())
        .collect();

    if addresses.is_empty() {
        report.push(CheckResult::warn(
            VALIDATOR,
            format!("{}: no valid addresses to corrupt", set.name),
        ));
        return report;
    }

    let mut tried = 0usize;
    let mut escaped = Vec::new();
    for address in &addresses {
        for corrupted in substitutions(address) {
            tried += 1;
            if decode_account_id(&corrupted) != Err(DecodeErrorKind::ChecksumInvalid) {
                escaped.push(format!("{address} → {corrupted}"));
            }
        }
    }
    report.push(CheckResult::from_details(
        VALIDATOR,
        format!("{}: all {tried} single substitutions rejected", set.name),
        format!("{}: {} substitutions escaped", set.name, escaped.len()),
        escaped,
    ));

    let mut tried = 0usize;
    let mut escaped = Vec::new();
    for address in &addresses {
        for swapped in transpositions(address) {
            tried += 1;
            if decode_account_id(&swapped) != Err(DecodeErrorKind::ChecksumInvalid) {
                escaped.push(format!("{address} → {swapped}"));
            }
        }
    }
    report.push(CheckResult::from_details(
        VALIDATOR,
        format!("{}: all {tried} adjacent transpositions rejected", set.name),
        format!("{}: {} transpositions escaped", set.name, escaped.len()),
        escaped,
    ));

    report
}

/// Every string that differs from `bare` in exactly one symbol.
fn substitutions(bare: &str) -> impl Iterator<Item = String> + '_ {
    let chars: Vec<char> = bare.chars().collect();
    (0..chars.len()).flat_map(move |pos| {
        let chars = chars.clone();
        let current = chars[pos];
        ALPHABET
            .iter()
            .map(|&b| b as char)
            .filter(move |&c| c != current)
            .map(move |c| {
                let mut out = chars.clone();
                out[pos] = c;
                out.into_iter().collect()
            })
    })
}

/// Every string obtained by swapping two neighbouring, distinct symbols.
fn transpositions(bare: &str) -> impl Iterator<Item = String> + '_ {
    let chars: Vec<char> = bare.chars().collect();
    (0..chars.len().saturating_sub(1))
        .filter(move |&pos| chars[pos] != chars[pos + 1])
        .map(move |pos| {
            let mut out: Vec<char> = bare.chars().collect();
            out.swap(pos, pos + 1);
            out.into_iter().collect()
        })
}
