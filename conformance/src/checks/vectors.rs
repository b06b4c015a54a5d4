//! Known-answer check: every vector decodes to its expected outcome.

use anyhow::Result;
use rsaddr::decode_address;
use tracing::debug;

use crate::report::{CheckResult, ConformanceReport};
use crate::vectors::{Expectation, VectorSet};

/// Decodes every vector in `set` and compares against its expectation.
///
/// # Errors
///
/// Returns an error if a vector's expectation cannot be interpreted.
pub fn validate(set: &VectorSet) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let validator = format!("vectors/{}", set.name);

    if set.vectors.is_empty() {
        report.push(CheckResult::warn(validator, "vector set is empty"));
        return Ok(report);
    }

    let mut mismatches = Vec::new();
    for (i, vector) in set.vectors.iter().enumerate() {
        let line = i + 1;
        let outcome = decode_address(&vector.address, line);
        debug!(address = %vector.address, ?outcome, "decoded vector");

        match (vector.expectation()?, outcome) {
            (Expectation::Decodes(id), Ok(hex)) if hex == id.to_hex() => {}
            (Expectation::Fails(expected), Err(err)) if expected.matches(err.kind()) => {}
            (expected, outcome) => mismatches.push(format!(
                "#{line} {}: expected {expected:?}, got {outcome:?}",
                vector.address
            )),
        }
    }

    report.push(CheckResult::from_details(
        validator,
        format!("{} vectors decode as expected", set.vectors.len()),
        format!("{} of {} vectors mismatched", mismatches.len(), set.vectors.len()),
        mismatches,
    ));
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectors::{ExpectedError, Vector};

    #[test]
    fn reference_vectors_pass() {
        let report = validate(&VectorSet::reference().unwrap()).unwrap();
        assert!(report.all_passed(), "{:#?}", report.results);
    }

    #[test]
    fn wrong_expectation_is_reported() {
        let set = VectorSet {
            name: "wrong".into(),
            vectors: vec![
                Vector {
                    address: "K37B-9V85-FB95-793HN".into(),
                    id: Some("1".into()),
                    error: None,
                },
                Vector {
                    address: "2222-2222-2222-22222".into(),
                    id: None,
                    error: Some(ExpectedError::Overflow),
                },
            ],
        };
        let report = validate(&set).unwrap();
        assert_eq!(report.summary().failed, 1);
        assert_eq!(report.results[0].details.len(), 2);
    }

    #[test]
    fn empty_set_warns() {
        let set = VectorSet {
            name: "empty".into(),
            vectors: Vec::new(),
        };
        let report = validate(&set).unwrap();
        assert_eq!(report.summary().warned, 1);
    }
}
