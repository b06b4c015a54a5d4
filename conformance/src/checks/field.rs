//! GF(32) table checks.
//!
//! The tables are derived at compile time; this pins them to the published
//! constants and to the field axioms the checksum relies on.

use rsaddr::gf32::{self, GEXP, GLOG, ORDER, PUBLISHED_GEXP, PUBLISHED_GLOG};

use crate::report::{CheckResult, ConformanceReport};

const VALIDATOR: &str = "checksum/field";

/// Compares the tables with the published constants and checks the
/// multiplication laws over all 32 × 32 operand pairs.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let mut details = Vec::new();
    for (i, (ours, published)) in GEXP.iter().zip(PUBLISHED_GEXP.iter()).enumerate() {
        if ours != published {
            details.push(format!("gexp[{i}] = {ours}, expected {published}"));
        }
    }
    for (i, (ours, published)) in GLOG.iter().zip(PUBLISHED_GLOG.iter()).enumerate() {
        if ours != published {
            details.push(format!("glog[{i}] = {ours}, expected {published}"));
        }
    }
    report.push(CheckResult::from_details(
        VALIDATOR,
        "gexp/glog match the published tables",
        "lookup tables differ from the published constants",
        details,
    ));

    let mut details = Vec::new();
    for a in 0..32u8 {
        if gf32::mul(a, 0) != 0 || gf32::mul(0, a) != 0 {
            details.push(format!("{a}·0 ≠ 0"));
        }
        if a != 0 && gf32::mul(a, 1) != a {
            details.push(format!("{a}·1 ≠ {a}"));
        }
        if a != 0 && !(1..32u8).any(|b| gf32::mul(a, b) == 1) {
            details.push(format!("{a} has no inverse"));
        }
        for b in 0..32u8 {
            if gf32::mul(a, b) != gf32::mul(b, a) {
                details.push(format!("{a}·{b} not commutative"));
            }
            for c in 0..32u8 {
                let lhs = gf32::mul(a, gf32::add(b, c));
                let rhs = gf32::add(gf32::mul(a, b), gf32::mul(a, c));
                if lhs != rhs {
                    details.push(format!("{a}·({b}+{c}) not distributive"));
                }
            }
        }
    }
    for n in 0..ORDER {
        if gf32::log(gf32::exp(n)) != Some(n as u8) {
            details.push(format!("log(exp({n})) ≠ {n}"));
        }
    }
    report.push(CheckResult::from_details(
        VALIDATOR,
        "multiplication is a field operation on all 1024 pairs",
        "field laws violated",
        details,
    ));

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_checks_pass() {
        let report = validate();
        assert!(report.all_passed(), "{:#?}", report.results);
    }
}
