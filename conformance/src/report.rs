//! Conformance report types: check outcomes, severity, aggregation.

use std::fmt;

/// Outcome class of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The decoder behaved as expected.
    Pass,
    /// Unexpected but not disqualifying (e.g. an empty vector set).
    Warning,
    /// The decoder disagreed with an expectation.
    Failure,
}

impl Severity {
    /// Four-letter tag used in printed reports.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warning => "WARN",
            Self::Failure => "FAIL",
        }
    }
}

/// One check and its outcome.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Validator that ran the check, e.g. `vectors/reference`.
    pub validator: String,
    /// What was checked and how it went.
    pub message: String,
    /// Outcome class.
    pub severity: Severity,
    /// Offending inputs, one per line.
    pub details: Vec<String>,
}

impl CheckResult {
    /// Creates a passing result.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with(validator, message, Severity::Pass, Vec::new())
    }

    /// Creates a warning.
    pub fn warn(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with(validator, message, Severity::Warning, Vec::new())
    }

    /// Creates a failure listing the offending inputs.
    pub fn fail(
        validator: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self::with(validator, message, Severity::Failure, details)
    }

    /// Passes when `details` is empty, fails otherwise.
    pub fn from_details(
        validator: impl Into<String>,
        pass_message: impl Into<String>,
        fail_message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        if details.is_empty() {
            Self::pass(validator, pass_message)
        } else {
            Self::fail(validator, fail_message, details)
        }
    }

    fn with(
        validator: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        details: Vec<String>,
    ) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity,
            details,
        }
    }

    /// Returns true if this result is a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} — {}",
            self.severity.tag(),
            self.validator,
            self.message
        )?;
        for detail in &self.details {
            write!(f, "\n       {}", detail)?;
        }
        Ok(())
    }
}

/// Counts per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Passing checks.
    pub passed: usize,
    /// Warnings.
    pub warned: usize,
    /// Failures.
    pub failed: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Summary: {} passed, {} warnings, {} failed",
            self.passed, self.warned, self.failed
        )
    }
}

/// All results from a conformance run.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// Results in the order the validators produced them.
    pub results: Vec<CheckResult>,
}

impl ConformanceReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one result.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Appends every result of `other`.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Tallies results by severity.
    pub fn summary(&self) -> Summary {
        self.results.iter().fold(Summary::default(), |mut s, r| {
            match r.severity {
                Severity::Pass => s.passed += 1,
                Severity::Warning => s.warned += 1,
                Severity::Failure => s.failed += 1,
            }
            s
        })
    }

    /// Returns true if nothing failed.
    pub fn all_passed(&self) -> bool {
        self.summary().failed == 0
    }
}
