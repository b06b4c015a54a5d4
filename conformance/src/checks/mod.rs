//! Conformance checks, one module per concern.

pub mod detection;
pub mod field;
pub mod invariance;
pub mod vectors;
