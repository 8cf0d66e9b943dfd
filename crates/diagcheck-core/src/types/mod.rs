//! Shared vocabulary between the analysis engine and the harness.

pub mod diagnostic;
pub mod identifiers;
