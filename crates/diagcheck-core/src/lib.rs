//! # diagcheck-core
//!
//! Foundation crate for the diagcheck validation harness.
//! Defines the diagnostic model shared with the analysis engine, the error
//! codes, configuration, and tracing bootstrap.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{DuplicatePolicy, EngineConfig, HarnessConfig};
pub use errors::error_code::ErrorCode;
pub use errors::ConfigError;
pub use types::diagnostic::{
    BaselineStatus, Diagnostic, DiagnosticCategory, Position, Range, RuleId,
};
pub use types::identifiers::FileId;
