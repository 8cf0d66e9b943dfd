//! Stable error codes, shared by every diagcheck error enum.

/// Maps an error to a stable, machine-readable code.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}

// Harness errors
pub const SOURCE_FILE_NOT_FOUND: &str = "SOURCE_FILE_NOT_FOUND";
pub const EXPECTED_SINGLE_FILE: &str = "EXPECTED_SINGLE_FILE";
pub const RESULTS_MISMATCH: &str = "RESULTS_MISMATCH";
pub const COUNT_MISMATCH: &str = "COUNT_MISMATCH";
pub const ANALYSIS_DID_NOT_CONVERGE: &str = "ANALYSIS_DID_NOT_CONVERGE";
pub const UNSTABLE_FIXPOINT: &str = "UNSTABLE_FIXPOINT";
pub const ENGINE_SETUP_FAILED: &str = "ENGINE_SETUP_FAILED";

// Config errors
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_IO: &str = "CONFIG_IO";
pub const CONFIG_INVALID_VALUE: &str = "CONFIG_INVALID_VALUE";
