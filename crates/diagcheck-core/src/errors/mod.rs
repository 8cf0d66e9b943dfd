//! Error types and error codes.

pub mod config_error;
pub mod error_code;

pub use config_error::ConfigError;
