//! Harness error type.
//! One error enum covering every way a harness call can fail.

use diagcheck_core::errors::error_code::{self, ErrorCode};
use diagcheck_core::{ConfigError, DiagnosticCategory, FileId};

use crate::comparator::ComparisonReport;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    // Fixture
    #[error("Source file not found for {file}")]
    SourceFileNotFound { file: FileId },

    // Contract
    #[error("Expected results for exactly one file, got {actual}")]
    ExpectedSingleFile { actual: usize },

    // Assertions
    #[error("Diagnostics did not match expectations\n{0}")]
    ResultsMismatch(ComparisonReport),

    #[error("Expected {expected} {category} diagnostics, found {actual}")]
    CountMismatch {
        category: DiagnosticCategory,
        expected: usize,
        actual: usize,
    },

    // Driver
    #[error("Analysis did not converge after {passes} passes")]
    AnalysisDidNotConverge { passes: u32 },

    #[error("Analysis reported pending work after reaching a fixpoint at pass {passes}")]
    UnstableFixpoint { passes: u32 },

    // Session
    #[error("Engine setup failed: {reason}")]
    EngineSetup { reason: String },

    #[error("Scratch directory could not be created: {0}")]
    ScratchDir(#[source] std::io::Error),

    // Config
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl HarnessError {
    pub fn engine_setup(reason: impl Into<String>) -> Self {
        Self::EngineSetup {
            reason: reason.into(),
        }
    }

    /// The comparison report, when this is a content mismatch.
    pub fn report(&self) -> Option<&ComparisonReport> {
        match self {
            Self::ResultsMismatch(report) => Some(report),
            _ => None,
        }
    }
}

impl ErrorCode for HarnessError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SourceFileNotFound { .. } => error_code::SOURCE_FILE_NOT_FOUND,
            Self::ExpectedSingleFile { .. } => error_code::EXPECTED_SINGLE_FILE,
            Self::ResultsMismatch(_) => error_code::RESULTS_MISMATCH,
            Self::CountMismatch { .. } => error_code::COUNT_MISMATCH,
            Self::AnalysisDidNotConverge { .. } => error_code::ANALYSIS_DID_NOT_CONVERGE,
            Self::UnstableFixpoint { .. } => error_code::UNSTABLE_FIXPOINT,
            Self::EngineSetup { .. } | Self::ScratchDir(_) => error_code::ENGINE_SETUP_FAILED,
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type HarnessResult<T> = Result<T, HarnessError>;
