//! # diagcheck-harness
//!
//! Validation harness for a type checker's sample tests. Drives the engine
//! to its analysis fixpoint, classifies the diagnostics it reports, and
//! compares them against expectations.
//!
//! ```ignore
//! let harness = Harness::new(my_engine_factory);
//! let results = harness.analyze_sample_file("undefined_name.py")?;
//! validate_results(
//!     &results,
//!     &ExpectedResults::new().errors([ExpectedResult::at_line(3)]),
//! )?;
//! ```

pub mod classifier;
pub mod comparator;
pub mod driver;
pub mod engine;
pub mod error;
pub mod harness;
pub mod report;
pub mod samples;

// Re-export the most commonly used types at the crate root.
pub use classifier::{classify, FileAnalysisResult};
#[allow(deprecated)]
pub use comparator::{
    validate_result_counts, validate_results, validate_results_with, ComparisonReport,
    ExpectedCounts, ExpectedResult, ExpectedResults, Match,
};
pub use driver::AnalysisDriver;
pub use engine::{AnalysisEngine, EngineContext, EngineFactory, EngineSession};
pub use error::{HarnessError, HarnessResult};
pub use harness::Harness;
pub use report::{print_diagnostics, write_diagnostics};
pub use samples::{read_sample_file, resolve_sample_file_path, SampleFile};
