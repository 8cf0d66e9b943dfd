//! Sample source files under the samples root.

use std::path::{Path, PathBuf};

use diagcheck_core::FileId;
use tracing::error;

/// Extension of type stub samples.
const STUB_EXTENSION: &str = "pyi";

/// Resolve `file_name` against the samples root.
pub fn resolve_sample_file_path(samples_dir: &Path, file_name: &str) -> PathBuf {
    samples_dir.join(file_name)
}

/// Read a sample as text. An unreadable sample is logged and read as empty.
pub fn read_sample_file(samples_dir: &Path, file_name: &str) -> String {
    read_text_or_empty(file_name, &resolve_sample_file_path(samples_dir, file_name))
}

fn read_text_or_empty(file_name: &str, path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            error!(file = file_name, path = %path.display(), error = %e, "Could not read sample file");
            String::new()
        }
    }
}

/// A sample resolved against a samples root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleFile {
    name: String,
    path: PathBuf,
}

impl SampleFile {
    pub fn resolve(samples_dir: &Path, file_name: &str) -> Self {
        Self {
            name: file_name.to_string(),
            path: resolve_sample_file_path(samples_dir, file_name),
        }
    }

    /// Name as given, relative to the samples root.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_id(&self) -> FileId {
        FileId::new(self.path.clone())
    }

    /// Whether this is a type stub sample. The harness marks these on the engine
    /// with [`AnalysisEngine::mark_stub_file`](crate::engine::AnalysisEngine::mark_stub_file).
    pub fn is_stub(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext == STUB_EXTENSION)
    }

    /// Text of the sample; empty if it cannot be read.
    pub fn read(&self) -> String {
        read_text_or_empty(&self.name, &self.path)
    }
}
