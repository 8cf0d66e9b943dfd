//! Engine options forwarded by the harness.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration handed to the engine factory and to `diagnostics()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Project root the engine resolves imports against.
    pub project_root: PathBuf,
    /// Engine test mode. The harness always switches this on.
    pub internal_test_mode: bool,
    /// Evaluate every name before checking the file, exercising contextual evaluation.
    pub check_names_before_checking: bool,
    /// Directory holding bundled fallback resources (e.g. type stubs).
    pub fallback_resource_dir: Option<PathBuf>,
    /// Rule id to level overrides, e.g. `reportUnusedImport = "warning"`.
    pub rule_overrides: BTreeMap<String, String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            internal_test_mode: false,
            check_names_before_checking: true,
            fallback_resource_dir: None,
            rule_overrides: BTreeMap::new(),
        }
    }
}

impl EngineConfig {
    /// Copy of this config with test mode enabled.
    pub fn for_tests(&self) -> Self {
        Self {
            internal_test_mode: true,
            ..self.clone()
        }
    }

    pub fn with_fallback_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fallback_resource_dir = Some(dir.into());
        self
    }

    pub fn with_rule_override(mut self, rule: impl Into<String>, level: impl Into<String>) -> Self {
        self.rule_overrides.insert(rule.into(), level.into());
        self
    }
}
