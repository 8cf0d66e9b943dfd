//! Expectation templates: partially specified diagnostics.

use std::fmt;
use std::path::Path;

use diagcheck_core::{BaselineStatus, ConfigError, DiagnosticCategory, RuleId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::projection::ProjectedDiagnostic;

/// One field of a template: either a concrete value or "don't care".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Match<T> {
    Any,
    Exactly(T),
}

impl<T> Match<T> {
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Any => None,
            Self::Exactly(value) => Some(value),
        }
    }
}

impl<T: PartialEq> Match<T> {
    pub fn accepts(&self, actual: &T) -> bool {
        match self {
            Self::Any => true,
            Self::Exactly(expected) => expected == actual,
        }
    }

    /// Like [`accepts`](Self::accepts), for a field the actual diagnostic may lack.
    pub fn accepts_opt(&self, actual: Option<&T>) -> bool {
        match (self, actual) {
            (Self::Any, _) => true,
            (Self::Exactly(expected), Some(actual)) => expected == actual,
            (Self::Exactly(_), None) => false,
        }
    }
}

impl<T> Default for Match<T> {
    fn default() -> Self {
        Self::Any
    }
}

impl<T> From<Option<T>> for Match<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Any, Self::Exactly)
    }
}

impl<T: Serialize> Serialize for Match<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_option().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Match<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

/// A template for one expected diagnostic. Only `line` is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpectedResult {
    pub line: u32,
    #[serde(default, skip_serializing_if = "Match::is_any")]
    pub message: Match<String>,
    #[serde(default, alias = "code", skip_serializing_if = "Match::is_any")]
    pub rule: Match<RuleId>,
    #[serde(default, skip_serializing_if = "Match::is_any")]
    pub baseline_status: Match<BaselineStatus>,
}

impl ExpectedResult {
    /// Matches any diagnostic starting on `line`.
    pub fn at_line(line: u32) -> Self {
        Self {
            line,
            message: Match::Any,
            rule: Match::Any,
            baseline_status: Match::Any,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Match::Exactly(message.into());
        self
    }

    pub fn rule(mut self, rule: impl Into<RuleId>) -> Self {
        self.rule = Match::Exactly(rule.into());
        self
    }

    pub fn baseline_status(mut self, status: BaselineStatus) -> Self {
        self.baseline_status = Match::Exactly(status);
        self
    }

    /// True when every specified field equals the actual one.
    pub fn matches(&self, actual: &ProjectedDiagnostic) -> bool {
        self.line == actual.line
            && self.message.accepts(&actual.message)
            && self.rule.accepts_opt(actual.rule.as_ref())
            && self.baseline_status.accepts_opt(actual.baseline_status.as_ref())
    }
}

impl fmt::Display for ExpectedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.line)?;
        match &self.message {
            Match::Exactly(message) => write!(f, ": {message:?}")?,
            Match::Any => f.write_str(": <any message>")?,
        }
        if let Match::Exactly(rule) = &self.rule {
            write!(f, " ({rule})")?;
        }
        if let Match::Exactly(status) = &self.baseline_status {
            write!(f, " [{status}]")?;
        }
        Ok(())
    }
}

/// Expected diagnostics per bucket. An omitted bucket expects no diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpectedResults {
    pub errors: Vec<ExpectedResult>,
    pub warnings: Vec<ExpectedResult>,
    pub infos: Vec<ExpectedResult>,
    pub unused_codes: Vec<ExpectedResult>,
    pub unreachable_codes: Vec<ExpectedResult>,
    pub deprecateds: Vec<ExpectedResult>,
}

impl ExpectedResults {
    /// Expect no diagnostics at all.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_category(&self, category: DiagnosticCategory) -> &[ExpectedResult] {
        match category {
            DiagnosticCategory::Error => &self.errors,
            DiagnosticCategory::Warning => &self.warnings,
            DiagnosticCategory::Information => &self.infos,
            DiagnosticCategory::UnusedCode => &self.unused_codes,
            DiagnosticCategory::UnreachableCode => &self.unreachable_codes,
            DiagnosticCategory::Deprecated => &self.deprecateds,
        }
    }

    /// Replace the expectations for `category`.
    pub fn with(
        mut self,
        category: DiagnosticCategory,
        expected: impl IntoIterator<Item = ExpectedResult>,
    ) -> Self {
        let bucket = match category {
            DiagnosticCategory::Error => &mut self.errors,
            DiagnosticCategory::Warning => &mut self.warnings,
            DiagnosticCategory::Information => &mut self.infos,
            DiagnosticCategory::UnusedCode => &mut self.unused_codes,
            DiagnosticCategory::UnreachableCode => &mut self.unreachable_codes,
            DiagnosticCategory::Deprecated => &mut self.deprecateds,
        };
        *bucket = expected.into_iter().collect();
        self
    }

    pub fn errors(self, expected: impl IntoIterator<Item = ExpectedResult>) -> Self {
        self.with(DiagnosticCategory::Error, expected)
    }

    pub fn warnings(self, expected: impl IntoIterator<Item = ExpectedResult>) -> Self {
        self.with(DiagnosticCategory::Warning, expected)
    }

    pub fn infos(self, expected: impl IntoIterator<Item = ExpectedResult>) -> Self {
        self.with(DiagnosticCategory::Information, expected)
    }

    pub fn unused_codes(self, expected: impl IntoIterator<Item = ExpectedResult>) -> Self {
        self.with(DiagnosticCategory::UnusedCode, expected)
    }

    pub fn unreachable_codes(self, expected: impl IntoIterator<Item = ExpectedResult>) -> Self {
        self.with(DiagnosticCategory::UnreachableCode, expected)
    }

    pub fn deprecateds(self, expected: impl IntoIterator<Item = ExpectedResult>) -> Self {
        self.with(DiagnosticCategory::Deprecated, expected)
    }

    /// Parse expectations from TOML, e.g. `errors = [{ line = 3, rule = "reportUndefinedVariable" }]`.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load an expectations file; `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(&text)
        } else {
            Self::from_toml(&text)
        }
    }
}
