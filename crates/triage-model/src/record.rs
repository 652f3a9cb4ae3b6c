//! Extracted test record.

use serde::{Deserialize, Serialize};

use crate::result::TestResult;

/// Name used when extraction captured nothing usable.
pub const NAME_PLACEHOLDER: &str = "N/A";

/// One test outcome extracted from a report line or tabular row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
    /// Test identifier, trimmed of delimiters. Never empty.
    pub name: String,
    pub result: TestResult,
    /// Observed value or trailing comment captured after the result token.
    pub actual_value: Option<String>,
    /// Regulatory standard assigned by keyword lookup.
    pub standard: Option<String>,
    /// Requirement text, only present for tabular sources.
    pub expected: Option<String>,
    /// Unrecognized tabular columns, in source column order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, String)>,
    /// 1-based source line (text) or data row (tabular).
    pub source_line: Option<usize>,
}

impl TestRecord {
    /// Create a record, substituting [`NAME_PLACEHOLDER`] for an empty name.
    pub fn new(name: impl Into<String>, result: TestResult) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            NAME_PLACEHOLDER.to_string()
        } else {
            name
        };
        Self {
            name,
            result,
            actual_value: None,
            standard: None,
            expected: None,
            extra: Vec::new(),
            source_line: None,
        }
    }

    #[must_use]
    pub fn with_actual_value(mut self, value: impl Into<String>) -> Self {
        self.actual_value = non_empty(value.into());
        self
    }

    #[must_use]
    pub fn with_standard(mut self, standard: impl Into<String>) -> Self {
        self.standard = non_empty(standard.into());
        self
    }

    #[must_use]
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = non_empty(expected.into());
        self
    }

    #[must_use]
    pub fn with_source_line(mut self, line: usize) -> Self {
        self.source_line = Some(line);
        self
    }

    /// Standard label for display, `N/A` when unset.
    pub fn standard_label(&self) -> &str {
        self.standard.as_deref().unwrap_or(NAME_PLACEHOLDER)
    }

    /// Actual value for display, `N/A` when unset.
    pub fn actual_label(&self) -> &str {
        self.actual_value.as_deref().unwrap_or(NAME_PLACEHOLDER)
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}
