//! Normalized test outcome.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of a single test record.
///
/// Raw result text is never stored unnormalized; every extractor maps its
/// captured token onto one of these four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestResult {
    Pass,
    Fail,
    /// Informational line with no pass/fail signal.
    Info,
    /// A result slot was present but carried an unrecognized token.
    Unknown,
}

impl TestResult {
    /// Returns the upper-case label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            TestResult::Pass => "PASS",
            TestResult::Fail => "FAIL",
            TestResult::Info => "INFO",
            TestResult::Unknown => "UNKNOWN",
        }
    }

    /// Normalize a token taken from an explicit result slot.
    ///
    /// `passed`/`success` map to PASS and `failed`/`failure` to FAIL. Any
    /// other non-empty token is informational; an empty slot is UNKNOWN.
    pub fn from_result_slot(token: &str) -> Self {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return TestResult::Unknown;
        }
        trimmed.parse().unwrap_or(TestResult::Info)
    }

    /// Returns true for PASS and FAIL.
    pub fn is_verdict(&self) -> bool {
        matches!(self, TestResult::Pass | TestResult::Fail)
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TestResult {
    type Err = String;

    /// Parse a result token (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "pass" | "passed" | "success" => Ok(TestResult::Pass),
            "fail" | "failed" | "failure" => Ok(TestResult::Fail),
            "info" => Ok(TestResult::Info),
            "" | "unknown" | "na" | "n/a" => Ok(TestResult::Unknown),
            _ => Err(format!("Unknown test result: {s}")),
        }
    }
}
