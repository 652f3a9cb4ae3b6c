//! Knowledge-base rows for requirement generation and component lookup.

use serde::{Deserialize, Serialize};

/// Test-case entry: formal requirement plus the equipment needed to run it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseInfo {
    /// Lower-case test case key, e.g. `ip rating`.
    pub key: String,
    pub requirement: String,
    pub equipment: Vec<String>,
}

/// Component entry keyed by lower-case part number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentInfo {
    pub part_number: String,
    pub manufacturer: String,
    pub function: String,
    pub voltage: Option<String>,
    pub current: Option<String>,
}
