//! Caller-owned session counters and component register.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classify::{Classification, PassRate};
use crate::components::ComponentEntry;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("component entry requires a part number")]
    MissingPartNumber,
}

/// Dashboard state accumulated across operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    reports_verified: usize,
    requirements_generated: usize,
    tests_passed: usize,
    tests_failed: usize,
    components: Vec<ComponentEntry>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one verified report and its verdicts.
    pub fn record_report(&mut self, classification: &Classification) {
        self.reports_verified += 1;
        self.tests_passed += classification.passed.len();
        self.tests_failed += classification.failed.len();
    }

    pub fn record_requirements(&mut self, count: usize) {
        self.requirements_generated += count;
    }

    /// Append to the component register. The part number is trimmed and required.
    pub fn add_component(&mut self, mut entry: ComponentEntry) -> Result<(), SessionError> {
        let part_number = entry.part_number.trim();
        if part_number.is_empty() {
            return Err(SessionError::MissingPartNumber);
        }
        entry.part_number = part_number.to_string();
        self.components.push(entry);
        Ok(())
    }

    pub fn reports_verified(&self) -> usize {
        self.reports_verified
    }

    pub fn requirements_generated(&self) -> usize {
        self.requirements_generated
    }

    pub fn components(&self) -> &[ComponentEntry] {
        &self.components
    }

    /// Pass rate over every report recorded in this session.
    pub fn overall_pass_rate(&self) -> PassRate {
        PassRate::from_counts(self.tests_passed, self.tests_failed)
    }
}
