//! PASS/FAIL partitioning and pass rate.

use std::fmt;

use serde::Serialize;
use triage_model::{TestRecord, TestResult};

/// Records partitioned by outcome. Each bucket keeps input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub passed: Vec<TestRecord>,
    pub failed: Vec<TestRecord>,
    /// INFO and UNKNOWN records.
    pub other: Vec<TestRecord>,
}

/// Partition `records` into passed, failed and other.
pub fn classify(records: &[TestRecord]) -> Classification {
    let mut classification = Classification::default();
    for record in records {
        let bucket = match record.result {
            TestResult::Pass => &mut classification.passed,
            TestResult::Fail => &mut classification.failed,
            TestResult::Info | TestResult::Unknown => &mut classification.other,
        };
        bucket.push(record.clone());
    }
    classification
}

impl Classification {
    pub fn total(&self) -> usize {
        self.passed.len() + self.failed.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// `passed / (passed + failed)`, `None` without any verdict.
    pub fn pass_rate(&self) -> Option<f64> {
        let verdicts = self.passed.len() + self.failed.len();
        if verdicts == 0 {
            None
        } else {
            Some(self.passed.len() as f64 / verdicts as f64)
        }
    }

    pub fn pass_rate_label(&self) -> PassRate {
        PassRate(self.pass_rate())
    }

    /// Passed, then failed, then other.
    pub fn into_records(self) -> Vec<TestRecord> {
        let mut records = self.passed;
        records.extend(self.failed);
        records.extend(self.other);
        records
    }
}

/// Display wrapper: `N/A` or a percentage with one decimal place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassRate(pub Option<f64>);

impl PassRate {
    /// Rate over explicit counts, e.g. totals accumulated across reports.
    pub fn from_counts(passed: usize, failed: usize) -> Self {
        let verdicts = passed + failed;
        if verdicts == 0 {
            Self(None)
        } else {
            Self(Some(passed as f64 / verdicts as f64))
        }
    }

    pub fn value(&self) -> Option<f64> {
        self.0
    }
}

impl fmt::Display for PassRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(rate) => write!(f, "{:.1}%", rate * 100.0),
            None => f.write_str("N/A"),
        }
    }
}
