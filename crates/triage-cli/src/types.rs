use std::path::PathBuf;

use serde::Serialize;
use triage_core::Classification;
use triage_ingest::ReportFormat;

/// Outcome for one report file that was extracted successfully.
#[derive(Debug, Serialize)]
pub struct ReportOutcome {
    pub path: PathBuf,
    pub format: ReportFormat,
    #[serde(flatten)]
    pub classification: Classification,
    pub pass_rate: Option<f64>,
}

impl ReportOutcome {
    pub fn new(path: PathBuf, format: ReportFormat, classification: Classification) -> Self {
        let pass_rate = classification.pass_rate();
        Self {
            path,
            format,
            classification,
            pass_rate,
        }
    }

    /// True when nothing recognizable was extracted.
    pub fn is_empty(&self) -> bool {
        self.classification.is_empty()
    }
}

#[derive(Debug, Serialize)]
pub struct ReportError {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Default, Serialize)]
pub struct VerifyResult {
    pub reports: Vec<ReportOutcome>,
    pub errors: Vec<ReportError>,
}

impl VerifyResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Passed and failed counts over every report.
    pub fn verdict_totals(&self) -> (usize, usize) {
        self.reports.iter().fold((0, 0), |(passed, failed), report| {
            (
                passed + report.classification.passed.len(),
                failed + report.classification.failed.len(),
            )
        })
    }
}
