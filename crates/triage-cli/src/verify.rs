//! Report verification: extract, parse and classify each file.

use std::path::{Path, PathBuf};

use tracing::{error, info, info_span, warn};
use triage_core::{ReportParser, TestRecord, classify};
use triage_ingest::{Extracted, detect_format, extract_file};

use crate::types::{ReportError, ReportOutcome, VerifyResult};

/// Verify every report in `paths`. Failures are collected, not returned early.
pub fn verify_reports(paths: &[PathBuf], parser: &ReportParser) -> VerifyResult {
    let mut result = VerifyResult::default();
    for path in paths {
        match verify_report(path, parser) {
            Ok(outcome) => result.reports.push(outcome),
            Err(error) => {
                error!(path = %path.display(), %error, "report could not be read");
                result.errors.push(ReportError {
                    path: path.clone(),
                    message: error.to_string(),
                });
            }
        }
    }
    result
}

fn verify_report(path: &Path, parser: &ReportParser) -> triage_ingest::Result<ReportOutcome> {
    let span = info_span!("report", path = %path.display());
    let _guard = span.enter();

    let format = detect_format(path)?;
    let extracted = extract_file(path)?;
    let records = parse_extracted(parser, &extracted);
    let classification = classify(&records);
    if classification.is_empty() {
        warn!(%format, "no recognizable test data extracted");
    } else {
        info!(
            %format,
            passed = classification.passed.len(),
            failed = classification.failed.len(),
            other = classification.other.len(),
            pass_rate = %classification.pass_rate_label(),
            "report verified"
        );
    }
    Ok(ReportOutcome::new(path.to_path_buf(), format, classification))
}

/// Route extracted content to the matching parser entry point.
pub fn parse_extracted(parser: &ReportParser, extracted: &Extracted) -> Vec<TestRecord> {
    match extracted {
        Extracted::Text(text) => parser.parse_text(text),
        Extracted::Rows(rows) => parser.parse_rows(rows),
    }
}
