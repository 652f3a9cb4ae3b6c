//! Parsing rows from CSV and spreadsheet sources.

use triage_core::{ReportParser, TestResult, classify};
use triage_model::TabularRow;

fn rows(headers: &[&str], data: &[&[&str]]) -> Vec<TabularRow> {
    let headers: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();
    data.iter()
        .map(|cells| {
            let cells: Vec<String> = cells.iter().map(|c| (*c).to_string()).collect();
            TabularRow::from_cells(&headers, &cells)
        })
        .collect()
}

#[test]
fn synonym_headers_map_to_record_fields() {
    let rows = rows(
        &["Test Case", "Requirement", "Actual/Value", "Status", "Operator"],
        &[
            &["Vibration sweep", "No resonance", "OK", "Passed", "JS"],
            &["Braking distance", "< 6 m", "6.4 m", "FAIL", "JS"],
        ],
    );
    let records = ReportParser::default().parse_rows(&rows);
    assert_eq!(records.len(), 2);

    let first = &records[0];
    assert_eq!(first.name, "Vibration sweep");
    assert_eq!(first.result, TestResult::Pass);
    assert_eq!(first.expected.as_deref(), Some("No resonance"));
    assert_eq!(first.actual_value.as_deref(), Some("OK"));
    assert_eq!(first.standard.as_deref(), Some("IEC 60068-2-6 / AIS-048"));
    assert_eq!(first.extra, vec![("Operator".to_string(), "JS".to_string())]);

    assert_eq!(records[1].result, TestResult::Fail);
    assert_eq!(records[1].standard.as_deref(), Some("EN 15194 / ISO 4210-2"));
}

#[test]
fn explicit_standard_column_is_kept() {
    let rows = rows(
        &["Name", "Standard", "Result"],
        &[
            &["GPS cold start", "OEM-SPEC-7", "pass"],
            &["GPS warm start", "", "pass"],
        ],
    );
    let records = ReportParser::default().parse_rows(&rows);
    assert_eq!(records[0].standard.as_deref(), Some("OEM-SPEC-7"));
    assert_eq!(
        records[1].standard.as_deref(),
        Some("NMEA 0183 / GNSS Performance Standards")
    );
}

#[test]
fn result_slot_values_are_normalized() {
    let rows = rows(
        &["Test", "Outcome"],
        &[
            &["a", "Success"],
            &["b", "failure"],
            &["c", ""],
            &["d", "N/A"],
            &["e", "Observed"],
            &["f", "INFO"],
        ],
    );
    let results: Vec<_> = ReportParser::default()
        .parse_rows(&rows)
        .into_iter()
        .map(|r| r.result)
        .collect();
    assert_eq!(
        results,
        vec![
            TestResult::Pass,
            TestResult::Fail,
            TestResult::Unknown,
            TestResult::Unknown,
            TestResult::Info,
            TestResult::Info,
        ]
    );
}

#[test]
fn blank_rows_are_skipped_and_unnamed_rows_use_placeholder() {
    let rows = rows(
        &["Step", "Result"],
        &[&["1", "PASS"], &["", ""], &["2", "FAIL"]],
    );
    let records = ReportParser::default().parse_rows(&rows);
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.name == "N/A"));
    assert_eq!(records[1].source_line, Some(3));
    assert_eq!(records[0].extra, vec![("Step".to_string(), "1".to_string())]);

    let summary = classify(&records);
    assert_eq!(summary.pass_rate(), Some(0.5));
}

#[test]
fn description_column_becomes_actual_when_expected_exists() {
    let rows = rows(
        &["Test", "Expected", "Description", "Result"],
        &[&["Insulation resistance", "> 100 MOhm", "Measured 250 MOhm", "PASS"]],
    );
    let records = ReportParser::default().parse_rows(&rows);
    assert_eq!(records[0].expected.as_deref(), Some("> 100 MOhm"));
    assert_eq!(records[0].actual_value.as_deref(), Some("Measured 250 MOhm"));
    assert!(records[0].extra.is_empty());
}

#[test]
fn no_rows_yield_nothing() {
    assert!(ReportParser::default().parse_rows(&[]).is_empty());
}
