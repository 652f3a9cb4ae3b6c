//! Report parsing: free text and tabular rows into annotated records.

use tracing::{debug, warn};
use triage_model::{KeywordStandardMap, TabularRow, TestRecord, TestResult};
use triage_standards::StandardLookup;

use crate::classifier::{ClassifierOptions, LineClassifier};
use crate::columns::ColumnLayout;

/// Turns report content into [`TestRecord`]s with standards attached.
#[derive(Debug, Clone)]
pub struct ReportParser {
    classifier: LineClassifier,
    lookup: StandardLookup,
}

impl Default for ReportParser {
    /// Default classifier options and the embedded keyword map.
    fn default() -> Self {
        Self::with_options(ClassifierOptions::default())
    }
}

impl ReportParser {
    pub fn new(classifier: LineClassifier, keywords: KeywordStandardMap) -> Self {
        Self {
            classifier,
            lookup: StandardLookup::new(keywords),
        }
    }

    /// Embedded keyword map with the given classifier options.
    pub fn with_options(options: ClassifierOptions) -> Self {
        let keywords = triage_standards::load_keyword_map().unwrap_or_else(|error| {
            warn!(%error, "embedded keyword map unusable; standards will not be assigned");
            KeywordStandardMap::default()
        });
        Self::new(LineClassifier::new(options), keywords)
    }

    pub fn classifier(&self) -> &LineClassifier {
        &self.classifier
    }

    pub fn lookup(&self) -> &StandardLookup {
        &self.lookup
    }

    /// Parse free text, one candidate record per physical line.
    ///
    /// Lines are split on `\n`, `\r\n` and bare `\r`. Unrecognized lines are
    /// dropped; an input with none recognized yields an empty vector.
    pub fn parse_text(&self, text: &str) -> Vec<TestRecord> {
        let mut records = Vec::new();
        let mut line_count = 0usize;
        for physical in text.lines() {
            for line in physical.split('\r') {
                line_count += 1;
                if let Some(record) = self.classifier.classify(line) {
                    records.push(record.with_source_line(line_count));
                }
            }
        }
        self.annotate(&mut records);
        debug!(lines = line_count, records = records.len(), "parsed report text");
        records
    }

    /// Parse rows from a CSV or spreadsheet source.
    pub fn parse_rows(&self, rows: &[TabularRow]) -> Vec<TestRecord> {
        let mut records = Vec::with_capacity(rows.len());
        let mut warned_unnamed = false;
        for (idx, row) in rows.iter().enumerate() {
            if row.is_blank() {
                continue;
            }
            let layout = ColumnLayout::from_row(row);
            if layout.name.is_none() && !warned_unnamed {
                debug!(
                    columns = ?row.fields.iter().map(|(h, _)| h.as_str()).collect::<Vec<_>>(),
                    "no test-name column; records are unnamed"
                );
                warned_unnamed = true;
            }
            records.push(row_record(row, &layout).with_source_line(idx + 1));
        }
        self.annotate(&mut records);
        debug!(rows = rows.len(), records = records.len(), "parsed tabular report");
        records
    }

    /// Fill unset standards from the keyword map. Explicit standards are kept.
    pub fn annotate(&self, records: &mut [TestRecord]) {
        for record in records.iter_mut().filter(|record| record.standard.is_none()) {
            if let Some(standard) = self.lookup.lookup(&record.name) {
                record.standard = Some(standard.to_string());
            }
        }
    }
}

fn row_record(row: &TabularRow, layout: &ColumnLayout) -> TestRecord {
    let cell = |slot: Option<usize>| {
        slot.and_then(|idx| row.fields.get(idx))
            .map_or("", |(_, value)| value.trim())
    };
    let result = match layout.result {
        Some(_) => TestResult::from_result_slot(cell(layout.result)),
        None => TestResult::Unknown,
    };
    let mut record = TestRecord::new(cell(layout.name), result)
        .with_standard(cell(layout.standard))
        .with_expected(cell(layout.expected))
        .with_actual_value(cell(layout.actual));
    record.extra = row
        .fields
        .iter()
        .enumerate()
        .filter(|(idx, _)| !layout.is_mapped(*idx))
        .map(|(_, (header, value))| (header.clone(), value.clone()))
        .collect();
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> ReportParser {
        let keywords = [
            ("gps", "NMEA 0183 / GNSS Performance Standards"),
            ("watchdog", "System Watchdog Functionality Spec"),
        ]
        .into_iter()
        .collect();
        ReportParser::new(LineClassifier::default(), keywords)
    }

    #[test]
    fn lines_keep_source_numbers() {
        let records = parser().parse_text("header\r\nGPS Lock Failed\n\nBoot is success\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source_line, Some(2));
        assert_eq!(records[1].source_line, Some(4));
    }

    #[test]
    fn bare_carriage_returns_split_lines() {
        let records = parser().parse_text("GPS Lock Failed\rBoot is success");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "Boot");
        let lines: Vec<_> = records.iter().map(|r| r.source_line).collect();
        assert_eq!(lines, vec![Some(1), Some(2)]);
    }

    #[test]
    fn mixed_line_endings_number_each_logical_line() {
        let records = parser().parse_text("intro\r\nGPS Lock Failed\rnoise\nBoot is success");
        let lines: Vec<_> = records.iter().map(|r| r.source_line).collect();
        assert_eq!(lines, vec![Some(2), Some(4)]);
    }

    #[test]
    fn annotate_keeps_existing_standard() {
        let mut records = vec![
            TestRecord::new("GPS fix", TestResult::Pass).with_standard("Customer spec 12"),
            TestRecord::new("GPS fix", TestResult::Pass),
        ];
        parser().annotate(&mut records);
        assert_eq!(records[0].standard.as_deref(), Some("Customer spec 12"));
        assert_eq!(
            records[1].standard.as_deref(),
            Some("NMEA 0183 / GNSS Performance Standards")
        );
    }

    #[test]
    fn row_without_result_column_is_unknown() {
        let rows = vec![
            [("Test", "GPS fix"), ("Operator", "JS")]
                .into_iter()
                .collect::<TabularRow>(),
        ];
        let records = parser().parse_rows(&rows);
        assert_eq!(records[0].result, TestResult::Unknown);
        assert_eq!(records[0].extra, vec![("Operator".to_string(), "JS".to_string())]);
    }
}
