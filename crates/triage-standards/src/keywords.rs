//! Keyword to standard table loading.

use std::io::Cursor;

use serde::Deserialize;
use triage_model::{KeywordStandardMap, StandardEntry};

use crate::embedded;
use crate::error::{Result, StandardsError};

/// Load the embedded keyword table.
pub fn load() -> Result<KeywordStandardMap> {
    load_from_str(embedded::KEYWORD_STANDARDS, embedded::KEYWORD_STANDARDS_FILE)
}

#[derive(Debug, Deserialize)]
struct KeywordCsvRow {
    #[serde(rename = "Keyword")]
    keyword: String,
    #[serde(rename = "Standard")]
    standard: String,
}

/// Parse a keyword table from CSV content, preserving row order.
///
/// Rows with a blank keyword are skipped. A keyword without a standard is
/// rejected since it could never label a record.
pub fn load_from_str(content: &str, file: &str) -> Result<KeywordStandardMap> {
    let cursor = Cursor::new(content.trim_start_matches('\u{feff}').as_bytes());
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(cursor);

    let mut entries = Vec::new();
    for result in reader.deserialize::<KeywordCsvRow>() {
        let row = result.map_err(|e| StandardsError::CsvParse {
            file: file.to_string(),
            message: e.to_string(),
        })?;

        if row.keyword.is_empty() {
            continue;
        }
        if row.standard.is_empty() {
            return Err(StandardsError::InvalidValue {
                field: "Standard",
                value: row.keyword,
                file: file.to_string(),
            });
        }

        entries.push(StandardEntry::new(&row.keyword, row.standard));
    }

    tracing::debug!(file, entries = entries.len(), "loaded keyword table");
    Ok(KeywordStandardMap::new(entries))
}
