//! CSV row extraction.

use std::io::Cursor;

use triage_model::TabularRow;

use crate::error::Result;

/// Normalize a header cell: strip BOM, trim and collapse internal whitespace.
fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize a header row. Blank headers are named `Column N` (1-based).
pub(crate) fn header_names<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .enumerate()
        .map(|(idx, value)| {
            let name = normalize_header(value.as_ref());
            if name.is_empty() {
                format!("Column {}", idx + 1)
            } else {
                name
            }
        })
        .collect()
}

/// Read CSV bytes into rows. The first record is the header row.
///
/// Short records are padded with empty cells; fully blank records are dropped.
pub fn read_csv_rows(bytes: &[u8]) -> Result<Vec<TabularRow>> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(bytes));

    let raw_headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let headers = header_names(&raw_headers);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cells: Vec<String> = record.iter().map(str::to_string).collect();
        let row = TabularRow::from_cells(&headers, &cells);
        if row.is_blank() {
            continue;
        }
        rows.push(row);
    }

    tracing::debug!(columns = headers.len(), rows = rows.len(), "read csv rows");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_with_padding_and_blank_skip() {
        let rows = read_csv_rows(b"\xEF\xBB\xBFTest ,  Result\nEMC,PASS\n,\nBraking\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Test"), Some("EMC"));
        assert_eq!(rows[0].get("Result"), Some("PASS"));
        assert_eq!(rows[1].get("Result"), Some(""));
    }

    #[test]
    fn blank_headers_get_positional_names() {
        let rows = read_csv_rows(b"Test,,Result\nEMC,note,PASS\n").unwrap();
        assert_eq!(rows[0].get("Column 2"), Some("note"));
    }

    #[test]
    fn header_only_yields_no_rows() {
        assert!(read_csv_rows(b"Test,Result\n").unwrap().is_empty());
    }
}
