//! XLSX first-worksheet row extraction.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use triage_model::TabularRow;

use crate::csv_rows::header_names;
use crate::error::Result;
use crate::office::{
    Archive, attribute, open_archive, push_reference, read_entry, read_optional_entry, xml_error,
};

const WORKBOOK_ENTRY: &str = "xl/workbook.xml";
const WORKBOOK_RELS_ENTRY: &str = "xl/_rels/workbook.xml.rels";
const SHARED_STRINGS_ENTRY: &str = "xl/sharedStrings.xml";
const DEFAULT_SHEET_ENTRY: &str = "xl/worksheets/sheet1.xml";
/// Zero-based index of column `XFD`, the last column a worksheet can hold.
const MAX_COLUMN_INDEX: usize = 16_383;

/// Read the first worksheet into rows. The first non-empty row is the header.
pub fn read_xlsx_rows(bytes: &[u8]) -> Result<Vec<TabularRow>> {
    let mut archive = open_archive(bytes)?;
    let sheet_entry = first_sheet_entry(&mut archive)?;
    let shared = match read_optional_entry(&mut archive, SHARED_STRINGS_ENTRY)? {
        Some(xml) => parse_shared_strings(&xml)?,
        None => Vec::new(),
    };
    let sheet_xml = read_entry(&mut archive, &sheet_entry)?;
    let grid = parse_sheet(&sheet_xml, &sheet_entry, &shared)?;

    let mut grid = grid
        .into_iter()
        .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()));
    let Some(header_row) = grid.next() else {
        return Ok(Vec::new());
    };
    let headers = header_names(&header_row);
    let rows: Vec<TabularRow> = grid
        .map(|cells| TabularRow::from_cells(&headers, &cells))
        .filter(|row| !row.is_blank())
        .collect();

    tracing::debug!(sheet = %sheet_entry, columns = headers.len(), rows = rows.len(), "read xlsx rows");
    Ok(rows)
}

/// Resolve the archive path of the first sheet in workbook order.
fn first_sheet_entry(archive: &mut Archive<'_>) -> Result<String> {
    let Some(workbook) = read_optional_entry(archive, WORKBOOK_ENTRY)? else {
        return Ok(DEFAULT_SHEET_ENTRY.to_string());
    };
    let Some(rel_id) = first_sheet_rel_id(&workbook)? else {
        return Ok(DEFAULT_SHEET_ENTRY.to_string());
    };
    let Some(rels) = read_optional_entry(archive, WORKBOOK_RELS_ENTRY)? else {
        return Ok(DEFAULT_SHEET_ENTRY.to_string());
    };
    Ok(relationship_target(&rels, &rel_id)?
        .map(|target| resolve_target(&target))
        .unwrap_or_else(|| DEFAULT_SHEET_ENTRY.to_string()))
}

fn first_sheet_rel_id(xml: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event().map_err(|e| xml_error(WORKBOOK_ENTRY, e))? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"sheet" => {
                return Ok(attribute(&e, b"id"));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

fn relationship_target(xml: &str, rel_id: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader
            .read_event()
            .map_err(|e| xml_error(WORKBOOK_RELS_ENTRY, e))?
        {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                if attribute(&e, b"Id").as_deref() == Some(rel_id) {
                    return Ok(attribute(&e, b"Target"));
                }
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

fn resolve_target(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("xl/{target}"),
    }
}

/// Parse `sharedStrings.xml`; phonetic runs are ignored.
fn parse_shared_strings(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut strings = Vec::new();
    let mut current: Option<String> = None;
    let mut in_text = false;
    let mut in_phonetic = false;

    loop {
        match reader
            .read_event()
            .map_err(|e| xml_error(SHARED_STRINGS_ENTRY, e))?
        {
            Event::Start(e) => match e.local_name().as_ref() {
                b"si" => current = Some(String::new()),
                b"t" => in_text = true,
                b"rPh" => in_phonetic = true,
                _ => {}
            },
            Event::Empty(e) if e.local_name().as_ref() == b"si" => strings.push(String::new()),
            Event::End(e) => match e.local_name().as_ref() {
                b"si" => strings.push(current.take().unwrap_or_default()),
                b"t" => in_text = false,
                b"rPh" => in_phonetic = false,
                _ => {}
            },
            Event::Text(t) if in_text && !in_phonetic => {
                if let Some(current) = current.as_mut() {
                    let text = t.decode().map_err(|e| xml_error(SHARED_STRINGS_ENTRY, e))?;
                    current.push_str(&text);
                }
            }
            Event::GeneralRef(r) if in_text && !in_phonetic => {
                if let Some(current) = current.as_mut() {
                    let name = r.decode().map_err(|e| xml_error(SHARED_STRINGS_ENTRY, e))?;
                    push_reference(current, &name);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(strings)
}

/// Cell being assembled while walking a `<c>` element.
#[derive(Default)]
struct PendingCell {
    column: usize,
    kind: Option<String>,
    value: String,
}

impl PendingCell {
    fn resolve(self, shared: &[String]) -> String {
        match self.kind.as_deref() {
            Some("s") => self
                .value
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|idx| shared.get(idx))
                .cloned()
                .unwrap_or_default(),
            Some("b") => match self.value.trim() {
                "1" => "TRUE".to_string(),
                "0" => "FALSE".to_string(),
                other => other.to_string(),
            },
            _ => self.value,
        }
    }
}

/// Parse worksheet XML into a dense grid of cell strings.
fn parse_sheet(xml: &str, entry: &str, shared: &[String]) -> Result<Vec<Vec<String>>> {
    let mut reader = Reader::from_str(xml);
    let mut grid = Vec::new();
    let mut row: Option<Vec<(usize, String)>> = None;
    let mut cell: Option<PendingCell> = None;
    let mut next_column = 0usize;
    let mut in_value = false;

    loop {
        match reader.read_event().map_err(|e| xml_error(entry, e))? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"row" => {
                    row = Some(Vec::new());
                    next_column = 0;
                }
                b"c" => {
                    let pending = start_cell(&e, next_column, entry)?;
                    next_column = pending.column + 1;
                    cell = Some(pending);
                }
                b"v" | b"t" => in_value = cell.is_some(),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"c" => {
                    let pending = start_cell(&e, next_column, entry)?;
                    next_column = pending.column + 1;
                }
                b"row" => grid.push(Vec::new()),
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"c" => {
                    if let Some(pending) = cell.take()
                        && let Some(cells) = row.as_mut()
                    {
                        let column = pending.column;
                        cells.push((column, pending.resolve(shared)));
                    }
                }
                b"v" | b"t" => in_value = false,
                b"row" => {
                    if let Some(cells) = row.take() {
                        grid.push(densify(cells));
                    }
                }
                _ => {}
            },
            Event::Text(t) if in_value => {
                if let Some(pending) = cell.as_mut() {
                    let text = t.decode().map_err(|e| xml_error(entry, e))?;
                    pending.value.push_str(&text);
                }
            }
            Event::GeneralRef(r) if in_value => {
                if let Some(pending) = cell.as_mut() {
                    let name = r.decode().map_err(|e| xml_error(entry, e))?;
                    push_reference(&mut pending.value, &name);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(grid)
}

fn start_cell(
    element: &BytesStart<'_>,
    fallback_column: usize,
    entry: &str,
) -> Result<PendingCell> {
    let column = match attribute(element, b"r") {
        Some(reference) => column_index(&reference)
            .ok_or_else(|| {
                xml_error(entry, format!("cell reference '{reference}' is beyond column XFD"))
            })?
            .unwrap_or(fallback_column),
        None => fallback_column,
    };
    if column > MAX_COLUMN_INDEX {
        return Err(xml_error(entry, "row has more cells than column XFD allows"));
    }
    Ok(PendingCell {
        column,
        kind: attribute(element, b"t"),
        value: String::new(),
    })
}

/// Zero-based column index of an A1-style reference (`C7` -> 2).
///
/// `Some(None)` means the reference has no column letters; `None` means the
/// letters name a column past `XFD`.
fn column_index(reference: &str) -> Option<Option<usize>> {
    let letters: Vec<u8> = reference
        .bytes()
        .take_while(u8::is_ascii_alphabetic)
        .collect();
    if letters.is_empty() {
        return Some(None);
    }
    let mut index = 0usize;
    for letter in letters {
        let digit = usize::from(letter.to_ascii_uppercase() - b'A') + 1;
        index = index
            .checked_mul(26)
            .and_then(|scaled| scaled.checked_add(digit))
            .filter(|&next| next <= MAX_COLUMN_INDEX + 1)?;
    }
    Some(Some(index - 1))
}

fn densify(cells: Vec<(usize, String)>) -> Vec<String> {
    let width = cells.iter().map(|(column, _)| column + 1).max().unwrap_or(0);
    let mut dense = vec![String::new(); width];
    for (column, value) in cells {
        dense[column] = value;
    }
    dense
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IngestError;

    #[test]
    fn column_index_handles_multi_letter_references() {
        assert_eq!(column_index("A1"), Some(Some(0)));
        assert_eq!(column_index("C7"), Some(Some(2)));
        assert_eq!(column_index("AA10"), Some(Some(26)));
        assert_eq!(column_index("XFD1"), Some(Some(MAX_COLUMN_INDEX)));
        assert_eq!(column_index("12"), Some(None));
    }

    #[test]
    fn column_index_rejects_columns_past_xfd() {
        assert_eq!(column_index("XFE1"), None);
        assert_eq!(column_index("ZZZZZZZ1"), None);
        assert_eq!(column_index("ZZZZZZZZZZZZZZZZZZZZ1"), None);
    }

    #[test]
    fn oversized_cell_reference_fails_the_sheet() {
        let sheet = r#"<worksheet><sheetData>
            <row r="1"><c r="A1"><v>1</v></c><c r="ZZZZZZZ1"><v>2</v></c></row>
        </sheetData></worksheet>"#;
        let err = parse_sheet(sheet, "xl/worksheets/sheet1.xml", &[]).unwrap_err();
        assert!(matches!(
            err,
            IngestError::Xml { ref entry, ref message }
                if entry == "xl/worksheets/sheet1.xml" && message.contains("ZZZZZZZ1")
        ));

        let empty_cell = r#"<worksheet><sheetData>
            <row r="1"><c r="ZZZZZZZZZZZZZZZZZZZZ1"/></row>
        </sheetData></worksheet>"#;
        assert!(parse_sheet(empty_cell, "sheet.xml", &[]).is_err());
    }

    #[test]
    fn sheet_resolves_shared_inline_and_sparse_cells() {
        let shared = parse_shared_strings(
            r#"<sst><si><t>Test</t></si><si><r><t>Res</t></r><r><t>ult</t></r></si></sst>"#,
        )
        .unwrap();
        assert_eq!(shared, vec!["Test", "Result"]);

        let sheet = r#"<worksheet><sheetData>
            <row r="1"><c r="A1" t="s"><v>0</v></c><c r="B1" t="s"><v>1</v></c></row>
            <row r="2"><c r="A2" t="inlineStr"><is><t>EMC</t></is></c><c r="C2"><v>3.5</v></c></row>
            <row r="3"><c r="B3" t="b"><v>1</v></c></row>
        </sheetData></worksheet>"#;
        let grid = parse_sheet(sheet, "sheet.xml", &shared).unwrap();
        assert_eq!(
            grid,
            vec![
                vec!["Test".to_string(), "Result".to_string()],
                vec!["EMC".to_string(), String::new(), "3.5".to_string()],
                vec![String::new(), "TRUE".to_string()],
            ]
        );
    }

    #[test]
    fn relationship_targets_resolve_relative_and_absolute() {
        assert_eq!(resolve_target("worksheets/sheet2.xml"), "xl/worksheets/sheet2.xml");
        assert_eq!(resolve_target("/xl/worksheets/a.xml"), "xl/worksheets/a.xml");
    }
}
