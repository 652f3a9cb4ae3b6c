//! Format dispatch: file or bytes in, text or rows out.

use std::path::Path;

use triage_model::TabularRow;

use crate::csv_rows::read_csv_rows;
use crate::docx::extract_docx_text;
use crate::error::{IngestError, Result};
use crate::format::{ReportFormat, detect_format};
use crate::pdf::extract_pdf_text;
use crate::text::decode_text;
use crate::xlsx::read_xlsx_rows;

/// Content extracted from a report container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
    /// Concatenated document text, one logical line per `\n`.
    Text(String),
    /// Column-named rows from a tabular source.
    Rows(Vec<TabularRow>),
}

impl Extracted {
    /// True when extraction produced no text (after trimming) or no rows.
    pub fn is_empty(&self) -> bool {
        match self {
            Extracted::Text(text) => text.trim().is_empty(),
            Extracted::Rows(rows) => rows.is_empty(),
        }
    }
}

/// Extract report content from in-memory bytes of a known format.
pub fn extract_bytes(format: ReportFormat, bytes: &[u8]) -> Result<Extracted> {
    let extracted = match format {
        ReportFormat::Text => Extracted::Text(decode_text(bytes)),
        ReportFormat::Pdf => Extracted::Text(extract_pdf_text(bytes)?),
        ReportFormat::Docx => Extracted::Text(extract_docx_text(bytes)?),
        ReportFormat::Csv => Extracted::Rows(read_csv_rows(bytes)?),
        ReportFormat::Xlsx => Extracted::Rows(read_xlsx_rows(bytes)?),
    };
    Ok(extracted)
}

/// Detect the format of `path` and extract its content.
pub fn extract_file(path: &Path) -> Result<Extracted> {
    let format = detect_format(path)?;
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    tracing::debug!(
        path = %path.display(),
        format = %format,
        bytes = bytes.len(),
        "extracting report"
    );
    extract_bytes(format, &bytes)
}
