//! Report ingestion.
//!
//! Turns report files into either a single text blob or a sequence of
//! column-named rows. This layer knows nothing about test records: the
//! parser in `triage-core` consumes its output.
//!
//! # Supported Formats
//!
//! - **Text** (`.txt`, `.log`): UTF-8, BOM stripped, invalid bytes replaced
//! - **PDF**: page text via `pdf-extract`
//! - **DOCX**: paragraphs of `word/document.xml`, empty ones dropped
//! - **CSV**: first record is the header row
//! - **XLSX**: first worksheet, first non-empty row is the header row
//!
//! Anything else is rejected with [`IngestError::UnsupportedFormat`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use triage_ingest::{Extracted, extract_file};
//!
//! match extract_file(Path::new("reports/fct.pdf"))? {
//!     Extracted::Text(text) => println!("{} chars", text.len()),
//!     Extracted::Rows(rows) => println!("{} rows", rows.len()),
//! }
//! ```

mod csv_rows;
mod docx;
mod error;
mod extract;
mod format;
mod office;
mod pdf;
mod text;
mod xlsx;

// === Error Types ===
pub use error::{IngestError, Result};

// === Format Detection ===
pub use format::{ReportFormat, detect_format};

// === Extraction ===
pub use csv_rows::read_csv_rows;
pub use docx::extract_docx_text;
pub use extract::{Extracted, extract_bytes, extract_file};
pub use pdf::extract_pdf_text;
pub use text::decode_text;
pub use xlsx::read_xlsx_rows;
