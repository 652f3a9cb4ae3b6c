//! Report format detection.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::{IngestError, Result};

/// Container formats the ingest layer can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Plain UTF-8 text (`.txt`, `.log`).
    Text,
    Csv,
    Pdf,
    Docx,
    Xlsx,
}

impl ReportFormat {
    /// Map a file extension (case-insensitive, without the dot).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim().to_ascii_lowercase().as_str() {
            "txt" | "log" => Some(Self::Text),
            "csv" => Some(Self::Csv),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "xlsx" => Some(Self::Xlsx),
            _ => None,
        }
    }

    /// Returns true for formats that yield rows instead of text.
    pub fn is_tabular(&self) -> bool {
        matches!(self, Self::Csv | Self::Xlsx)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Csv => "csv",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the report format of `path` from its extension.
pub fn detect_format(path: &Path) -> Result<ReportFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");
    ReportFormat::from_extension(extension).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
        extension: extension.to_string(),
    })
}
