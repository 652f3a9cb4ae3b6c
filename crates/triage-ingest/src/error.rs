//! Error types for report ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a report file into text or rows.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Format Errors ===
    /// The file extension is not one of the supported report formats.
    #[error("unsupported file type '{extension}': {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === File System Errors ===
    /// Report file not found.
    #[error("report file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Container Errors ===
    /// Failed to parse CSV content.
    #[error("failed to parse CSV: {message}")]
    Csv { message: String },

    /// PDF text extraction failed.
    #[error("failed to extract PDF text: {message}")]
    Pdf { message: String },

    /// DOCX/XLSX archive could not be opened or read.
    #[error("failed to read archive: {message}")]
    Archive { message: String },

    /// A required part is missing from an Office archive.
    #[error("archive entry '{entry}' not found")]
    MissingArchiveEntry { entry: String },

    /// Office XML part is malformed.
    #[error("malformed XML in '{entry}': {message}")]
    Xml { entry: String, message: String },
}

impl From<zip::result::ZipError> for IngestError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::FileNotFound => Self::MissingArchiveEntry {
                entry: String::from("<unknown>"),
            },
            other => Self::Archive {
                message: other.to_string(),
            },
        }
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        Self::Csv {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::UnsupportedFormat {
            path: PathBuf::from("/reports/scan.png"),
            extension: "png".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported file type 'png': /reports/scan.png");
    }

    #[test]
    fn test_error_from_zip() {
        let err: IngestError = zip::result::ZipError::FileNotFound.into();
        assert!(matches!(err, IngestError::MissingArchiveEntry { .. }));
    }
}
