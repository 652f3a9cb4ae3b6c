//! Error types for table loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading standards tables.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// Override directory not found.
    #[error("Standards directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read a table file.
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse CSV content.
    #[error("Failed to parse CSV {file}: {message}")]
    CsvParse { file: String, message: String },

    /// Invalid value in CSV field.
    #[error("Invalid {field} value '{value}' in {file}")]
    InvalidValue {
        field: &'static str,
        value: String,
        file: String,
    },
}

/// Result type for table loading.
pub type Result<T> = std::result::Result<T, StandardsError>;
