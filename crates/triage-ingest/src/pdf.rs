//! PDF text extraction.

use crate::error::{IngestError, Result};

/// Extract the text of every page, pages separated by newlines.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| IngestError::Pdf {
        message: e.to_string(),
    })?;
    tracing::debug!(chars = text.len(), "extracted pdf text");
    Ok(text)
}
