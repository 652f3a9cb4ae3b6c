//! DOCX paragraph text extraction.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::Result;
use crate::office::{open_archive, push_reference, read_entry, xml_error};

const DOCUMENT_ENTRY: &str = "word/document.xml";

/// Extract document paragraphs joined by newlines. Empty paragraphs are dropped.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String> {
    let mut archive = open_archive(bytes)?;
    let xml = read_entry(&mut archive, DOCUMENT_ENTRY)?;
    let paragraphs = paragraphs_from_xml(&xml)?;
    tracing::debug!(paragraphs = paragraphs.len(), "extracted docx paragraphs");
    Ok(paragraphs.join("\n"))
}

/// Collect the text of every `w:p`, in document order.
///
/// Paragraphs nested in text boxes are emitted before the paragraph that
/// contains them.
fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut open: Vec<String> = Vec::new();
    let mut paragraphs = Vec::new();
    let mut in_text = false;

    loop {
        match reader
            .read_event()
            .map_err(|e| xml_error(DOCUMENT_ENTRY, e))?
        {
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => open.push(String::new()),
                b"t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => {
                if let Some(current) = open.last_mut() {
                    match e.local_name().as_ref() {
                        b"tab" => current.push('\t'),
                        b"br" | b"cr" => current.push('\n'),
                        _ => {}
                    }
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"p" => {
                    if let Some(text) = open.pop()
                        && !text.is_empty()
                    {
                        paragraphs.push(text);
                    }
                }
                b"t" => in_text = false,
                _ => {}
            },
            Event::Text(t) if in_text => {
                if let Some(current) = open.last_mut() {
                    let text = t.decode().map_err(|e| xml_error(DOCUMENT_ENTRY, e))?;
                    current.push_str(&text);
                }
            }
            Event::GeneralRef(r) if in_text => {
                if let Some(current) = open.last_mut() {
                    let name = r.decode().map_err(|e| xml_error(DOCUMENT_ENTRY, e))?;
                    push_reference(current, &name);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
