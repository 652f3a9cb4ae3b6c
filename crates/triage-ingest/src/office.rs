//! Shared helpers for Office Open XML containers (DOCX, XLSX).

use std::fmt::Display;
use std::io::{Cursor, Read};

use quick_xml::events::BytesStart;
use zip::ZipArchive;

use crate::error::{IngestError, Result};

pub(crate) type Archive<'a> = ZipArchive<Cursor<&'a [u8]>>;

pub(crate) fn open_archive(bytes: &[u8]) -> Result<Archive<'_>> {
    Ok(ZipArchive::new(Cursor::new(bytes))?)
}

/// Read an archive entry as UTF-8 text.
pub(crate) fn read_entry(archive: &mut Archive<'_>, entry: &str) -> Result<String> {
    let mut file = archive
        .by_name(entry)
        .map_err(|err| match err {
            zip::result::ZipError::FileNotFound => IngestError::MissingArchiveEntry {
                entry: entry.to_string(),
            },
            other => IngestError::from(other),
        })?;
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| IngestError::Archive {
            message: format!("{entry}: {e}"),
        })?;
    Ok(content)
}

/// Read an optional archive entry; `None` when the part is absent.
pub(crate) fn read_optional_entry(
    archive: &mut Archive<'_>,
    entry: &str,
) -> Result<Option<String>> {
    match read_entry(archive, entry) {
        Ok(content) => Ok(Some(content)),
        Err(IngestError::MissingArchiveEntry { .. }) => Ok(None),
        Err(other) => Err(other),
    }
}

pub(crate) fn xml_error(entry: &str, error: impl Display) -> IngestError {
    IngestError::Xml {
        entry: entry.to_string(),
        message: error.to_string(),
    }
}

/// Append the text an XML entity or character reference stands for.
///
/// Unknown named entities are dropped.
pub(crate) fn push_reference(out: &mut String, name: &str) {
    match name {
        "amp" => out.push('&'),
        "lt" => out.push('<'),
        "gt" => out.push('>'),
        "quot" => out.push('"'),
        "apos" => out.push('\''),
        _ => {
            if let Some(ch) = char_reference(name) {
                out.push(ch);
            }
        }
    }
}

fn char_reference(name: &str) -> Option<char> {
    let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        name.strip_prefix('#')?.parse().ok()?
    };
    char::from_u32(code)
}

/// Value of the attribute whose local name is `local`, if present.
pub(crate) fn attribute(element: &BytesStart<'_>, local: &[u8]) -> Option<String> {
    element
        .attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == local)
        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_entity_and_char_references() {
        let mut out = String::new();
        for name in ["amp", "lt", "#x41", "#66", "nbsp"] {
            push_reference(&mut out, name);
        }
        assert_eq!(out, "&<AB");
    }
}
