//! Plain text decoding.

/// Decode report bytes as UTF-8, stripping a BOM and replacing invalid sequences.
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bom_and_replaces_invalid_bytes() {
        assert_eq!(decode_text(b"\xEF\xBB\xBFok"), "ok");
        assert_eq!(decode_text(b"a\xFFb"), "a\u{FFFD}b");
    }
}
