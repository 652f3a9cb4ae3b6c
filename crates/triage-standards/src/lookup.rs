//! Keyword-based standard lookup.
//!
//! Matching is plain case-insensitive substring containment with no word
//! boundaries: the keyword `can` matches inside `scandal`, and `temp`
//! matches inside `attempt`. Callers that need tighter matching must order
//! or curate the table instead.

use triage_model::{KeywordStandardMap, StandardEntry};

/// First-keyword-wins lookup over an ordered [`KeywordStandardMap`].
#[derive(Debug, Clone, Default)]
pub struct StandardLookup {
    map: KeywordStandardMap,
}

impl StandardLookup {
    pub fn new(map: KeywordStandardMap) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &KeywordStandardMap {
        &self.map
    }

    /// Returns the standard of the first table entry whose keyword occurs in `text`.
    pub fn lookup(&self, text: &str) -> Option<&str> {
        self.matching_entry(text)
            .map(|entry| entry.standard.as_str())
    }

    /// Returns the first matching table entry, keyword included.
    pub fn matching_entry(&self, text: &str) -> Option<&StandardEntry> {
        let haystack = text.to_lowercase();
        self.map
            .iter()
            .find(|entry| !entry.keyword.is_empty() && haystack.contains(entry.keyword.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &[(&'static str, &'static str)]) -> StandardLookup {
        StandardLookup::new(pairs.iter().copied().collect())
    }

    #[test]
    fn table_order_beats_text_order() {
        let lookup = lookup(&[("vibration", "IEC 60068-2-6"), ("gps", "NMEA 0183")]);
        assert_eq!(lookup.lookup("GPS antenna vibration"), Some("IEC 60068-2-6"));
    }

    #[test]
    fn matching_ignores_word_boundaries() {
        let lookup = lookup(&[("can", "ISO 11898")]);
        assert_eq!(lookup.lookup("Scandal report"), Some("ISO 11898"));
    }

    #[test]
    fn no_match_is_none() {
        let lookup = lookup(&[("gps", "NMEA 0183")]);
        assert_eq!(lookup.lookup("Over-voltage Test"), None);
        assert_eq!(StandardLookup::default().lookup("gps"), None);
    }
}
