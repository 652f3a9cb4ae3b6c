//! Keyword to regulatory standard table.

use serde::{Deserialize, Serialize};

/// One `(keyword, standard)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardEntry {
    /// Lower-case keyword matched as a substring.
    pub keyword: String,
    pub standard: String,
}

impl StandardEntry {
    pub fn new(keyword: impl AsRef<str>, standard: impl Into<String>) -> Self {
        Self {
            keyword: keyword.as_ref().trim().to_lowercase(),
            standard: standard.into(),
        }
    }
}

/// Ordered keyword table. Iteration order is match precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordStandardMap {
    entries: Vec<StandardEntry>,
}

impl KeywordStandardMap {
    pub fn new(entries: Vec<StandardEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[StandardEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &StandardEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(&'static str, &'static str)> for KeywordStandardMap {
    fn from_iter<T: IntoIterator<Item = (&'static str, &'static str)>>(iter: T) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(keyword, standard)| StandardEntry::new(keyword, standard))
                .collect(),
        )
    }
}
