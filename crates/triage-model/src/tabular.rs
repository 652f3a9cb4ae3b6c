//! Rows from tabular report sources.

use serde::{Deserialize, Serialize};

/// One data row of a CSV or spreadsheet, columns kept in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularRow {
    pub fields: Vec<(String, String)>,
}

impl TabularRow {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Build a row by zipping headers with cell values. Missing cells are empty.
    pub fn from_cells(headers: &[String], cells: &[String]) -> Self {
        let fields = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = cells.get(idx).map(|v| v.trim()).unwrap_or("");
                (header.clone(), value.to_string())
            })
            .collect();
        Self { fields }
    }

    /// Case-insensitive column lookup.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(column))
            .map(|(_, value)| value.as_str())
    }

    /// True when every cell is blank.
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|(_, value)| value.trim().is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TabularRow {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
