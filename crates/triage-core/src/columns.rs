//! Header synonym table for tabular report sources.

use triage_model::TabularRow;

/// Semantic role of a tabular column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Name,
    Standard,
    Expected,
    Actual,
    Result,
    Description,
}

/// Resolve a header to its role. Case and non-alphanumerics are ignored.
pub fn column_role(header: &str) -> Option<ColumnRole> {
    let key: String = header
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    match key.as_str() {
        "test" | "testname" | "testcase" | "name" => Some(ColumnRole::Name),
        "standard" => Some(ColumnRole::Standard),
        "expected" | "expectedvalue" | "requirement" => Some(ColumnRole::Expected),
        "actual" | "actualvalue" | "value" | "observed" => Some(ColumnRole::Actual),
        "result" | "status" | "outcome" => Some(ColumnRole::Result),
        "description" => Some(ColumnRole::Description),
        _ => None,
    }
}

/// Column indices for each role. The first column claiming a role wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name: Option<usize>,
    pub standard: Option<usize>,
    pub expected: Option<usize>,
    pub actual: Option<usize>,
    pub result: Option<usize>,
}

impl ColumnLayout {
    /// Assign roles to the columns of `row`.
    ///
    /// A `description` column fills the expected slot when no expected
    /// column exists, else the actual slot when no actual column exists.
    pub fn from_row(row: &TabularRow) -> Self {
        let mut layout = Self::default();
        let mut descriptions = Vec::new();
        for (idx, (header, _)) in row.fields.iter().enumerate() {
            let slot = match column_role(header) {
                Some(ColumnRole::Name) => &mut layout.name,
                Some(ColumnRole::Standard) => &mut layout.standard,
                Some(ColumnRole::Expected) => &mut layout.expected,
                Some(ColumnRole::Actual) => &mut layout.actual,
                Some(ColumnRole::Result) => &mut layout.result,
                Some(ColumnRole::Description) => {
                    descriptions.push(idx);
                    continue;
                }
                None => continue,
            };
            if slot.is_none() {
                *slot = Some(idx);
            }
        }
        if let Some(&idx) = descriptions.first() {
            if layout.expected.is_none() {
                layout.expected = Some(idx);
            } else if layout.actual.is_none() {
                layout.actual = Some(idx);
            }
        }
        layout
    }

    /// True when `idx` is bound to a role.
    pub fn is_mapped(&self, idx: usize) -> bool {
        [
            self.name,
            self.standard,
            self.expected,
            self.actual,
            self.result,
        ]
        .contains(&Some(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonyms_ignore_case_and_punctuation() {
        assert_eq!(column_role("Test Name"), Some(ColumnRole::Name));
        assert_eq!(column_role("test_case"), Some(ColumnRole::Name));
        assert_eq!(column_role("Actual/Value"), Some(ColumnRole::Actual));
        assert_eq!(column_role("Expected Value"), Some(ColumnRole::Expected));
        assert_eq!(column_role("STATUS"), Some(ColumnRole::Result));
        assert_eq!(column_role("Operator"), None);
    }

    #[test]
    fn description_fills_expected_first() {
        let row: TabularRow = [("Test", ""), ("Description", ""), ("Result", "")]
            .into_iter()
            .collect();
        let layout = ColumnLayout::from_row(&row);
        assert_eq!(layout.expected, Some(1));
        assert_eq!(layout.actual, None);
    }

    #[test]
    fn description_falls_back_to_actual() {
        let row: TabularRow = [("Test", ""), ("Requirement", ""), ("Description", "")]
            .into_iter()
            .collect();
        let layout = ColumnLayout::from_row(&row);
        assert_eq!(layout.expected, Some(1));
        assert_eq!(layout.actual, Some(2));
    }

    #[test]
    fn description_passes_through_when_both_present() {
        let row: TabularRow = [("Expected", ""), ("Actual", ""), ("Description", "")]
            .into_iter()
            .collect();
        let layout = ColumnLayout::from_row(&row);
        assert!(!layout.is_mapped(2));
    }

    #[test]
    fn duplicate_roles_keep_first_column() {
        let row: TabularRow = [("Name", ""), ("Test", "")].into_iter().collect();
        let layout = ColumnLayout::from_row(&row);
        assert_eq!(layout.name, Some(0));
        assert!(!layout.is_mapped(1));
    }
}
