//! Test-case and component knowledge-base loading.

use std::io::Cursor;

use serde::Deserialize;
use triage_model::{ComponentInfo, TestCaseInfo};

use crate::embedded;
use crate::error::{Result, StandardsError};

/// Load the embedded test-case knowledge base.
pub fn load_test_cases() -> Result<Vec<TestCaseInfo>> {
    test_cases_from_str(embedded::TEST_CASES, embedded::TEST_CASES_FILE)
}

/// Load the embedded component knowledge base.
pub fn load_components() -> Result<Vec<ComponentInfo>> {
    components_from_str(embedded::COMPONENTS, embedded::COMPONENTS_FILE)
}

#[derive(Debug, Deserialize)]
struct TestCaseCsvRow {
    #[serde(rename = "Test Case")]
    test_case: String,
    #[serde(rename = "Requirement")]
    requirement: String,
    #[serde(rename = "Equipment")]
    equipment: String,
}

#[derive(Debug, Deserialize)]
struct ComponentCsvRow {
    #[serde(rename = "Part Number")]
    part_number: String,
    #[serde(rename = "Manufacturer")]
    manufacturer: String,
    #[serde(rename = "Function")]
    function: String,
    #[serde(rename = "Voltage")]
    voltage: String,
    #[serde(rename = "Current")]
    current: String,
}

/// Parse test cases. Equipment is a `;`-separated list.
pub fn test_cases_from_str(content: &str, file: &str) -> Result<Vec<TestCaseInfo>> {
    let mut reader = reader_for(content);
    let mut cases = Vec::new();

    for result in reader.deserialize::<TestCaseCsvRow>() {
        let row = result.map_err(|e| csv_error(file, &e))?;
        let key = row.test_case.to_lowercase();
        if key.is_empty() {
            continue;
        }
        if row.requirement.is_empty() {
            return Err(StandardsError::InvalidValue {
                field: "Requirement",
                value: key,
                file: file.to_string(),
            });
        }

        let equipment = row
            .equipment
            .split(';')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();

        cases.push(TestCaseInfo {
            key,
            requirement: row.requirement,
            equipment,
        });
    }

    tracing::debug!(file, entries = cases.len(), "loaded test cases");
    Ok(cases)
}

/// Parse components. Part numbers are stored lower-case.
pub fn components_from_str(content: &str, file: &str) -> Result<Vec<ComponentInfo>> {
    let mut reader = reader_for(content);
    let mut components = Vec::new();

    for result in reader.deserialize::<ComponentCsvRow>() {
        let row = result.map_err(|e| csv_error(file, &e))?;
        let part_number = row.part_number.to_lowercase();
        if part_number.is_empty() {
            continue;
        }

        components.push(ComponentInfo {
            part_number,
            manufacturer: row.manufacturer,
            function: row.function,
            voltage: non_empty(row.voltage),
            current: non_empty(row.current),
        });
    }

    tracing::debug!(file, entries = components.len(), "loaded components");
    Ok(components)
}

fn reader_for(content: &str) -> csv::Reader<Cursor<&[u8]>> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(Cursor::new(content.trim_start_matches('\u{feff}').as_bytes()))
}

fn csv_error(file: &str, error: &csv::Error) -> StandardsError {
    StandardsError::CsvParse {
        file: file.to_string(),
        message: error.to_string(),
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_test_cases_split_equipment() {
        let cases = load_test_cases().unwrap();
        let ip = cases.iter().find(|c| c.key == "ip rating").unwrap();
        assert_eq!(ip.equipment, vec!["Dust Chamber", "Water Jet Nozzles"]);
    }

    #[test]
    fn embedded_components_lowercase_part_numbers() {
        let components = load_components().unwrap();
        let mosfet = components
            .iter()
            .find(|c| c.part_number == "irfb4110")
            .unwrap();
        assert_eq!(mosfet.manufacturer, "Infineon");
        assert_eq!(mosfet.current.as_deref(), Some("180A"));

        let monitor = components
            .iter()
            .find(|c| c.part_number == "bq76952")
            .unwrap();
        assert_eq!(monitor.current, None);
    }

    #[test]
    fn test_case_without_requirement_is_rejected() {
        let err = test_cases_from_str(
            "Test Case,Requirement,Equipment\nemc,,Antenna\n",
            "test.csv",
        )
        .unwrap_err();
        assert!(matches!(err, StandardsError::InvalidValue { field: "Requirement", .. }));
    }
}
