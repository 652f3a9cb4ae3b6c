//! Bundle of every table the triage pipeline consults.

use std::path::Path;

use triage_model::{ComponentInfo, KeywordStandardMap, TestCaseInfo};

use crate::embedded;
use crate::error::{Result, StandardsError};
use crate::knowledge::{components_from_str, test_cases_from_str};
use crate::keywords;
use crate::paths::standards_override_dir;

/// Keyword table plus knowledge bases, loaded once per run.
#[derive(Debug, Clone)]
pub struct StandardsRegistry {
    pub keywords: KeywordStandardMap,
    pub test_cases: Vec<TestCaseInfo>,
    pub components: Vec<ComponentInfo>,
}

impl StandardsRegistry {
    /// Load from `dir` when given, else from `TRIAGE_STANDARDS_DIR`, else embedded data.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::load_from_dir(dir),
            None => match standards_override_dir() {
                Some(dir) => Self::load_from_dir(&dir),
                None => Self::load_embedded(),
            },
        }
    }

    /// Load the tables compiled into the binary.
    pub fn load_embedded() -> Result<Self> {
        Ok(Self {
            keywords: keywords::load()?,
            test_cases: crate::knowledge::load_test_cases()?,
            components: crate::knowledge::load_components()?,
        })
    }

    /// Load tables from a directory. Files absent from `dir` fall back to the embedded copy.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(StandardsError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }
        tracing::info!(dir = %dir.display(), "loading standards tables from directory");

        let keyword_csv = read_or_embedded(
            dir,
            embedded::KEYWORD_STANDARDS_FILE,
            embedded::KEYWORD_STANDARDS,
        )?;
        let test_case_csv =
            read_or_embedded(dir, embedded::TEST_CASES_FILE, embedded::TEST_CASES)?;
        let component_csv =
            read_or_embedded(dir, embedded::COMPONENTS_FILE, embedded::COMPONENTS)?;

        Ok(Self {
            keywords: keywords::load_from_str(&keyword_csv, embedded::KEYWORD_STANDARDS_FILE)?,
            test_cases: test_cases_from_str(&test_case_csv, embedded::TEST_CASES_FILE)?,
            components: components_from_str(&component_csv, embedded::COMPONENTS_FILE)?,
        })
    }
}

fn read_or_embedded(dir: &Path, file: &str, fallback: &str) -> Result<String> {
    let path = dir.join(file);
    if !path.is_file() {
        tracing::debug!(file, "no override present, using embedded table");
        return Ok(fallback.to_string());
    }
    std::fs::read_to_string(&path).map_err(|source| StandardsError::FileRead { path, source })
}
