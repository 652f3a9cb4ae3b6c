//! Embedded table data.
//!
//! Tables are compiled into the binary with `include_str!()` so the tool
//! works offline without path resolution.

/// Keyword to standard table. Row order is match precedence.
pub const KEYWORD_STANDARDS: &str = include_str!("../data/keyword_standards.csv");

/// Test-case knowledge base used for requirement generation.
pub const TEST_CASES: &str = include_str!("../data/test_cases.csv");

/// Component knowledge base used for part lookup.
pub const COMPONENTS: &str = include_str!("../data/components.csv");

/// File name of the keyword table inside an override directory.
pub const KEYWORD_STANDARDS_FILE: &str = "keyword_standards.csv";

/// File name of the test-case table inside an override directory.
pub const TEST_CASES_FILE: &str = "test_cases.csv";

/// File name of the component table inside an override directory.
pub const COMPONENTS_FILE: &str = "components.csv";
