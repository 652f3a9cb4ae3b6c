//! Data model for compliance report triage.
//!
//! - [`TestRecord`]: one extracted test outcome
//! - [`TestResult`]: normalized PASS/FAIL/INFO/UNKNOWN outcome
//! - [`TabularRow`]: one row of a CSV/XLSX source, columns in source order
//! - [`KeywordStandardMap`]: ordered keyword to regulatory standard table
//! - [`TestCaseInfo`] / [`ComponentInfo`]: knowledge-base rows

pub mod knowledge;
pub mod record;
pub mod result;
pub mod standard;
pub mod tabular;

pub use knowledge::{ComponentInfo, TestCaseInfo};
pub use record::{NAME_PLACEHOLDER, TestRecord};
pub use result::TestResult;
pub use standard::{KeywordStandardMap, StandardEntry};
pub use tabular::TabularRow;
