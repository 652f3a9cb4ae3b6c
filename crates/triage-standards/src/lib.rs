//! Keyword to regulatory standard tables, knowledge bases and lookup.
//!
//! All tables ship as CSV embedded at compile time. A directory holding
//! replacement files can be supplied at runtime; any file it lacks falls
//! back to the embedded copy.
//!
//! # Tables
//!
//! ```text
//! data/
//! ├── keyword_standards.csv   # Keyword,Standard (order = match precedence)
//! ├── test_cases.csv          # Test Case,Requirement,Equipment (';'-separated)
//! └── components.csv          # Part Number,Manufacturer,Function,Voltage,Current
//! ```
//!
//! # Example
//!
//! ```
//! use triage_standards::{StandardLookup, load_keyword_map};
//!
//! let lookup = StandardLookup::new(load_keyword_map().unwrap());
//! assert_eq!(
//!     lookup.lookup("GPS Lock Acquisition"),
//!     Some("NMEA 0183 / GNSS Performance Standards")
//! );
//! ```

pub mod embedded;
pub mod error;
pub mod knowledge;
pub mod keywords;
pub mod lookup;
pub mod paths;
pub mod registry;

pub use error::{Result, StandardsError};
pub use knowledge::{load_components, load_test_cases};
pub use keywords::load as load_keyword_map;
pub use lookup::StandardLookup;
pub use paths::{STANDARDS_ENV_VAR, standards_override_dir};
pub use registry::StandardsRegistry;
