//! Compliance report triage.
//!
//! Report text (or tabular rows) goes in, classified [`TestRecord`]s come
//! out:
//!
//! ```text
//! text ─► LineClassifier ─► ReportParser::annotate ─► classify ─► Classification
//! rows ─► ColumnLayout    ─┘
//! ```
//!
//! # Example
//!
//! ```
//! use triage_core::{ReportParser, classify};
//!
//! let parser = ReportParser::default();
//! let records = parser.parse_text("GPS Lock Acquisition Failed\nBoot is success\n");
//! let summary = classify(&records);
//! assert_eq!(summary.failed[0].name, "GPS Lock Acquisition");
//! assert_eq!(summary.pass_rate_label().to_string(), "50.0%");
//! ```

pub mod classifier;
pub mod classify;
pub mod columns;
pub mod components;
pub mod links;
pub mod parser;
pub mod requirements;
pub mod session;

pub use classifier::{ClassifierOptions, DiagnosticNames, LineClassifier, LinePattern};
pub use classify::{Classification, PassRate, classify};
pub use components::{ComponentEntry, ComponentMatch, lookup_component};
pub use links::component_research_links;
pub use parser::ReportParser;
pub use requirements::{Requirement, generate_requirements};
pub use session::{SessionError, SessionState};
pub use triage_model::{TestRecord, TestResult};
