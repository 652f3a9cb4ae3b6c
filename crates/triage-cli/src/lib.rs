//! Library side of the `triage` command-line tool.

pub mod logging;
pub mod session_store;
pub mod summary;
pub mod types;
pub mod verify;
