//! Override directory resolution.

use std::path::PathBuf;

/// Environment variable naming a directory of replacement tables.
pub const STANDARDS_ENV_VAR: &str = "TRIAGE_STANDARDS_DIR";

/// Returns the override directory from `TRIAGE_STANDARDS_DIR`, if set and non-empty.
pub fn standards_override_dir() -> Option<PathBuf> {
    std::env::var_os(STANDARDS_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
