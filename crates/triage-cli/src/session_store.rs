//! Session persistence between invocations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use triage_core::SessionState;

/// Load a session file. A missing file starts a fresh session.
pub fn load_session(path: &Path) -> Result<SessionState> {
    if !path.exists() {
        debug!(path = %path.display(), "no session file; starting fresh");
        return Ok(SessionState::new());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("read session file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("parse session file {}", path.display()))
}

/// Write the session back as pretty JSON.
pub fn save_session(path: &Path, session: &SessionState) -> Result<()> {
    let json = serde_json::to_string_pretty(session).context("serialize session")?;
    fs::write(path, json).with_context(|| format!("write session file {}", path.display()))?;
    debug!(path = %path.display(), "session saved");
    Ok(())
}
