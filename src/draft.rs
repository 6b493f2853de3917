//! JSON drafts: the letter state as a file the command line can render or export.

use std::{fs, path::Path};

use anyhow::Context;
use tracing::{debug, warn};

use crate::models::LetterState;

/// Load a draft from `path`. Missing keys become empty strings and missing student ids
/// are generated.
pub fn load_draft<P: AsRef<Path>>(path: P) -> anyhow::Result<LetterState> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read draft {:?}", path))?;
    let state = parse_draft(&raw).with_context(|| format!("Invalid draft {:?}", path))?;
    debug!(path = ?path, students = state.students.len(), "draft loaded");
    Ok(state)
}

/// Parse a draft. Students repeating an earlier id get a fresh one so every id stays unique.
pub fn parse_draft(raw: &str) -> anyhow::Result<LetterState> {
    let mut state: LetterState = serde_json::from_str(raw)?;
    for (old, new) in state.ensure_unique_ids() {
        warn!(%old, %new, "draft repeats a student id, assigned a fresh one");
    }
    Ok(state)
}

/// `path` when given, otherwise the seeded start-up state.
pub fn load_or_seeded<P: AsRef<Path>>(path: Option<P>) -> anyhow::Result<LetterState> {
    match path {
        Some(path) => load_draft(path),
        None => Ok(LetterState::seeded()),
    }
}

pub fn draft_json(state: &LetterState) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}
