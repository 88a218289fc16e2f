//! State store - the persisted seen-set
//!
//! The seen-set is the sole durability boundary of the job: losing it means
//! every historical filing is re-notified once. It is stored as a JSON array
//! of identifier strings and written via temp-file-then-rename so an
//! interrupted run never leaves a corrupt or truncated state file.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur loading or saving the seen-set
#[derive(Debug, Error)]
pub enum StateError {
    /// IO error reading or writing the state file
    #[error("state file io error: {0}")]
    Io(#[from] io::Error),

    /// The state file exists but is not a JSON array of strings
    #[error("state file parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load the seen-set from `path`. A missing file is an empty set; an
/// unreadable or malformed file is an error (silently starting from empty
/// would re-notify everything).
pub fn load(path: &Path) -> Result<HashSet<String>, StateError> {
    if !path.exists() {
        return Ok(HashSet::new());
    }
    let content = fs::read_to_string(path)?;
    let ids: Vec<String> = serde_json::from_str(&content)?;
    Ok(ids.into_iter().collect())
}

/// Write the seen-set to `path` atomically. Identifiers are sorted so the
/// file is stable across runs with identical content.
pub fn save(path: &Path, seen: &HashSet<String>) -> Result<(), StateError> {
    let mut ids: Vec<&String> = seen.iter().collect();
    ids.sort();
    let content = serde_json::to_string_pretty(&ids)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    // Rename is atomic within a filesystem, so the temp file must live
    // next to the target
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
