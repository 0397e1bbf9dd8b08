use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::MemberRecord;

/// Load the member collection, distinguishing a missing file from a corrupt
/// one in the error message.
pub fn load(path: &Path) -> Result<Vec<MemberRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Member file not found: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Malformed member file: {}", path.display()))
}

/// Overwrite the member collection as pretty-printed JSON. Non-ASCII text is
/// written verbatim (serde_json does not escape it).
pub fn save(path: &Path, members: &[MemberRecord]) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(members)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
