//! Per-file repair orchestration: read, decode, apply rules, compare,
//! write back when something changed.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::{decode, rules};

/// Repair one file in place.
///
/// Returns `true` when the file's content changed (or would change under
/// dry-run). Paths that are not regular files are skipped and count as
/// unchanged. Corrected content is always written back as UTF-8.
pub fn process_file(path: &Path, dry_run: bool) -> Result<bool> {
    if !path.is_file() {
        debug!(path = %path.display(), "skipping non-file target");
        return Ok(false);
    }

    let original_bytes = fs::read(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let original_text = decode::decode(&original_bytes)
        .with_context(|| format!("Failed to decode file: {}", path.display()))?;
    let updated_text = rules::apply(&original_text);

    if updated_text == original_text {
        debug!(path = %path.display(), "no rule matched");
        return Ok(false);
    }
    if dry_run {
        debug!(path = %path.display(), "would update");
        return Ok(true);
    }

    fs::write(path, updated_text.as_bytes())
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    debug!(path = %path.display(), "updated");
    Ok(true)
}
