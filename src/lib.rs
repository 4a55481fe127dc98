pub mod decode;
pub mod error;
pub mod locate;
pub mod process;
pub mod rules;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Root-anchored handle over the repair pipeline.
#[derive(Debug, Clone)]
pub struct Mojifix {
    root: PathBuf,
}

impl Mojifix {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The corrected form of `text` under the shipped rule table.
    pub fn repair(&self, text: &str) -> String {
        rules::apply(text)
    }

    /// Candidate paths under the root for the given glob patterns.
    pub fn discover(&self, patterns: &[String]) -> Result<Vec<PathBuf>> {
        locate::find_targets(&self.root, patterns)
    }

    /// Repair every target in order, returning the changed (or, under
    /// dry-run, would-change) paths relative to the root.
    pub fn run(&self, targets: &[PathBuf], dry_run: bool) -> Result<Vec<PathBuf>> {
        let mut changed = Vec::new();
        for path in targets {
            if process::process_file(path, dry_run)? {
                changed.push(path.strip_prefix(&self.root).unwrap_or(path).to_path_buf());
            }
        }
        Ok(changed)
    }
}
