//! Candidate file discovery.
//!
//! Each glob pattern is matched against the root directory's own contents at
//! the pattern's component depth, then recursively inside every direct
//! subdirectory whose name is not excluded. Matches accumulate across
//! patterns and are deduplicated keeping first-seen order. Directories that
//! happen to match a pattern are returned too; the processor filters them.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::PatternError;

/// Glob patterns used when the caller supplies neither paths nor `--glob`.
pub const DEFAULT_GLOBS: &[&str] = &["*.html", "*.js", "*.css", "*.json", "*.txt"];

/// Directory names never descended into during discovery.
pub const EXCLUDED_DIRS: &[&str] = &[".git", "__pycache__", "node_modules"];

/// A glob pattern compiled for path matching.
///
/// `*` and `?` stay inside one path component, `[...]` classes pass through
/// (`[!...]` negates), `/` separates components. `direct` anchors to the
/// whole relative path, `nested` to any trailing run of components.
pub struct GlobPattern {
    depth: usize,
    direct: Regex,
    nested: Regex,
}

impl GlobPattern {
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let translated = translate(pattern)?;
        let depth = pattern.split('/').filter(|c| !c.is_empty()).count().max(1);
        Ok(Self {
            depth,
            direct: Regex::new(&format!("^{translated}$"))?,
            nested: Regex::new(&format!("(?:^|/){translated}$"))?,
        })
    }

    fn matches_direct(&self, relative: &str) -> bool {
        self.direct.is_match(relative)
    }

    fn matches_nested(&self, relative: &str) -> bool {
        self.nested.is_match(relative)
    }
}

fn translate(pattern: &str) -> Result<String, PatternError> {
    let mut out = String::new();
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => out.push_str("[^/]*"),
            '?' => out.push_str("[^/]"),
            '/' => out.push('/'),
            '[' => {
                out.push('[');
                if chars.peek() == Some(&'!') {
                    chars.next();
                    out.push('^');
                }
                let mut closed = false;
                for c in chars.by_ref() {
                    match c {
                        ']' => {
                            closed = true;
                            break;
                        }
                        '\\' => out.push_str(r"\\"),
                        c => out.push(c),
                    }
                }
                if !closed {
                    return Err(PatternError::Invalid {
                        pattern: pattern.to_string(),
                        message: "unclosed character class".to_string(),
                    });
                }
                out.push(']');
            }
            c => out.push_str(&regex::escape(&c.to_string())),
        }
    }
    Ok(out)
}

/// Expand `patterns` against `root` into a deduplicated, order-preserving
/// list of candidate paths.
pub fn find_targets(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut results = Vec::new();
    for raw in patterns {
        let pattern = GlobPattern::compile(raw)?;

        // Matches directly under the root, at the pattern's own depth.
        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(pattern.depth)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if pattern.matches_direct(&relative_key(entry.path(), root)) {
                results.push(entry.path().to_path_buf());
            }
        }

        // Recursive matches inside each retained subdirectory.
        for sub in direct_subdirs(root)? {
            for entry in WalkDir::new(&sub)
                .min_depth(1)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
            {
                if pattern.matches_nested(&relative_key(entry.path(), &sub)) {
                    results.push(entry.path().to_path_buf());
                }
            }
        }
    }

    // Deduplicate while preserving first-seen order.
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for path in results {
        if seen.insert(path.clone()) {
            unique.push(path);
        }
    }
    debug!(candidates = unique.len(), "glob discovery finished");
    Ok(unique)
}

fn direct_subdirs(root: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("Failed to list directory: {}", root.display()))?;
    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read directory entry in {}", root.display()))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if EXCLUDED_DIRS.contains(&name.as_str()) {
            debug!(dir = %path.display(), "skipping excluded directory");
            continue;
        }
        dirs.push(path);
    }
    dirs.sort();
    Ok(dirs)
}

fn relative_key(path: &Path, base: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    let components: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    components.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn matches_root_files_and_recurses_into_subdirs() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("index.html"));
        touch(&root.join("app/deep/page.html"));
        touch(&root.join("app/styles.css"));

        let found = find_targets(root, &["*.html".to_string()]).unwrap();
        assert_eq!(
            found,
            vec![root.join("index.html"), root.join("app/deep/page.html")]
        );
    }

    #[test]
    fn excluded_directories_are_not_searched() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("node_modules/pkg/index.html"));
        touch(&root.join(".git/info.html"));
        touch(&root.join("__pycache__/cached.html"));
        touch(&root.join("app/page.html"));

        let found = find_targets(root, &["*.html".to_string()]).unwrap();
        assert_eq!(found, vec![root.join("app/page.html")]);
    }

    #[test]
    fn overlapping_patterns_keep_first_occurrence_only() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("data.json"));

        let patterns = vec!["*.json".to_string(), "data.*".to_string()];
        let found = find_targets(root, &patterns).unwrap();
        assert_eq!(found, vec![root.join("data.json")]);
    }

    #[test]
    fn question_mark_and_classes_match_single_characters() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("a1.txt"));
        touch(&root.join("a2.txt"));
        touch(&root.join("a10.txt"));

        let found = find_targets(root, &["a?.txt".to_string()]).unwrap();
        assert_eq!(found, vec![root.join("a1.txt"), root.join("a2.txt")]);

        let found = find_targets(root, &["a[12].txt".to_string()]).unwrap();
        assert_eq!(found, vec![root.join("a1.txt"), root.join("a2.txt")]);
    }

    #[test]
    fn slash_patterns_match_relative_paths() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("app/config.json"));
        touch(&root.join("config.json"));

        let found = find_targets(root, &["app/*.json".to_string()]).unwrap();
        assert_eq!(found, vec![root.join("app/config.json")]);
    }

    #[test]
    fn directories_matching_a_pattern_are_returned() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("backup.json")).unwrap();

        let found = find_targets(root, &["*.json".to_string()]).unwrap();
        assert_eq!(found, vec![root.join("backup.json")]);
    }

    #[test]
    fn unclosed_class_is_rejected() {
        let tmp = TempDir::new().unwrap();
        assert!(find_targets(tmp.path(), &["broken[".to_string()]).is_err());
    }
}
