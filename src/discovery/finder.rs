//! Filesystem walk for glob patterns.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::Result;

use super::{GlobBranch, GlobPattern};

/// Dependency and build cache directories that are never searched.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", ".gradle"];

/// Finds files matching a glob pattern below a root directory.
#[derive(Debug, Clone)]
pub struct FileFinder {
    root: PathBuf,
}

impl FileFinder {
    /// Create a finder evaluating relative patterns against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Return every matching file, sorted by path.
    ///
    /// Paths are reported as written in the pattern: relative to the root
    /// for relative patterns, absolute for absolute ones. Brace branches
    /// that match the same file report it once.
    pub fn find(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let glob = GlobPattern::new(pattern)?;

        let mut matches = Vec::new();
        for branch in glob.branches() {
            self.find_branch(branch, &mut matches);
        }

        matches.sort();
        matches.dedup();
        tracing::debug!("Pattern {} matched {} file(s)", glob.as_str(), matches.len());
        Ok(matches)
    }

    fn find_branch(&self, branch: &GlobBranch, matches: &mut Vec<PathBuf>) {
        let base_dir = self.root.join(branch.base());

        if branch.is_literal() {
            let excluded = branch.base().parent().is_some_and(has_excluded_component);
            if base_dir.is_file() && !excluded {
                matches.push(branch.base().to_path_buf());
            }
            return;
        }

        if has_excluded_component(branch.base()) {
            tracing::debug!("Search base {} is excluded", branch.base().display());
            return;
        }

        if !base_dir.is_dir() {
            tracing::debug!("Search base {} is not a directory", base_dir.display());
            return;
        }

        let mut walker = WalkDir::new(&base_dir).min_depth(1).sort_by_file_name();
        if let Some(depth) = branch.max_depth() {
            walker = walker.max_depth(depth);
        }

        for entry in walker.into_iter().filter_entry(|e| !is_excluded_dir(e)) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_dir() || !entry.path().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(&base_dir) else {
                continue;
            };
            let Some(components) = relative
                .iter()
                .map(|c| c.to_str())
                .collect::<Option<Vec<_>>>()
            else {
                continue;
            };

            if branch.matches(&components) {
                matches.push(branch.base().join(relative));
            }
        }
    }
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}

fn has_excluded_component(path: &Path) -> bool {
    path.iter()
        .filter_map(|c| c.to_str())
        .any(|name| EXCLUDED_DIRS.contains(&name))
}
