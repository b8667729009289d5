//! Properties file discovery.
//!
//! - [`GlobPattern`] - glob compilation and matching
//! - [`FileFinder`] - filesystem walk, skipping [`EXCLUDED_DIRS`]
//! - [`discover`] - selects the one file a run reads

pub mod finder;
pub mod pattern;

pub use finder::{FileFinder, EXCLUDED_DIRS};
pub use pattern::{GlobBranch, GlobPattern};

use std::path::{Path, PathBuf};

use crate::error::{PropsyError, Result};
use crate::sink::OutputSink;

/// Extensions accepted for the selected file (compared case-insensitively).
pub const PROPERTIES_EXTENSIONS: &[&str] = &[".properties", ".props"];

/// The file selected for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Path as matched by the pattern (used in messages).
    pub path: PathBuf,
    /// Path resolved against the search root (used for reading).
    pub full_path: PathBuf,
    /// How many files matched the pattern.
    pub candidates: usize,
}

/// Locate the single properties file for `pattern` below `root`.
///
/// Multiple matches are not an error: the first path in sorted order is
/// used and a warning is sent to the sink.
///
/// # Errors
///
/// - `NoFilesFound` when nothing matches
/// - `EmptyPath` when the selected path is empty
/// - `FileMissing` when the selected path no longer exists
/// - `InvalidExtension` when it is not a `.properties`/`.props` file
pub fn discover(root: &Path, pattern: &str, sink: &mut dyn OutputSink) -> Result<DiscoveredFile> {
    sink.debug(&format!("Searching for file pattern: {}", pattern));
    let candidates = FileFinder::new(root).find(pattern)?;

    let Some(first) = candidates.first() else {
        return Err(PropsyError::NoFilesFound {
            pattern: pattern.to_string(),
        });
    };

    if candidates.len() > 1 {
        sink.warn(&format!(
            "Multiple properties files found, using first one ({}).",
            first.display()
        ));
    }

    if first.as_os_str().is_empty() {
        return Err(PropsyError::EmptyPath);
    }

    let full_path = root.join(first);
    if !full_path.exists() {
        return Err(PropsyError::FileMissing {
            path: first.clone(),
        });
    }

    if !has_properties_extension(first) {
        return Err(PropsyError::InvalidExtension {
            path: first.clone(),
        });
    }

    sink.debug(&format!("Using properties file: {}", first.display()));
    Ok(DiscoveredFile {
        path: first.clone(),
        full_path,
        candidates: candidates.len(),
    })
}

/// Check for a `.properties` or `.props` suffix, ignoring case.
pub fn has_properties_extension(path: &Path) -> bool {
    let name = path.to_string_lossy().to_lowercase();
    PROPERTIES_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}
