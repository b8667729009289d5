//! Resolution request built from pipeline inputs.

use std::path::PathBuf;

use crate::error::{PropsyError, Result};

/// Which outputs a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionMode {
    /// Emit a single named property (with optional default).
    #[default]
    Single,
    /// Emit every parsed property plus the generated artifacts.
    All,
}

/// Configuration for one run.
///
/// Empty strings for `property` and `default` are normalised to `None`,
/// since pipeline hosts pass unset inputs as empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    /// Glob pattern locating the properties file.
    pub pattern: String,
    /// Target property name (single mode).
    pub property: Option<String>,
    /// Fallback value when the property is absent or empty.
    pub default: Option<String>,
    /// Selected mode.
    pub mode: ResolutionMode,
    /// Directory the pattern is evaluated against.
    pub root: PathBuf,
    /// Directory receiving the generated env file in all mode.
    pub env_dir: PathBuf,
}

impl ResolutionRequest {
    /// Create a single-mode request for `pattern` rooted at the current directory.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            property: None,
            default: None,
            mode: ResolutionMode::Single,
            root: std::env::current_dir().unwrap_or_default(),
            env_dir: std::env::temp_dir(),
        }
    }

    /// Set the target property.
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = non_empty(Some(property.into()));
        self
    }

    /// Set the fallback value.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = non_empty(Some(default.into()));
        self
    }

    /// Switch between all and single mode.
    pub fn with_all(mut self, all: bool) -> Self {
        self.mode = if all {
            ResolutionMode::All
        } else {
            ResolutionMode::Single
        };
        self
    }

    /// Evaluate the pattern against `root`.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Write the env file into `env_dir`.
    pub fn with_env_dir(mut self, env_dir: impl Into<PathBuf>) -> Self {
        self.env_dir = env_dir.into();
        self
    }

    /// Return the target property, failing when single mode has none.
    pub fn target_property(&self) -> Result<&str> {
        self.property
            .as_deref()
            .ok_or(PropsyError::PropertyUndefined)
    }

    /// Check that the request is usable for its mode.
    pub fn validate(&self) -> Result<()> {
        match self.mode {
            ResolutionMode::All => Ok(()),
            ResolutionMode::Single => self.target_property().map(|_| ()),
        }
    }
}

/// Treat an empty input the same as a missing one.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
