//! Pipeline output channel.
//!
//! This module provides:
//! - [`OutputSink`] trait abstracting the hosting pipeline
//! - [`GitHubSink`] writing GitHub Actions workflow commands
//! - [`PlainSink`] for local terminal usage
//! - [`MockSink`] capturing everything for assertions
//!
//! # Example
//!
//! ```
//! use propsy::sink::{MockSink, OutputSink};
//!
//! let mut sink = MockSink::new();
//! sink.set_output("version", "1.2.3").unwrap();
//! sink.warn("Multiple properties files found");
//!
//! assert_eq!(sink.output("version"), Some("1.2.3"));
//! assert!(sink.has_warning("Multiple"));
//! ```

pub mod github;
pub mod mock;
pub mod plain;

use std::path::PathBuf;

pub use github::{escape_data, escape_property, GitHubSink};
pub use mock::MockSink;
pub use plain::PlainSink;

use crate::error::Result;

/// Trait for emitting outputs and diagnostics to the hosting pipeline.
///
/// Resolution logic only talks to this trait, so it can run against
/// [`MockSink`] in tests.
pub trait OutputSink {
    /// Expose a named output to subsequent pipeline steps.
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;

    /// Surface a non-fatal warning.
    fn warn(&mut self, msg: &str);

    /// Display an informational message.
    fn info(&mut self, msg: &str);

    /// Display a debug message.
    fn debug(&mut self, msg: &str);

    /// Report the fatal error that ends the run.
    fn error(&mut self, msg: &str);
}

/// Check if running inside GitHub Actions.
pub fn is_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Create the sink for this run.
///
/// Workflow commands are used inside GitHub Actions or whenever an output
/// file is given, unless `plain` forces terminal output.
pub fn create_sink(plain: bool, output_file: Option<PathBuf>) -> Box<dyn OutputSink> {
    if !plain && (output_file.is_some() || is_github_actions()) {
        Box::new(GitHubSink::new(output_file))
    } else {
        Box::new(PlainSink::new())
    }
}
