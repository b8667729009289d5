//! Mock sink implementation for testing.
//!
//! `MockSink` implements the `OutputSink` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use propsy::sink::{MockSink, OutputSink};
//!
//! let mut sink = MockSink::new();
//! sink.set_output("A", "1").unwrap();
//! sink.info("Exported 1 properties successfully");
//!
//! assert_eq!(sink.outputs(), &[("A".to_string(), "1".to_string())]);
//! assert!(sink.has_info("Exported"));
//! ```

use crate::error::{PropsyError, Result};

use super::OutputSink;

/// Mock sink implementation for testing.
#[derive(Debug, Default)]
pub struct MockSink {
    outputs: Vec<(String, String)>,
    warnings: Vec<String>,
    infos: Vec<String>,
    debugs: Vec<String>,
    errors: Vec<String>,
    /// Output name whose `set_output` call fails.
    reject: Option<String>,
}

impl MockSink {
    /// Create a new MockSink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `set_output` fail for `name`.
    pub fn reject_output(&mut self, name: &str) {
        self.reject = Some(name.to_string());
    }

    /// Get all outputs in the order they were set.
    pub fn outputs(&self) -> &[(String, String)] {
        &self.outputs
    }

    /// Get the last value set for `name`.
    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get all output names in the order they were set.
    pub fn output_names(&self) -> Vec<&str> {
        self.outputs.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured info messages.
    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    /// Get all captured debug messages.
    pub fn debugs(&self) -> &[String] {
        &self.debugs
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific info message was shown.
    pub fn has_info(&self, msg: &str) -> bool {
        self.infos.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific debug message was shown.
    pub fn has_debug(&self, msg: &str) -> bool {
        self.debugs.iter().any(|m| m.contains(msg))
    }
}

impl OutputSink for MockSink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        if self.reject.as_deref() == Some(name) {
            return Err(PropsyError::OutputRejected {
                name: name.to_string(),
                message: "rejected by mock".to_string(),
            });
        }
        self.outputs.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn warn(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn info(&mut self, msg: &str) {
        self.infos.push(msg.to_string());
    }

    fn debug(&mut self, msg: &str) {
        self.debugs.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
