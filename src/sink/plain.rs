//! Terminal sink for running outside a pipeline.

use crate::error::Result;

use super::OutputSink;

/// Prints outputs as `name=value` lines on stdout.
///
/// Warnings, info and errors go to stderr so stdout can be consumed
/// directly (e.g. `eval` or `>> .env`). Debug messages only reach tracing.
#[derive(Debug, Default)]
pub struct PlainSink;

impl PlainSink {
    /// Create a new plain sink.
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for PlainSink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        println!("{}={}", name, value);
        Ok(())
    }

    fn warn(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn info(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }

    fn debug(&mut self, msg: &str) {
        tracing::debug!("{}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}
