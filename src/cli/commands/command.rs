//! The [`Command`] trait shared by CLI commands.

use crate::error::Result;
use crate::sink::OutputSink;

/// A runnable CLI command.
///
/// Outputs and diagnostics go to `sink`; any error ends the run with a
/// failing exit status.
pub trait Command {
    /// Execute the command.
    fn execute(&self, sink: &mut dyn OutputSink) -> Result<()>;
}
