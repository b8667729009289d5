//! GitHub Actions sink.
//!
//! Outputs go to the file named by `GITHUB_OUTPUT` using the multi-line
//! `name<<DELIMITER` form. Without an output file the deprecated
//! `::set-output` command is printed instead. Diagnostics are printed as
//! `::warning::`, `::debug::` and `::error::` workflow commands.

use std::fs::OpenOptions;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{PropsyError, Result};

use super::OutputSink;

static DELIMITER_SEQ: AtomicU64 = AtomicU64::new(0);

/// Sink speaking the GitHub Actions workflow command protocol.
pub struct GitHubSink<W: Write = Stdout> {
    output_file: Option<PathBuf>,
    writer: W,
}

impl GitHubSink<Stdout> {
    /// Create a sink that prints commands to stdout.
    pub fn new(output_file: Option<PathBuf>) -> Self {
        Self {
            output_file,
            writer: io::stdout(),
        }
    }
}

impl<W: Write> GitHubSink<W> {
    /// Create a sink printing commands to `writer` (for testing).
    pub fn with_writer(output_file: Option<PathBuf>, writer: W) -> Self {
        Self {
            output_file,
            writer,
        }
    }

    /// Consume the sink, returning its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn command(&mut self, command: &str, msg: &str) {
        if let Err(e) = writeln!(self.writer, "::{}::{}", command, escape_data(msg)) {
            tracing::debug!("Failed to write ::{}:: command: {}", command, e);
        }
    }

    fn append_file_command(&self, path: &Path, name: &str, value: &str) -> Result<()> {
        let delimiter = unique_delimiter();

        if name.contains(&delimiter) || value.contains(&delimiter) {
            return Err(PropsyError::OutputRejected {
                name: name.to_string(),
                message: format!("value must not contain the delimiter \"{}\"", delimiter),
            });
        }

        let mut file = OpenOptions::new().append(true).create(true).open(path)?;
        write!(file, "{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter)?;
        Ok(())
    }
}

impl<W: Write> OutputSink for GitHubSink<W> {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        match self.output_file.clone() {
            Some(path) => self.append_file_command(&path, name, value),
            None => {
                writeln!(
                    self.writer,
                    "::set-output name={}::{}",
                    escape_property(name),
                    escape_data(value)
                )?;
                Ok(())
            }
        }
    }

    fn warn(&mut self, msg: &str) {
        tracing::warn!("{}", msg);
        self.command("warning", msg);
    }

    fn info(&mut self, msg: &str) {
        if let Err(e) = writeln!(self.writer, "{}", msg) {
            tracing::debug!("Failed to write message: {}", e);
        }
    }

    fn debug(&mut self, msg: &str) {
        self.command("debug", msg);
    }

    fn error(&mut self, msg: &str) {
        self.command("error", msg);
    }
}

/// Build a delimiter that is unique within this process.
fn unique_delimiter() -> String {
    let seq = DELIMITER_SEQ.fetch_add(1, Ordering::Relaxed);
    let nanos = chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default();
    format!("ghadelimiter_{:x}_{:x}_{:x}", nanos, std::process::id(), seq)
}

/// Escape workflow command data.
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property value.
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
