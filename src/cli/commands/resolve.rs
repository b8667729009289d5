//! Resolve command implementation.
//!
//! Runs discovery, parsing and resolution for the inputs given on the
//! command line or through the pipeline environment.

use std::path::Path;

use crate::cli::args::{non_empty_path, Cli};
use crate::config::{non_empty, ResolutionRequest};
use crate::error::Result;
use crate::resolve::{run, ResolutionResult};
use crate::sink::OutputSink;

use super::command::Command;

/// The resolve command implementation.
pub struct ResolveCommand {
    request: ResolutionRequest,
}

impl ResolveCommand {
    /// Create a command for an explicit request.
    pub fn new(request: ResolutionRequest) -> Self {
        Self { request }
    }

    /// Build the request from parsed CLI arguments.
    ///
    /// `cwd` is used as the search root when `--root` is not given.
    pub fn from_cli(cli: &Cli, cwd: &Path) -> Self {
        let mut request = ResolutionRequest::new(cli.file.clone())
            .with_all(cli.all)
            .with_root(non_empty_path(cli.root.as_ref()).unwrap_or_else(|| cwd.to_path_buf()));

        request.property = non_empty(cli.property.clone());
        request.default = non_empty(cli.default.clone());

        if let Some(dir) = non_empty_path(cli.env_dir.as_ref()) {
            request = request.with_env_dir(dir);
        }

        Self { request }
    }

    /// Get the request this command runs.
    pub fn request(&self) -> &ResolutionRequest {
        &self.request
    }
}

impl Command for ResolveCommand {
    fn execute(&self, sink: &mut dyn OutputSink) -> Result<()> {
        match run(&self.request, sink)? {
            ResolutionResult::All { properties, .. } => {
                tracing::debug!("All mode finished with {} properties", properties.len());
            }
            ResolutionResult::Single { key, source, .. } => {
                tracing::debug!("Single mode finished for {} ({:?})", key, source);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolutionMode;
    use crate::sink::MockSink;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn from_cli_builds_request() {
        let cli = Cli::parse_from([
            "propsy",
            "-f",
            "*.properties",
            "-p",
            "version",
            "-d",
            "1.0",
            "--root",
            "/work",
            "--env-dir",
            "/out",
        ]);
        let cmd = ResolveCommand::from_cli(&cli, Path::new("/cwd"));
        let request = cmd.request();

        assert_eq!(request.pattern, "*.properties");
        assert_eq!(request.property.as_deref(), Some("version"));
        assert_eq!(request.default.as_deref(), Some("1.0"));
        assert_eq!(request.mode, ResolutionMode::Single);
        assert_eq!(request.root, PathBuf::from("/work"));
        assert_eq!(request.env_dir, PathBuf::from("/out"));
    }

    #[test]
    fn from_cli_drops_empty_inputs() {
        let cli = Cli::parse_from(["propsy", "-f", "*.properties", "-p", "", "-d", "", "-a"]);
        let cmd = ResolveCommand::from_cli(&cli, Path::new("/cwd"));

        assert!(cmd.request().property.is_none());
        assert!(cmd.request().default.is_none());
        assert_eq!(cmd.request().mode, ResolutionMode::All);
    }

    #[test]
    fn execute_emits_outputs() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("app.props"), "name=demo\n").unwrap();
        let request = ResolutionRequest::new("*.props")
            .with_root(temp.path())
            .with_property("name");
        let mut sink = MockSink::new();

        assert!(ResolveCommand::new(request).execute(&mut sink).is_ok());
        assert_eq!(sink.output("name"), Some("demo"));
    }

    #[test]
    fn execute_propagates_errors() {
        let temp = TempDir::new().unwrap();
        let request = ResolutionRequest::new("*.props").with_root(temp.path());
        let mut sink = MockSink::new();

        assert!(ResolveCommand::new(request).execute(&mut sink).is_err());
    }
}
