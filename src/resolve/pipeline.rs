//! End-to-end run: discover, parse, resolve.

use crate::config::ResolutionRequest;
use crate::discovery::discover;
use crate::error::Result;
use crate::properties::PropertiesParser;
use crate::sink::OutputSink;

use super::{resolve, ResolutionResult};

/// Execute one request against the filesystem.
///
/// Steps run strictly in order and the first failure ends the run. File
/// problems are reported before a missing target property, and nothing is
/// emitted before the file has been parsed.
///
/// # Example
///
/// ```
/// use propsy::config::ResolutionRequest;
/// use propsy::resolve::{run, ResolutionResult};
/// use propsy::sink::MockSink;
/// use tempfile::TempDir;
///
/// let temp = TempDir::new().unwrap();
/// std::fs::write(temp.path().join("gradle.properties"), "version=1.4.2\n").unwrap();
///
/// let request = ResolutionRequest::new("*.properties")
///     .with_root(temp.path())
///     .with_property("version");
/// let mut sink = MockSink::new();
///
/// let result = run(&request, &mut sink).unwrap();
/// assert!(matches!(result, ResolutionResult::Single { .. }));
/// assert_eq!(sink.output("value"), Some("1.4.2"));
/// ```
pub fn run(request: &ResolutionRequest, sink: &mut dyn OutputSink) -> Result<ResolutionResult> {
    let file = discover(&request.root, &request.pattern, sink)?;
    tracing::debug!(
        "Selected {} out of {} candidate(s)",
        file.path.display(),
        file.candidates
    );

    let props = PropertiesParser::load(&file.full_path)?;
    tracing::debug!("Parsed {} properties", props.len());

    request.validate()?;
    resolve(request, props, &file.path, sink)
}
