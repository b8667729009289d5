//! Turning a parsed [`PropertySet`] into pipeline outputs.
//!
//! Two modes exist, selected by [`ResolutionMode`]:
//!
//! - **All**: every property becomes an output, plus `props` (JSON),
//!   `bash_array` (shell literal) and `env_path` (generated env file)
//! - **Single**: one property becomes an output, mirrored to the legacy
//!   `value` output, falling back to the configured default
//!
//! [`run`] chains discovery, parsing and resolution for one request.

pub mod pipeline;
pub mod render;

pub use pipeline::run;
pub use render::{bash_array, env_file_contents, json, write_env_file, BASH_ARRAY_NAME};

use std::path::{Path, PathBuf};

use crate::config::{ResolutionMode, ResolutionRequest};
use crate::error::{PropsyError, Result};
use crate::properties::PropertySet;
use crate::sink::OutputSink;

/// Output name mirroring the resolved value in single mode.
pub const LEGACY_OUTPUT: &str = "value";
/// Output holding the generated env file path in all mode.
pub const ENV_PATH_OUTPUT: &str = "env_path";
/// Output holding the JSON rendering in all mode.
pub const JSON_OUTPUT: &str = "props";
/// Output holding the `declare -A` rendering in all mode.
pub const BASH_ARRAY_OUTPUT: &str = "bash_array";

/// Where a single-mode value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// Read from the properties file.
    File,
    /// Taken from the configured default.
    Default,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionResult {
    /// Every property was exported.
    All {
        properties: PropertySet,
        env_path: PathBuf,
    },
    /// One property was exported.
    Single {
        key: String,
        value: String,
        source: ValueSource,
    },
}

/// Resolve `props` according to the request's mode.
///
/// `source_path` is only used in error messages.
pub fn resolve(
    request: &ResolutionRequest,
    props: PropertySet,
    source_path: &Path,
    sink: &mut dyn OutputSink,
) -> Result<ResolutionResult> {
    match request.mode {
        ResolutionMode::All => resolve_all(props, &request.env_dir, sink),
        ResolutionMode::Single => resolve_single(
            &props,
            request.target_property()?,
            request.default.as_deref(),
            source_path,
            sink,
        ),
    }
}

/// Export every property plus the generated artifacts.
///
/// An empty set is valid and still produces an (empty) env file.
pub fn resolve_all(
    props: PropertySet,
    env_dir: &Path,
    sink: &mut dyn OutputSink,
) -> Result<ResolutionResult> {
    sink.debug("Got all=true, exporting all properties as outputs, JSON, and bash array");

    for (key, value) in props.iter() {
        sink.set_output(key, value)?;
        sink.debug(&format!("Set output {}={}", key, value));
    }

    sink.set_output(JSON_OUTPUT, &json(&props)?)?;
    sink.set_output(BASH_ARRAY_OUTPUT, &bash_array(&props))?;

    let env_path = write_env_file(env_dir, &props)?;
    sink.set_output(ENV_PATH_OUTPUT, &env_path.to_string_lossy())?;
    sink.info(&format!("Wrote environment file: {}", env_path.display()));

    tracing::info!("Exported {} properties", props.len());
    sink.info(&format!(
        "Exported {} properties successfully",
        props.len()
    ));

    Ok(ResolutionResult::All {
        properties: props,
        env_path,
    })
}

/// Export one property, falling back to `default`.
///
/// An empty value counts as missing, so `KEY=` falls through to the
/// default (or to `PropertyNotFound`).
pub fn resolve_single(
    props: &PropertySet,
    property: &str,
    default: Option<&str>,
    source_path: &Path,
    sink: &mut dyn OutputSink,
) -> Result<ResolutionResult> {
    let (value, source) = match props.get_non_empty(property) {
        Some(value) => (value, ValueSource::File),
        None => match default.filter(|d| !d.is_empty()) {
            Some(default) => (default, ValueSource::Default),
            None => {
                return Err(PropsyError::PropertyNotFound {
                    property: property.to_string(),
                    path: source_path.to_path_buf(),
                })
            }
        },
    };

    set_single_value(sink, property, value)?;

    match source {
        ValueSource::File => sink.info(&format!(
            "Successfully set property {} as output",
            property
        )),
        ValueSource::Default => sink.info(&format!("Used default value for {}", property)),
    }
    tracing::info!(property, ?source, "Resolved property");

    Ok(ResolutionResult::Single {
        key: property.to_string(),
        value: value.to_string(),
        source,
    })
}

fn set_single_value(sink: &mut dyn OutputSink, key: &str, value: &str) -> Result<()> {
    sink.debug(&format!("Setting output {} to {}", key, value));
    sink.set_output(key, value)?;

    sink.set_output(LEGACY_OUTPUT, value)?;
    sink.debug(&format!("Setting legacy output {} to {}", LEGACY_OUTPUT, value));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MockSink;
    use tempfile::TempDir;

    fn props(pairs: &[(&str, &str)]) -> PropertySet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn single_found_sets_property_and_legacy_value() {
        let mut sink = MockSink::new();
        let result = resolve_single(
            &props(&[("A", "1")]),
            "A",
            None,
            Path::new("x.properties"),
            &mut sink,
        )
        .unwrap();

        assert_eq!(
            result,
            ResolutionResult::Single {
                key: "A".into(),
                value: "1".into(),
                source: ValueSource::File,
            }
        );
        assert_eq!(
            sink.outputs(),
            &[
                ("A".to_string(), "1".to_string()),
                ("value".to_string(), "1".to_string())
            ]
        );
        assert!(sink.has_info("Successfully set property A"));
    }

    #[test]
    fn single_missing_uses_default() {
        let mut sink = MockSink::new();
        let result = resolve_single(
            &props(&[("A", "1")]),
            "B",
            Some("9"),
            Path::new("x.properties"),
            &mut sink,
        )
        .unwrap();

        assert!(matches!(
            result,
            ResolutionResult::Single {
                source: ValueSource::Default,
                ..
            }
        ));
        assert_eq!(sink.output("B"), Some("9"));
        assert_eq!(sink.output("value"), Some("9"));
        assert!(sink.has_info("Used default value for B"));
    }

    #[test]
    fn single_file_value_wins_over_default() {
        let mut sink = MockSink::new();
        resolve_single(
            &props(&[("A", "1")]),
            "A",
            Some("9"),
            Path::new("x.properties"),
            &mut sink,
        )
        .unwrap();
        assert_eq!(sink.output("value"), Some("1"));
    }

    #[test]
    fn single_empty_value_is_treated_as_missing() {
        let mut sink = MockSink::new();
        let err = resolve_single(
            &props(&[("KEY", "")]),
            "KEY",
            None,
            Path::new("x.properties"),
            &mut sink,
        )
        .unwrap_err();

        assert!(matches!(err, PropsyError::PropertyNotFound { .. }));
        assert!(sink.outputs().is_empty());
    }

    #[test]
    fn single_empty_value_falls_back_to_default() {
        let mut sink = MockSink::new();
        resolve_single(
            &props(&[("KEY", "")]),
            "KEY",
            Some("fallback"),
            Path::new("x.properties"),
            &mut sink,
        )
        .unwrap();
        assert_eq!(sink.output("KEY"), Some("fallback"));
    }

    #[test]
    fn single_empty_default_is_ignored() {
        let mut sink = MockSink::new();
        let err = resolve_single(&props(&[]), "A", Some(""), Path::new("x.props"), &mut sink)
            .unwrap_err();
        assert!(err.to_string().contains("Property A not found in x.props"));
    }

    #[test]
    fn all_mode_emits_everything() {
        let temp = TempDir::new().unwrap();
        let mut sink = MockSink::new();

        let result = resolve_all(props(&[("A", "1"), ("B", "2")]), temp.path(), &mut sink).unwrap();

        let ResolutionResult::All { properties, env_path } = result else {
            panic!("Expected all-mode result");
        };
        assert_eq!(properties.len(), 2);
        assert_eq!(
            sink.output_names(),
            vec!["A", "B", "props", "bash_array", "env_path"]
        );
        assert_eq!(sink.output("A"), Some("1"));
        assert_eq!(sink.output("B"), Some("2"));
        assert_eq!(sink.output("env_path"), Some(env_path.to_str().unwrap()));
        assert_eq!(
            std::fs::read_to_string(&env_path).unwrap(),
            "A=\"1\"\nB=\"2\"\n"
        );
        assert!(sink.has_info("Exported 2 properties successfully"));
    }

    #[test]
    fn all_mode_accepts_empty_set() {
        let temp = TempDir::new().unwrap();
        let mut sink = MockSink::new();

        let result = resolve_all(PropertySet::new(), temp.path(), &mut sink).unwrap();

        let ResolutionResult::All { env_path, .. } = result else {
            panic!("Expected all-mode result");
        };
        assert_eq!(std::fs::read_to_string(env_path).unwrap(), "");
        assert_eq!(sink.output("props"), Some("{}"));
    }

    #[test]
    fn all_mode_stops_on_rejected_output() {
        let temp = TempDir::new().unwrap();
        let mut sink = MockSink::new();
        sink.reject_output("B");

        let err = resolve_all(props(&[("A", "1"), ("B", "2")]), temp.path(), &mut sink)
            .unwrap_err();
        assert!(matches!(err, PropsyError::OutputRejected { .. }));
        assert_eq!(sink.output_names(), vec!["A"]);
    }

    #[test]
    fn resolve_dispatches_on_mode() {
        let temp = TempDir::new().unwrap();
        let request = ResolutionRequest::new("*.properties")
            .with_all(true)
            .with_env_dir(temp.path());
        let mut sink = MockSink::new();

        let result = resolve(&request, props(&[("A", "1")]), Path::new("a.properties"), &mut sink)
            .unwrap();
        assert!(matches!(result, ResolutionResult::All { .. }));
    }

    #[test]
    fn resolve_single_without_property_fails() {
        let request = ResolutionRequest::new("*.properties");
        let mut sink = MockSink::new();

        let err = resolve(&request, props(&[("A", "1")]), Path::new("a.properties"), &mut sink)
            .unwrap_err();
        assert!(matches!(err, PropsyError::PropertyUndefined));
        assert!(sink.outputs().is_empty());
    }
}
