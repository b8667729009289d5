//! Propsy - Expose values from a `.properties` file as pipeline outputs.
//!
//! Propsy locates a single `.properties`/`.props` file through a glob
//! pattern, parses its `key=value` lines and publishes either one named
//! property or every property as outputs of a CI pipeline step.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Resolution requests built from inputs
//! - [`discovery`] - Glob matching and file selection
//! - [`error`] - Error types and result aliases
//! - [`properties`] - Property sets and the line parser
//! - [`resolve`] - All/single resolution and generated artifacts
//! - [`sink`] - Pipeline output channel abstraction
//!
//! # Example
//!
//! ```
//! use propsy::properties::PropertiesParser;
//! use propsy::resolve::resolve_single;
//! use propsy::sink::MockSink;
//! use std::path::Path;
//!
//! let props = PropertiesParser::parse("A=1\n");
//! let mut sink = MockSink::new();
//! resolve_single(&props, "B", Some("9"), Path::new("app.properties"), &mut sink).unwrap();
//!
//! assert_eq!(sink.output("B"), Some("9"));
//! assert_eq!(sink.output("value"), Some("9"));
//! ```
//!
//! For file-based runs, see [`resolve::run`] and the integration tests.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod properties;
pub mod resolve;
pub mod sink;

pub use error::{ErrorKind, PropsyError, Result};
