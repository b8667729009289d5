//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Every input can also be
//! supplied through the environment variables a GitHub Actions runner sets
//! for action inputs (`INPUT_FILE`, `INPUT_PROPERTY`, ...).

use clap::builder::FalseyValueParser;
use clap::Parser;
use std::path::PathBuf;

/// Propsy - Expose values from a .properties file as pipeline outputs.
#[derive(Debug, Parser)]
#[command(name = "propsy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Glob pattern locating the .properties or .props file
    #[arg(short, long, env = "INPUT_FILE", value_name = "GLOB")]
    pub file: String,

    /// Property to export (required unless --all)
    #[arg(short, long, env = "INPUT_PROPERTY", value_name = "NAME")]
    pub property: Option<String>,

    /// Export every property, plus props, bash_array and env_path
    #[arg(short, long, env = "INPUT_ALL", value_parser = FalseyValueParser::new())]
    pub all: bool,

    /// Value used when the property is missing or empty
    #[arg(short, long, env = "INPUT_DEFAULT", value_name = "VALUE")]
    pub default: Option<String>,

    /// Directory the pattern is evaluated against (overrides current directory)
    #[arg(long, env = "GITHUB_WORKSPACE", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Directory receiving the generated env file (default: system temp dir)
    #[arg(long, env = "RUNNER_TEMP", value_name = "DIR")]
    pub env_dir: Option<PathBuf>,

    /// File receiving pipeline outputs
    #[arg(long, env = "GITHUB_OUTPUT", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Print outputs as name=value lines instead of workflow commands
    #[arg(long)]
    pub plain: bool,

    /// Enable debug logging
    #[arg(long, env = "RUNNER_DEBUG", value_parser = FalseyValueParser::new())]
    pub debug: bool,
}

impl Cli {
    /// Output file, ignoring an empty value.
    pub fn output_file(&self) -> Option<PathBuf> {
        non_empty_path(self.output_file.as_ref())
    }
}

/// Treat an empty path input the same as a missing one.
pub(crate) fn non_empty_path(path: Option<&PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty()).cloned()
}
