//! Artifacts generated in all mode.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Context;

use crate::error::Result;
use crate::properties::PropertySet;

/// Name of the shell associative array declared by [`bash_array`].
pub const BASH_ARRAY_NAME: &str = "esbProps";

/// Render `KEY="VALUE"` lines, one per property.
///
/// Values are wrapped in double quotes verbatim; embedded quotes are not
/// escaped.
pub fn env_file_contents(props: &PropertySet) -> String {
    props
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"\n", key, value))
        .collect()
}

/// Render the set as a pretty-printed JSON object in file order.
pub fn json(props: &PropertySet) -> Result<String> {
    let rendered = serde_json::to_string_pretty(props).context("Failed to serialize properties")?;
    Ok(rendered)
}

/// Render a `declare -A` statement holding every property.
///
/// Double quotes in keys and values are backslash-escaped.
pub fn bash_array(props: &PropertySet) -> String {
    let mut out = format!("declare -A {}=(", BASH_ARRAY_NAME);
    for (key, value) in props.iter() {
        out.push_str(&format!(
            "[\"{}\"]=\"{}\" ",
            escape_quotes(key),
            escape_quotes(value)
        ));
    }
    out.push(')');
    out
}

fn escape_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}

static ENV_FILE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Write the env file into `dir`, returning its path.
///
/// The file is named `<unix millis>_<pid>_<seq>_props.env`, where `seq`
/// counts the env files written by this process.
pub fn write_env_file(dir: &Path, props: &PropertySet) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!(
        "{}_{}_{}_props.env",
        chrono::Utc::now().timestamp_millis(),
        std::process::id(),
        ENV_FILE_SEQ.fetch_add(1, Ordering::Relaxed)
    ));
    fs::write(&path, env_file_contents(props))?;
    tracing::debug!("Wrote {} properties to {}", props.len(), path.display());
    Ok(path)
}
