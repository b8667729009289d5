//! Line-oriented `.properties` parsing.

use std::path::Path;

use crate::error::Result;

use super::PropertySet;

/// Parses `.properties` / `.props` content into a [`PropertySet`].
///
/// # Supported Format
///
/// - `key=value`, whitespace around key and value is trimmed
/// - Empty values: `KEY=`
/// - Values containing `=`: only the first `=` separates key from value
/// - Comments: lines starting with `#` (after trimming)
/// - Blank lines are skipped
/// - Lines without `=` are silently ignored
/// - A leading byte-order mark is ignored
///
/// There is no escape processing, no line continuation and no quote
/// stripping. Later duplicates overwrite earlier values.
///
/// # Example
///
/// ```
/// use propsy::properties::PropertiesParser;
///
/// let content = "# build settings\n\nversion = 1.4.2\ngroup=com.example\n";
///
/// let props = PropertiesParser::parse(content);
/// assert_eq!(props.get("version"), Some("1.4.2"));
/// assert_eq!(props.get("group"), Some("com.example"));
/// assert_eq!(props.len(), 2);
/// ```
pub struct PropertiesParser;

impl PropertiesParser {
    /// Parse file content into a property set.
    pub fn parse(content: &str) -> PropertySet {
        let mut props = PropertySet::new();

        for line in content.split('\n') {
            let line = trim(line);

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = Self::parse_line(line) {
                props.insert(key, value);
            }
        }

        props
    }

    /// Split a trimmed line at its first `=`.
    fn parse_line(line: &str) -> Option<(&str, &str)> {
        let (key, value) = line.split_once('=')?;
        Some((trim(key), trim(value)))
    }

    /// Read and parse a properties file.
    pub fn load(path: &Path) -> Result<PropertySet> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(
            "Read {} bytes from {}",
            content.len(),
            path.display()
        );
        Ok(Self::parse(&content))
    }
}

/// Trim whitespace and byte-order marks from both ends.
fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_comments_and_blank_lines() {
        let props = PropertiesParser::parse("# comment\n\nA=1\nB=2\n");

        let pairs: Vec<_> = props.iter().collect();
        assert_eq!(pairs, vec![("A", "1"), ("B", "2")]);
    }

    #[test]
    fn trims_key_and_value() {
        let props = PropertiesParser::parse("   name   =   my app   ");
        assert_eq!(props.get("name"), Some("my app"));
    }

    #[test]
    fn handles_empty_values() {
        let props = PropertiesParser::parse("KEY=");
        assert_eq!(props.get("KEY"), Some(""));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn splits_on_first_equals_only() {
        let props = PropertiesParser::parse("url=https://example.com?a=b&c=d");
        assert_eq!(props.get("url"), Some("https://example.com?a=b&c=d"));
    }

    #[test]
    fn ignores_lines_without_equals() {
        let props = PropertiesParser::parse("A=1\nnot a property\nB=2");
        assert_eq!(props.len(), 2);
        assert!(!props.contains_key("not a property"));
    }

    #[test]
    fn indented_comment_is_skipped() {
        let props = PropertiesParser::parse("   # key=value\nA=1");
        assert_eq!(props.len(), 1);
        assert!(!props.contains_key("# key"));
    }

    #[test]
    fn bang_comments_are_not_special() {
        let props = PropertiesParser::parse("!key=value");
        assert_eq!(props.get("!key"), Some("value"));
    }

    #[test]
    fn later_duplicate_wins() {
        let props = PropertiesParser::parse("A=1\nB=2\nA=3");
        assert_eq!(props.get("A"), Some("3"));
        let keys: Vec<_> = props.keys().collect();
        assert_eq!(keys, vec!["A", "B"]);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let props = PropertiesParser::parse("A=1\r\nB=2\r\n");
        assert_eq!(props.get("A"), Some("1"));
        assert_eq!(props.get("B"), Some("2"));
    }

    #[test]
    fn keeps_backslashes_and_quotes_verbatim() {
        let props = PropertiesParser::parse("path=C:\\\\dir\nquoted=\"x\"\ncont=a \\");
        assert_eq!(props.get("path"), Some("C:\\\\dir"));
        assert_eq!(props.get("quoted"), Some("\"x\""));
        assert_eq!(props.get("cont"), Some("a \\"));
    }

    #[test]
    fn empty_key_is_kept() {
        let props = PropertiesParser::parse("=value");
        assert_eq!(props.get(""), Some("value"));
    }

    #[test]
    fn empty_content_yields_empty_set() {
        assert!(PropertiesParser::parse("").is_empty());
        assert!(PropertiesParser::parse("\n\n# only comments\n").is_empty());
    }

    #[test]
    fn single_well_formed_line_round_trips() {
        for (key, value) in [("a", "b"), ("app.name", "Demo App"), ("x", "1=2")] {
            let line = format!("  {} = {}  ", key, value);
            let props = PropertiesParser::parse(&line);
            assert_eq!(props.get(key), Some(value));
        }
    }

    #[test]
    fn load_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.properties");
        std::fs::write(&path, "version=2.0\n").unwrap();

        let props = PropertiesParser::load(&path).unwrap();
        assert_eq!(props.get("version"), Some("2.0"));
    }

    #[test]
    fn byte_order_mark_is_not_part_of_first_key() {
        let props = PropertiesParser::parse("\u{FEFF}version=1.0\nB=2\n");
        let keys: Vec<_> = props.keys().collect();
        assert_eq!(keys, vec!["version", "B"]);
        assert_eq!(props.get("version"), Some("1.0"));
    }

    #[test]
    fn load_strips_byte_order_mark() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gradle.properties");
        std::fs::write(&path, b"\xEF\xBB\xBFversion=1.0\n").unwrap();

        let props = PropertiesParser::load(&path).unwrap();
        assert_eq!(props.get("version"), Some("1.0"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = PropertiesParser::load(Path::new("/nonexistent/app.properties"));
        assert!(matches!(result, Err(crate::error::PropsyError::Io(_))));
    }
}
