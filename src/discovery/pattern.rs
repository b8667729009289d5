//! Glob pattern compilation and matching.
//!
//! Supported syntax:
//!
//! - `*` any run of characters within one path segment
//! - `?` exactly one character
//! - `**` zero or more whole segments
//! - `[abc]`, `[a-z]`, `[!x]` character classes
//! - `{a,b}` alternation, which may span segments (`{conf,config/sub}/*`)
//! - `\x` matches `x` literally
//!
//! Wildcards never match a leading `.` unless the pattern segment itself
//! starts with `.`, so hidden files and directories are skipped by default.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{PropsyError, Result};

/// One `/`-separated piece of a compiled pattern.
#[derive(Debug, Clone)]
enum Segment {
    /// Matches exactly this name.
    Literal(String),
    /// Matches names accepted by the regex.
    Wild { regex: Regex, allow_dot: bool },
    /// `**`
    AnyDepth,
}

impl Segment {
    fn matches(&self, name: &str) -> bool {
        match self {
            Self::Literal(lit) => lit == name,
            Self::Wild { regex, allow_dot } => {
                (*allow_dot || !name.starts_with('.')) && regex.is_match(name)
            }
            Self::AnyDepth => !name.starts_with('.'),
        }
    }
}

/// A brace-free alternative of a [`GlobPattern`].
///
/// The leading wildcard-free segments form the [`base`](GlobBranch::base)
/// directory, which is where a filesystem walk has to start. The remaining
/// segments are matched against paths relative to that base.
#[derive(Debug, Clone)]
pub struct GlobBranch {
    base: PathBuf,
    segments: Vec<Segment>,
}

impl GlobBranch {
    fn new(pattern: &str, branch: &str) -> Result<Self> {
        let mut base = if branch.starts_with('/') {
            PathBuf::from("/")
        } else {
            PathBuf::new()
        };

        let mut parts = branch
            .split('/')
            .filter(|p| !p.is_empty() && *p != ".")
            .peekable();

        while let Some(part) = parts.next_if(|p| !is_magic(p)) {
            base.push(part);
        }

        let segments = parts
            .map(|part| compile_segment(pattern, part))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { base, segments })
    }

    /// Directory where matching starts.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Whether the branch contains no wildcards at all.
    pub fn is_literal(&self) -> bool {
        self.segments.is_empty()
    }

    /// Deepest relative path that can match, or `None` when `**` is present.
    pub fn max_depth(&self) -> Option<usize> {
        if self
            .segments
            .iter()
            .any(|s| matches!(s, Segment::AnyDepth))
        {
            None
        } else {
            Some(self.segments.len())
        }
    }

    /// Match path components relative to [`base`](GlobBranch::base).
    pub fn matches(&self, components: &[&str]) -> bool {
        match_segments(&self.segments, components)
    }

    /// Match a full path, as it would be written in the pattern.
    pub fn matches_path(&self, path: &Path) -> bool {
        let Ok(relative) = path.strip_prefix(&self.base) else {
            return false;
        };
        relative
            .iter()
            .map(|c| c.to_str())
            .collect::<Option<Vec<_>>>()
            .is_some_and(|components| self.matches(&components))
    }
}

/// A compiled glob pattern.
///
/// Braces are expanded first, so one pattern may consist of several
/// [`GlobBranch`]es with different walk bases.
///
/// # Example
///
/// ```
/// use propsy::discovery::GlobPattern;
/// use std::path::Path;
///
/// let glob = GlobPattern::new("{config,conf/sub}/**/*.properties").unwrap();
/// assert_eq!(glob.branches().len(), 2);
/// assert_eq!(glob.branches()[1].base(), Path::new("conf/sub"));
/// assert!(glob.matches_path(Path::new("config/app.properties")));
/// assert!(glob.matches_path(Path::new("conf/sub/prod/app.properties")));
/// assert!(!glob.matches_path(Path::new("conf/app.properties")));
/// ```
#[derive(Debug, Clone)]
pub struct GlobPattern {
    raw: String,
    branches: Vec<GlobBranch>,
}

impl GlobPattern {
    /// Compile a pattern.
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.trim().is_empty() {
            return Err(invalid(pattern, "pattern is empty"));
        }

        let branches = expand_braces(pattern, pattern)?
            .iter()
            .map(|branch| GlobBranch::new(pattern, branch))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            raw: pattern.to_string(),
            branches,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Brace-free alternatives, in expansion order.
    pub fn branches(&self) -> &[GlobBranch] {
        &self.branches
    }

    /// Whether any branch matches `path`.
    pub fn matches_path(&self, path: &Path) -> bool {
        self.branches.iter().any(|b| b.matches_path(path))
    }
}

fn match_segments(segments: &[Segment], components: &[&str]) -> bool {
    match segments.split_first() {
        None => components.is_empty(),
        Some((Segment::AnyDepth, rest)) => {
            for skip in 0..=components.len() {
                if match_segments(rest, &components[skip..]) {
                    return true;
                }
                if skip < components.len() && !Segment::AnyDepth.matches(components[skip]) {
                    return false;
                }
            }
            false
        }
        Some((segment, rest)) => match components.split_first() {
            Some((name, tail)) => segment.matches(name) && match_segments(rest, tail),
            None => false,
        },
    }
}

fn is_magic(part: &str) -> bool {
    part.contains(['*', '?', '[', '{'])
}

fn invalid(pattern: &str, message: &str) -> PropsyError {
    PropsyError::InvalidPattern {
        pattern: pattern.to_string(),
        message: message.to_string(),
    }
}

/// Expand the first alternation in `current`, recursing on each result.
///
/// A brace group without a top-level comma is kept literally.
fn expand_braces(pattern: &str, current: &str) -> Result<Vec<String>> {
    let chars: Vec<char> = current.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\\' => i += 1,
            '{' => {
                let end = find_closing_brace(pattern, &chars, i)?;
                let alternatives = split_alternatives(&chars[i + 1..end]);
                if alternatives.len() > 1 {
                    let prefix: String = chars[..i].iter().collect();
                    let suffix: String = chars[end + 1..].iter().collect();
                    let mut expanded = Vec::new();
                    for alt in alternatives {
                        let alt: String = alt.iter().collect();
                        expanded.extend(expand_braces(
                            pattern,
                            &format!("{}{}{}", prefix, alt, suffix),
                        )?);
                    }
                    return Ok(expanded);
                }
            }
            _ => {}
        }
        i += 1;
    }

    Ok(vec![current.to_string()])
}

fn compile_segment(pattern: &str, part: &str) -> Result<Segment> {
    if part == "**" {
        return Ok(Segment::AnyDepth);
    }
    if !is_magic(part) {
        return Ok(Segment::Literal(part.to_string()));
    }

    let chars: Vec<char> = part.chars().collect();
    let body = translate(pattern, &chars)?;
    let regex = Regex::new(&format!("^{}$", body))
        .map_err(|e| invalid(pattern, &e.to_string()))?;

    Ok(Segment::Wild {
        regex,
        allow_dot: part.starts_with('.'),
    })
}

/// Translate glob characters of a single brace-free segment into a regex body.
fn translate(pattern: &str, chars: &[char]) -> Result<String> {
    let mut out = String::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                while i + 1 < chars.len() && chars[i + 1] == '*' {
                    i += 1;
                }
                out.push_str("[^/]*");
            }
            '?' => out.push_str("[^/]"),
            '[' => {
                let (class, end) = translate_class(pattern, chars, i)?;
                out.push_str(&class);
                i = end;
            }
            '\\' if i + 1 < chars.len() => {
                i += 1;
                out.push_str(&regex::escape(&chars[i].to_string()));
            }
            c => out.push_str(&regex::escape(&c.to_string())),
        }
        i += 1;
    }

    Ok(out)
}

/// Translate `[...]` starting at `start`; returns the class and its closing index.
fn translate_class(pattern: &str, chars: &[char], start: usize) -> Result<(String, usize)> {
    let mut class = String::from("[");
    let mut i = start + 1;

    if i < chars.len() && (chars[i] == '!' || chars[i] == '^') {
        class.push('^');
        i += 1;
    }

    let first = i;
    while i < chars.len() {
        let c = chars[i];
        if c == ']' && i > first {
            class.push(']');
            return Ok((class, i));
        }
        if matches!(c, '\\' | '[' | ']' | '&' | '~' | '^') {
            class.push('\\');
        }
        class.push(c);
        i += 1;
    }

    Err(invalid(pattern, "unclosed '[' in character class"))
}

fn find_closing_brace(pattern: &str, chars: &[char], start: usize) -> Result<usize> {
    let mut depth = 0;
    let mut i = start;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 1,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    Err(invalid(pattern, "unclosed '{' in alternation"))
}

/// Split brace contents on top-level commas.
fn split_alternatives(chars: &[char]) -> Vec<&[char]> {
    let mut parts = Vec::new();
    let mut depth = 0;
    let mut begin = 0;
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 1,
            '{' => depth += 1,
            '}' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(&chars[begin..i]);
                begin = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    parts.push(&chars[begin.min(chars.len())..]);
    parts
}
