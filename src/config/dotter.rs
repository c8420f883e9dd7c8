//! Minimal parser for dotter's declarative TOML-like configuration.
//!
//! Parses just enough of the format to extract declared file mappings:
//! `[section]` and `[section.subsection]` headers, `key = "value"`
//! assignments scoped to the most recent header, `#` comments, and blank
//! lines. This is deliberately not a general TOML parser.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ParseError;

/// A parsed config document: section name to key/value entries.
///
/// `BTreeMap` keeps iteration deterministic, so repeated runs over an
/// unchanged repository produce identical results.
pub type Document = BTreeMap<String, BTreeMap<String, String>>;

/// Sentinel suffix marking a section that declares file mappings.
const FILES_SUFFIX: &str = ".files";

/// One declared file mapping extracted from a `[<group>.files]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Declared file path relative to the dotfiles root.
    pub source: String,
    /// Deployment destination. Parsed for completeness; validation does
    /// not use it.
    pub target: String,
    /// Top-level group name the entry came from, used only for display.
    pub group: String,
}

/// Parse a dotter config file.
///
/// A missing file yields an empty document, not an error — whether the
/// file ought to exist is the rule layer's concern.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] on malformed input and [`ParseError::Io`]
/// if an existing file cannot be read.
pub fn parse(path: &Path) -> Result<Document, ParseError> {
    if !path.exists() {
        return Ok(Document::new());
    }
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_str(&content, &path.display().to_string())
}

/// Parse config content from a string.
///
/// `origin` names the source in error messages (a path, or a label in
/// tests).
///
/// # Examples
///
/// ```
/// use dotfiles_validator::config::dotter::parse_str;
///
/// let doc = parse_str("[shell.files]\n\"zshrc\" = \"~/.zshrc\"\n", "test").unwrap();
/// assert_eq!(doc["shell.files"]["zshrc"], "~/.zshrc");
/// ```
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] if a line is neither a header, a comment,
/// nor a `key = value` assignment.
pub fn parse_str(content: &str, origin: &str) -> Result<Document, ParseError> {
    let mut doc = Document::new();
    let mut current: Option<String> = None;

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        // Skip empty lines and comments
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(header) = parse_header(trimmed) {
            if header.is_empty() {
                return Err(syntax(origin, line_num + 1, "empty section header"));
            }
            doc.entry(header.clone()).or_default();
            current = Some(header);
        } else if let Some((key, value)) = parse_assignment(trimmed) {
            // Assignments before any header are discarded; within a
            // section a repeated key overwrites the earlier value.
            if let Some(section) = &current
                && let Some(entries) = doc.get_mut(section)
            {
                entries.insert(key, value);
            }
        } else {
            return Err(syntax(
                origin,
                line_num + 1,
                "expected `[section]` header or `key = value` assignment",
            ));
        }
    }

    Ok(doc)
}

/// Extract declared file mappings from every `[<group>.files]` section.
///
/// The group is the portion of the section name before the first `.`;
/// sections without the `.files` suffix are skipped, and an empty section
/// yields no entries.
///
/// # Examples
///
/// ```
/// use dotfiles_validator::config::dotter::{file_entries, parse_str};
///
/// let doc = parse_str("[shell.files]\n\"zshrc\" = \"~/.zshrc\"\n", "test").unwrap();
/// let entries = file_entries(&doc);
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].source, "zshrc");
/// assert_eq!(entries[0].group, "shell");
/// ```
#[must_use]
pub fn file_entries(doc: &Document) -> Vec<FileEntry> {
    let mut entries = Vec::new();
    for (section, pairs) in doc {
        if !section.ends_with(FILES_SUFFIX) || section == FILES_SUFFIX {
            continue;
        }
        let group = section.split('.').next().unwrap_or(section);
        for (source, target) in pairs {
            entries.push(FileEntry {
                source: source.clone(),
                target: target.clone(),
                group: group.to_string(),
            });
        }
    }
    entries
}

fn syntax(origin: &str, line: usize, message: &str) -> ParseError {
    ParseError::Syntax {
        path: origin.to_string(),
        line,
        message: message.to_string(),
    }
}

/// Parse a `[section]` line into the section name.
fn parse_header(line: &str) -> Option<String> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?;
    Some(inner.trim().to_string())
}

/// Parse a `key = value` line, stripping surrounding double quotes from
/// both sides.
fn parse_assignment(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once('=')?;
    let key = unquote(key.trim());
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), unquote(value.trim()).to_string()))
}

/// Strip one pair of surrounding double quotes, if present.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
