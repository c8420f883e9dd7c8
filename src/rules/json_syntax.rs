//! Rule: every tracked JSON file parses.
//!
//! Comment-tolerant variants (`.jsonc`, Zed editor configs) get a
//! best-effort comment-stripping pass and are never flagged; their exact
//! grammar is intentionally not enforced.

use anyhow::Result;

use super::{Issue, Severity, ValidationResult};
use crate::config::Config;
use crate::vcs::VcsQuery;

/// Stable label for this rule.
pub const LABEL: &str = "JSON configuration syntax";

/// Parse every tracked `*.json` / `*.jsonc` file.
///
/// Strict `.json` files that fail to parse produce one `Error` finding
/// each; relaxed-variant files are examined (comments stripped first) but
/// only logged when unparsable. The result name reports how many files
/// were examined in total.
///
/// # Errors
///
/// Does not fail in practice; the signature matches the rule catalog.
pub fn check(config: &Config, vcs: &dyn VcsQuery) -> Result<ValidationResult> {
    let json_files: Vec<String> = vcs
        .tracked_files()
        .into_iter()
        .filter(|file| file.ends_with(".json") || file.ends_with(".jsonc"))
        .collect();

    let mut issues = Vec::new();
    for file in &json_files {
        let path = config.dotfiles_dir.join(file);
        let Ok(content) = std::fs::read_to_string(&path) else {
            continue;
        };

        if is_relaxed(file) {
            let stripped = strip_comments(&content);
            if serde_json::from_str::<serde_json::Value>(&stripped).is_err() {
                tracing::debug!("relaxed JSON still unparsable after comment stripping: {file}");
            }
        } else if serde_json::from_str::<serde_json::Value>(&content).is_err() {
            issues.push(
                Issue::new(Severity::Error, format!("Invalid JSON syntax: {file}"))
                    .with_file(file.clone()),
            );
        }
    }

    Ok(ValidationResult::from_issues(
        format!("All {} JSON files are valid", json_files.len()),
        issues,
    ))
}

/// Comment-tolerant JSON variants: `.jsonc` files and Zed editor configs.
fn is_relaxed(file: &str) -> bool {
    file.ends_with(".jsonc") || file.contains(".config/zed/")
}

/// Best-effort removal of `//` and `/* */` comments outside string literals.
fn strip_comments(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' => match chars.peek() {
                Some('/') => {
                    // Line comment: drop to end of line, keep the newline.
                    while chars.peek().is_some_and(|&next| next != '\n') {
                        chars.next();
                    }
                }
                Some('*') => {
                    chars.next();
                    let mut prev = '\0';
                    while let Some(next) = chars.next() {
                        if prev == '*' && next == '/' {
                            break;
                        }
                        prev = next;
                    }
                }
                _ => out.push(c),
            },
            _ => out.push(c),
        }
    }

    out
}
