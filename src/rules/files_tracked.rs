//! Rule: every declared file exists on disk and is tracked by git.

use std::collections::HashSet;

use anyhow::Result;

use super::{Issue, Severity, ValidationResult};
use crate::config::{self, Config, dotter};
use crate::vcs::VcsQuery;

/// Stable label for this rule.
pub const LABEL: &str = "Dotter files exist and are tracked";

/// Check every file declared in the global config and the optional machine
/// overlay.
///
/// Exactly one outcome applies per entry: missing on disk (`Error`),
/// ignored by git (`Error`, with a `.gitignore` fix), untracked but not
/// ignored (`Warning`, with a `git add` fix), or clean. A result with only
/// warnings still passes.
///
/// # Errors
///
/// Returns an error if a dotter config exists but cannot be parsed; the
/// engine converts that into a finding for this rule.
pub fn check(config: &Config, vcs: &dyn VcsQuery) -> Result<ValidationResult> {
    let mut entries = Vec::new();
    let mut seen = HashSet::new();

    for name in [config::GLOBAL_CONFIG, config::LOCAL_CONFIG] {
        let doc = dotter::parse(&config.dotfiles_dir.join(name))?;
        for entry in dotter::file_entries(&doc) {
            // A source declared in both configs is checked once.
            if seen.insert(entry.source.clone()) {
                entries.push(entry);
            }
        }
    }

    if config.verbose {
        tracing::info!("found {} files referenced in dotter configs", entries.len());
    }

    let mut issues = Vec::new();
    for entry in &entries {
        let path = config.dotfiles_dir.join(&entry.source);

        if !path.exists() {
            issues.push(
                Issue::new(
                    Severity::Error,
                    format!("File missing: {} [{}]", entry.source, entry.group),
                )
                .with_file(entry.source.clone()),
            );
            continue;
        }

        if vcs.is_tracked(&entry.source) {
            continue;
        }

        if vcs.is_ignored(&entry.source) {
            issues.push(
                Issue::new(
                    Severity::Error,
                    format!("File ignored by git: {} [{}]", entry.source, entry.group),
                )
                .with_file(entry.source.clone())
                .with_fix(format!("Add to .gitignore: !{}", entry.source)),
            );
        } else {
            issues.push(
                Issue::new(
                    Severity::Warning,
                    format!("File not tracked: {} [{}]", entry.source, entry.group),
                )
                .with_file(entry.source.clone())
                .with_fix(format!("Run: git add {}", entry.source)),
            );
        }
    }

    Ok(ValidationResult::from_issues(LABEL, issues))
}
