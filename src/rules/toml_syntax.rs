//! Rule: every tracked TOML config file parses.

use anyhow::Result;

use super::{Issue, Severity, ValidationResult};
use crate::config::{Config, dotter};
use crate::vcs::VcsQuery;

/// Stable label for this rule.
pub const LABEL: &str = "TOML configuration syntax";

/// Parse every tracked `*.toml` file with the dotter config parser.
///
/// A parse failure is localized to the offending file; the remaining files
/// are still checked, and the result name reports how many files were
/// examined in total.
///
/// # Errors
///
/// Does not fail in practice; the signature matches the rule catalog.
pub fn check(config: &Config, vcs: &dyn VcsQuery) -> Result<ValidationResult> {
    let toml_files: Vec<String> = vcs
        .tracked_files()
        .into_iter()
        .filter(|file| file.ends_with(".toml"))
        .collect();

    let mut issues = Vec::new();
    for file in &toml_files {
        if let Err(err) = dotter::parse(&config.dotfiles_dir.join(file)) {
            tracing::debug!("{err}");
            issues.push(
                Issue::new(Severity::Error, format!("Invalid TOML syntax: {file}"))
                    .with_file(file.clone()),
            );
        }
    }

    Ok(ValidationResult::from_issues(
        format!("All {} TOML files are valid", toml_files.len()),
        issues,
    ))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::vcs::MockVcs;

    fn config_at(dir: &std::path::Path) -> Config {
        Config {
            dotfiles_dir: dir.to_path_buf(),
            verbose: false,
            fix_mode: false,
        }
    }

    #[test]
    fn valid_files_pass_and_name_embeds_count() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        std::fs::write(dir.path().join("a.toml"), "[s]\nk = \"v\"\n")
            .expect("write should succeed");
        std::fs::write(dir.path().join("b.toml"), "# empty\n").expect("write should succeed");
        let vcs = MockVcs::new().with_tracked("a.toml").with_tracked("b.toml");

        let result = check(&config_at(dir.path()), &vcs).expect("rule should run");
        assert!(result.passed);
        assert_eq!(result.rule_name, "All 2 TOML files are valid");
    }

    #[test]
    fn one_malformed_file_does_not_hide_the_rest() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        std::fs::write(dir.path().join("good.toml"), "[s]\nk = \"v\"\n")
            .expect("write should succeed");
        std::fs::write(dir.path().join("bad.toml"), "[s]\nnot an assignment\n")
            .expect("write should succeed");
        let vcs = MockVcs::new()
            .with_tracked("good.toml")
            .with_tracked("bad.toml");

        let result = check(&config_at(dir.path()), &vcs).expect("rule should run");
        assert!(!result.passed);
        assert_eq!(result.issues.len(), 1, "only the malformed file is flagged");
        assert_eq!(result.issues[0].file.as_deref(), Some("bad.toml"));
        assert_eq!(
            result.rule_name, "All 2 TOML files are valid",
            "the count reflects files examined, not files that passed"
        );
    }

    #[test]
    fn non_toml_tracked_files_are_not_examined() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        std::fs::write(dir.path().join("README.md"), "# hi\n").expect("write should succeed");
        let vcs = MockVcs::new().with_tracked("README.md");

        let result = check(&config_at(dir.path()), &vcs).expect("rule should run");
        assert_eq!(result.rule_name, "All 0 TOML files are valid");
        assert!(result.passed);
    }
}
