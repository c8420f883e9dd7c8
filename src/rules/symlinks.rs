//! Rule: no tracked path is a broken symbolic link.

use std::path::Path;

use anyhow::Result;

use super::{Issue, Severity, ValidationResult};
use crate::config::Config;
use crate::vcs::VcsQuery;

/// Stable label for this rule.
pub const LABEL: &str = "No broken symlinks";

/// Check every tracked path for symlinks whose target does not resolve.
///
/// Regular files and valid symlinks produce no finding.
///
/// # Errors
///
/// Does not fail in practice; the signature matches the rule catalog.
pub fn check(config: &Config, vcs: &dyn VcsQuery) -> Result<ValidationResult> {
    let mut issues = Vec::new();

    for file in vcs.tracked_files() {
        let path = config.dotfiles_dir.join(&file);
        if is_broken_symlink(&path) {
            issues.push(
                Issue::new(Severity::Error, format!("Broken symlink: {file}")).with_file(file),
            );
        }
    }

    Ok(ValidationResult::from_issues(LABEL, issues))
}

/// A path is a broken symlink when its own metadata says "symlink" but
/// resolving through the link fails.
fn is_broken_symlink(path: &Path) -> bool {
    std::fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink() && std::fs::metadata(path).is_err())
        .unwrap_or(false)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::vcs::MockVcs;

    fn config_at(dir: &Path) -> Config {
        Config {
            dotfiles_dir: dir.to_path_buf(),
            verbose: false,
            fix_mode: false,
        }
    }

    #[test]
    fn regular_files_pass() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        std::fs::write(dir.path().join("zshrc"), "").expect("write should succeed");
        let vcs = MockVcs::new().with_tracked("zshrc");

        let result = check(&config_at(dir.path()), &vcs).expect("rule should run");
        assert!(result.passed);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn missing_tracked_file_is_not_a_broken_symlink() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        let vcs = MockVcs::new().with_tracked("deleted-but-tracked");

        let result = check(&config_at(dir.path()), &vcs).expect("rule should run");
        assert!(result.passed);
    }

    #[cfg(unix)]
    #[test]
    fn broken_symlink_is_error() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling"))
            .expect("symlink should create");
        let vcs = MockVcs::new().with_tracked("dangling");

        let result = check(&config_at(dir.path()), &vcs).expect("rule should run");
        assert!(!result.passed);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].severity, Severity::Error);
        assert!(result.issues[0].message.contains("Broken symlink"));
        assert_eq!(result.issues[0].file.as_deref(), Some("dangling"));
    }

    #[cfg(unix)]
    #[test]
    fn valid_symlink_passes() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        std::fs::write(dir.path().join("target"), "").expect("write should succeed");
        std::os::unix::fs::symlink(dir.path().join("target"), dir.path().join("link"))
            .expect("symlink should create");
        let vcs = MockVcs::new().with_tracked("link").with_tracked("target");

        let result = check(&config_at(dir.path()), &vcs).expect("rule should run");
        assert!(result.passed);
        assert!(result.issues.is_empty());
    }
}
