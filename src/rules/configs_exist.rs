//! Rule: the dotter configuration files are present.

use anyhow::Result;

use super::{Issue, Severity, ValidationResult};
use crate::config::{self, Config};
use crate::vcs::VcsQuery;

/// Stable label for this rule.
pub const LABEL: &str = "Dotter configuration files exist";

/// Check that the global dotter config exists under the repository root.
///
/// The machine-specific overlay is optional and is not checked here.
///
/// # Errors
///
/// Does not fail in practice; the signature matches the rule catalog.
pub fn check(config: &Config, _vcs: &dyn VcsQuery) -> Result<ValidationResult> {
    let global = config.dotfiles_dir.join(config::GLOBAL_CONFIG);
    let mut issues = Vec::new();

    if !global.exists() {
        issues.push(
            Issue::new(Severity::Error, "Dotter global.toml not found")
                .with_file(config::GLOBAL_CONFIG),
        );
    }

    Ok(ValidationResult::from_issues(LABEL, issues))
}
