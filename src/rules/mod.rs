//! The validation rule engine.
//!
//! Rules are first-class values: each is a stateless function from the run
//! [`Config`] and a [`VcsQuery`] capability to one [`ValidationResult`].
//! The [`catalog`] fixes their order; [`execute`] is the invocation boundary
//! that converts any unexpected rule failure into a synthetic finding, so a
//! broken rule can never prevent the others from running or the run from
//! producing an exit code.
//!
//! Rules are independent by construction: none sees another's issues, and
//! the only shared state is the read-only [`Config`].

pub mod configs_exist;
pub mod files_tracked;
pub mod json_syntax;
pub mod symlinks;
pub mod toml_syntax;

use anyhow::Result;

use crate::config::Config;
use crate::vcs::VcsQuery;

/// Severity of a single finding.
///
/// Only `Error` findings gate the exit code; warnings and informational
/// findings never fail a rule or the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational finding.
    Info,
    /// Advisory finding; does not fail the run.
    Warning,
    /// Failure finding; at least one anywhere yields exit code 1.
    Error,
}

/// One finding produced by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// How serious the finding is.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// Path relative to the dotfiles root, when the finding concerns one
    /// specific file.
    pub file: Option<String>,
    /// Actionable remediation, e.g. a shell command.
    pub fix_suggestion: Option<String>,
}

impl Issue {
    /// Create a finding with the given severity and message.
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            file: None,
            fix_suggestion: None,
        }
    }

    /// Attach the file the finding refers to.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Attach a remediation suggestion.
    #[must_use]
    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix_suggestion = Some(fix.into());
        self
    }
}

/// Output of one rule invocation. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Label shown in the report.
    pub rule_name: String,
    /// `true` iff the rule found no `Error`-severity issues.
    pub passed: bool,
    /// Findings in discovery order.
    pub issues: Vec<Issue>,
}

impl ValidationResult {
    /// Build a result, deriving `passed` from the issues' severities: a
    /// rule with only warnings still passes.
    #[must_use]
    pub fn from_issues(rule_name: impl Into<String>, issues: Vec<Issue>) -> Self {
        let passed = issues.iter().all(|i| i.severity != Severity::Error);
        Self {
            rule_name: rule_name.into(),
            passed,
            issues,
        }
    }
}

/// A named entry in the rule catalog.
///
/// `label` identifies the rule in diagnostics and in the synthetic result
/// produced when the rule body fails; the result a rule returns on success
/// may carry a more specific name (e.g. embedding a file count).
#[derive(Debug)]
pub struct Rule {
    /// Stable rule label.
    pub label: &'static str,
    /// The check function itself.
    pub check: fn(&Config, &dyn VcsQuery) -> Result<ValidationResult>,
}

/// The fixed, ordered rule catalog.
#[must_use]
pub fn catalog() -> Vec<Rule> {
    vec![
        Rule {
            label: configs_exist::LABEL,
            check: configs_exist::check,
        },
        Rule {
            label: files_tracked::LABEL,
            check: files_tracked::check,
        },
        Rule {
            label: symlinks::LABEL,
            check: symlinks::check,
        },
        Rule {
            label: toml_syntax::LABEL,
            check: toml_syntax::check,
        },
        Rule {
            label: json_syntax::LABEL,
            check: json_syntax::check,
        },
    ]
}

/// Run one rule at the invocation boundary.
///
/// An `Err` from the rule body becomes a single synthetic `Error` finding
/// for that rule; it never propagates further.
#[must_use]
pub fn execute(rule: &Rule, config: &Config, vcs: &dyn VcsQuery) -> ValidationResult {
    tracing::debug!("checking: {}", rule.label);
    match (rule.check)(config, vcs) {
        Ok(result) => result,
        Err(err) => ValidationResult::from_issues(
            rule.label,
            vec![Issue::new(
                Severity::Error,
                format!("rule failed internally: {err:#}"),
            )],
        ),
    }
}

/// Run every rule in catalog order and collect all results.
#[must_use]
pub fn run_all(config: &Config, vcs: &dyn VcsQuery) -> Vec<ValidationResult> {
    catalog()
        .iter()
        .map(|rule| execute(rule, config, vcs))
        .collect()
}
