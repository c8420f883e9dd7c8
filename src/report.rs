//! Colored terminal reporting and exit-code computation.
//!
//! The reporter is a pure consumer of [`ValidationResult`] values: it
//! prints each result as the engine produces it, then summarizes the run
//! and derives the process exit code. Colors and glyphs are plain constant
//! tables; there is no mutable state anywhere in this module.

use crate::config::Config;
use crate::rules::{Severity, ValidationResult};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

const PASS: &str = "✓";
const FAIL: &str = "✗";
const WARN: &str = "⚠";
const NOTE: &str = "ℹ";

/// Print the run banner shown before the first rule.
pub fn print_header() {
    println!("\n{BOLD}Validating dotfiles repository...{RESET}\n");
}

/// Print one rule's result: pass/fail glyph and name, then one line per
/// finding with an indented fix suggestion where present.
pub fn print_result(result: &ValidationResult) {
    if result.passed {
        println!("{GREEN}{PASS} {}{RESET}", result.rule_name);
    } else {
        println!("{RED}{FAIL} {}{RESET}", result.rule_name);
    }

    for issue in &result.issues {
        let file_suffix = issue
            .file
            .as_ref()
            .map(|file| format!(" ({file})"))
            .unwrap_or_default();

        let (glyph, color) = match issue.severity {
            Severity::Error => (FAIL, RED),
            Severity::Warning => (WARN, YELLOW),
            Severity::Info => (NOTE, CYAN),
        };
        println!("{color}  {glyph} {}{file_suffix}{RESET}", issue.message);

        if let Some(fix) = &issue.fix_suggestion {
            println!("{CYAN}    {NOTE} {fix}{RESET}");
        }
    }
}

/// Print the final summary and return the process exit code: `1` when any
/// `Error` finding exists, `0` otherwise.
///
/// In fix mode, remediation commands are batched at the end: one block of
/// `.gitignore` lines and one `git add` command covering every affected
/// file.
#[must_use]
pub fn summarize(results: &[ValidationResult], config: &Config) -> u8 {
    println!("\n{BOLD}{}{RESET}", "=".repeat(60));

    let total_issues: usize = results.iter().map(|r| r.issues.len()).sum();
    let errors = error_count(results);
    let warnings = total_issues - errors;

    if errors > 0 {
        println!(
            "{RED}{FAIL} Validation failed: {total_issues} issue(s) found ({errors} errors, {warnings} warnings){RESET}"
        );

        if config.fix_mode {
            print_fix_suggestions(results);
        }

        1
    } else if warnings > 0 {
        println!("{YELLOW}{WARN} Validation completed with {warnings} warning(s){RESET}");
        0
    } else {
        println!("{GREEN}{PASS} All validations passed!{RESET}\n");
        0
    }
}

/// Count `Error`-severity findings across all results.
#[must_use]
pub fn error_count(results: &[ValidationResult]) -> usize {
    results
        .iter()
        .flat_map(|r| &r.issues)
        .filter(|i| i.severity == Severity::Error)
        .count()
}

fn print_fix_suggestions(results: &[ValidationResult]) {
    println!("\n{BOLD}Fix suggestions:{RESET}\n");

    let ignored = files_with_fix_mentioning(results, ".gitignore");
    if !ignored.is_empty() {
        println!("{CYAN}{NOTE} Add these lines to .gitignore:{RESET}");
        for file in &ignored {
            println!("{GREEN}  !{file}{RESET}");
        }
        println!();
    }

    let untracked = files_with_fix_mentioning(results, "git add");
    if !untracked.is_empty() {
        println!("{CYAN}{NOTE} Run this command to track files:{RESET}");
        println!("{GREEN}  git add {}{RESET}", untracked.join(" "));
        println!();
    }
}

/// Collect the files of every finding whose fix suggestion mentions
/// `mechanism`, in report order.
fn files_with_fix_mentioning<'a>(
    results: &'a [ValidationResult],
    mechanism: &str,
) -> Vec<&'a str> {
    results
        .iter()
        .flat_map(|r| &r.issues)
        .filter(|i| {
            i.fix_suggestion
                .as_deref()
                .is_some_and(|fix| fix.contains(mechanism))
        })
        .filter_map(|i| i.file.as_deref())
        .collect()
}
