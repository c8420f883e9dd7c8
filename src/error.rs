//! Domain-specific error types for the validator.
//!
//! This module provides structured error types using [`thiserror`].
//! The parser returns a typed [`ParseError`] so that rules can catch and
//! report syntax failures per file; command-level code converts errors to
//! [`anyhow::Error`] via the standard `?` operator. [`StartupError`] is the
//! only error class allowed to abort the run (exit code 2) — every other
//! failure is converted into a finding and reported.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the dotter config parser.
///
/// Raised only for genuinely malformed input or unreadable files; a missing
/// config file is not an error (the parser returns an empty document), and
/// semantic issues such as missing keys are the rule layer's concern.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A line is neither a section header, a comment, nor a `key = value`
    /// assignment.
    #[error("invalid syntax in {path} at line {line}: {message}")]
    Syntax {
        /// Path of the offending file, as given to the parser.
        path: String,
        /// 1-based line number of the offending line.
        line: usize,
        /// Human-readable description of the problem.
        message: String,
    },

    /// An I/O error occurred while reading an existing config file.
    #[error("IO error reading config file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Fatal errors detected before any rule can run.
#[derive(Error, Debug)]
pub enum StartupError {
    /// The resolved dotfiles directory does not exist or is not a directory.
    #[error("dotfiles directory does not exist: {}", .0.display())]
    MissingRoot(PathBuf),

    /// The dotfiles directory could not be resolved to an absolute path.
    #[error("failed to resolve dotfiles directory: {0}")]
    Resolve(#[from] std::io::Error),
}
