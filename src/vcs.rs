//! Read-only version-control queries behind a narrow capability trait.
//!
//! Provides the [`VcsQuery`] trait so that rules can be unit-tested without
//! invoking a real git binary. Production code uses [`GitQuery`]; tests use
//! `MockVcs`.
//!
//! Every query degrades to its negative answer (`false` / empty list) when
//! git is unavailable or the directory is not a repository — validation
//! still runs its filesystem- and parser-level checks in that case.

use std::path::PathBuf;

use crate::exec;

/// Abstraction over the read-only VCS queries used by rules.
///
/// Implement this trait to swap in a fake during tests, keeping rule logic
/// independent of the git binary. The production implementation is
/// [`GitQuery`].
///
/// A path can be tracked, ignored, neither, or (in pathological repository
/// states) both; callers must not assume the answers are mutually exclusive.
pub trait VcsQuery {
    /// Returns `true` if the VCS reports `path` as a tracked file.
    ///
    /// "Not found" is a normal `false` result, never an error.
    fn is_tracked(&self, path: &str) -> bool;

    /// Returns `true` if the VCS's ignore rules match `path`.
    fn is_ignored(&self, path: &str) -> bool;

    /// Returns all tracked paths relative to the repository root, in
    /// VCS-reported order. The order is not guaranteed stable.
    fn tracked_files(&self) -> Vec<String>;
}

/// Production [`VcsQuery`] implementation that shells out to git.
#[derive(Debug)]
pub struct GitQuery {
    root: PathBuf,
}

impl GitQuery {
    /// Create a query facade for the repository at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl VcsQuery for GitQuery {
    fn is_tracked(&self, path: &str) -> bool {
        exec::run_unchecked_in(&self.root, "git", &["ls-files", "--error-unmatch", path])
            .map(|r| r.success)
            .unwrap_or(false)
    }

    fn is_ignored(&self, path: &str) -> bool {
        exec::run_unchecked_in(&self.root, "git", &["check-ignore", "-q", path])
            .map(|r| r.success)
            .unwrap_or(false)
    }

    fn tracked_files(&self) -> Vec<String> {
        match exec::run_unchecked_in(&self.root, "git", &["ls-files"]) {
            Ok(result) if result.success => result
                .stdout
                .lines()
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Mock [`VcsQuery`] for unit tests.
///
/// Pre-configure tracked and ignored paths using the builder-style methods,
/// then pass a reference to rule functions that accept a `&dyn VcsQuery`.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockVcs {
    tracked: Vec<String>,
    ignored: Vec<String>,
}

#[cfg(test)]
impl MockVcs {
    /// Create an empty mock with nothing tracked or ignored.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `path` as tracked.
    #[must_use]
    pub fn with_tracked(mut self, path: impl Into<String>) -> Self {
        self.tracked.push(path.into());
        self
    }

    /// Mark `path` as matched by the ignore rules.
    #[must_use]
    pub fn with_ignored(mut self, path: impl Into<String>) -> Self {
        self.ignored.push(path.into());
        self
    }
}

#[cfg(test)]
impl VcsQuery for MockVcs {
    fn is_tracked(&self, path: &str) -> bool {
        self.tracked.iter().any(|p| p == path)
    }

    fn is_ignored(&self, path: &str) -> bool {
        self.ignored.iter().any(|p| p == path)
    }

    fn tracked_files(&self) -> Vec<String> {
        self.tracked.clone()
    }
}
