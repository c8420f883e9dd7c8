// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed dotfiles repository and a fluent
// builder so each integration test can set up an isolated environment
// without repeating filesystem boilerplate, plus a static VCS fake so no
// test depends on a real git binary.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::Path;

use dotfiles_validator::config::Config;
use dotfiles_validator::vcs::VcsQuery;

/// An isolated dotfiles repository backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
#[derive(Debug)]
pub struct TestRepo {
    /// Temporary directory containing the test repository.
    pub root: tempfile::TempDir,
}

impl TestRepo {
    /// Path to the repository root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Build a run [`Config`] pointed at this repository.
    pub fn config(&self) -> Config {
        Config {
            dotfiles_dir: self.root.path().to_path_buf(),
            verbose: false,
            fix_mode: false,
        }
    }
}

/// Fluent builder for [`TestRepo`].
#[derive(Debug)]
pub struct TestRepoBuilder {
    root: tempfile::TempDir,
}

impl TestRepoBuilder {
    /// Begin building a repository in a fresh temporary directory.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Write `content` to `.dotter/global.toml`.
    pub fn with_global_config(self, content: &str) -> Self {
        self.write(".dotter/global.toml", content)
    }

    /// Write `content` to `.dotter/local.toml`.
    pub fn with_local_config(self, content: &str) -> Self {
        self.write(".dotter/local.toml", content)
    }

    /// Write an arbitrary file at a repository-relative path.
    pub fn with_file(self, rel: &str, content: &str) -> Self {
        self.write(rel, content)
    }

    /// Create a symlink at `rel` pointing at a path that does not exist.
    #[cfg(unix)]
    pub fn with_broken_symlink(self, rel: &str) -> Self {
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create symlink parent");
        }
        std::os::unix::fs::symlink(self.root.path().join("no-such-target"), &path)
            .expect("create broken symlink");
        self
    }

    /// Finish building and return the repository.
    pub fn build(self) -> TestRepo {
        TestRepo { root: self.root }
    }

    fn write(self, rel: &str, content: &str) -> Self {
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write file");
        self
    }
}

/// Static [`VcsQuery`] fake with pre-configured answers.
///
/// Integration tests cannot see the crate's `#[cfg(test)]` mock, so they
/// bring their own.
#[derive(Debug, Default)]
pub struct StaticVcs {
    /// Paths reported as tracked, in listing order.
    pub tracked: Vec<String>,
    /// Paths matched by the ignore rules.
    pub ignored: Vec<String>,
}

impl StaticVcs {
    /// A fake with the given tracked paths and nothing ignored.
    pub fn tracking(paths: &[&str]) -> Self {
        Self {
            tracked: paths.iter().map(ToString::to_string).collect(),
            ignored: Vec::new(),
        }
    }

    /// A fake with nothing tracked and the given paths ignored.
    pub fn ignoring(paths: &[&str]) -> Self {
        Self {
            tracked: Vec::new(),
            ignored: paths.iter().map(ToString::to_string).collect(),
        }
    }
}

impl VcsQuery for StaticVcs {
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
