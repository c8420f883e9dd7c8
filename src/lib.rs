//! Dotfiles repository validator.
//!
//! Read-only static checker that verifies a dotfiles repository is
//! internally consistent: every file declared in the dotter configuration
//! exists and is tracked by git, no tracked path is a broken symlink, and
//! structured config files (dotter TOML, JSON) parse cleanly. Findings are
//! reported with severities and optional fix suggestions; nothing is ever
//! written to the repository.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]** — run configuration and the dotter config parser
//! - **[`vcs`]** — read-only git queries behind the [`vcs::VcsQuery`] capability trait
//! - **[`rules`]** — the ordered catalog of independent validation rules
//! - **[`report`]** — colored terminal output and exit-code computation
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod report;
pub mod rules;
pub mod vcs;
