//! Run configuration and the dotter config parser.

pub mod dotter;

use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::StartupError;

/// Repository-relative path of the global dotter configuration.
pub const GLOBAL_CONFIG: &str = ".dotter/global.toml";

/// Repository-relative path of the optional machine-specific overlay.
pub const LOCAL_CONFIG: &str = ".dotter/local.toml";

/// Process-wide, read-only configuration for one validation run.
///
/// Constructed once at startup from CLI flags and the `DOTFILES_DIR`
/// environment override; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute path to the dotfiles repository root.
    pub dotfiles_dir: PathBuf,
    /// Enable extra diagnostic output while rules run.
    pub verbose: bool,
    /// Enable remediation-command printing in the final summary.
    pub fix_mode: bool,
}

impl Config {
    /// Build the run configuration from parsed CLI flags and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns a [`StartupError`] if the repository root does not exist or
    /// cannot be resolved; no rules run in that case.
    pub fn from_cli(args: &Cli) -> Result<Self, StartupError> {
        let override_dir = std::env::var_os("DOTFILES_DIR").map(PathBuf::from);
        Ok(Self {
            dotfiles_dir: resolve_dotfiles_dir(override_dir)?,
            verbose: args.verbose,
            fix_mode: args.fix,
        })
    }
}

/// Resolve the repository root: the `DOTFILES_DIR` override when given,
/// otherwise the current working directory.
///
/// The result is canonicalized so that rules always join declared paths
/// onto an absolute root.
///
/// # Errors
///
/// Returns [`StartupError::MissingRoot`] if the directory does not exist,
/// or [`StartupError::Resolve`] if it cannot be canonicalized.
pub fn resolve_dotfiles_dir(override_dir: Option<PathBuf>) -> Result<PathBuf, StartupError> {
    let dir = match override_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    if !dir.is_dir() {
        return Err(StartupError::MissingRoot(dir));
    }
    Ok(dir.canonicalize()?)
}
