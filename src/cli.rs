use clap::Parser;

/// Top-level CLI entry point for the dotfiles validator.
#[derive(Parser, Debug)]
#[command(
    name = "validate-dotfiles",
    about = "Validate dotfiles repository structure and configuration",
    version = option_env!("VALIDATOR_VERSION").unwrap_or(env!("CARGO_PKG_VERSION")),
    after_help = "The repository root is read from the DOTFILES_DIR environment variable,\n\
                  falling back to the current working directory."
)]
pub struct Cli {
    /// Show fix suggestions in the final summary
    #[arg(short, long)]
    pub fix: bool,

    /// Show detailed output while rules run
    #[arg(short, long)]
    pub verbose: bool,
}
