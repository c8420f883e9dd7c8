use std::process::ExitCode;

use clap::Parser;

use dotfiles_validator::config::Config;
use dotfiles_validator::vcs::GitQuery;
use dotfiles_validator::{cli, logging, report, rules};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init(args.verbose);

    // A missing repository root is the one failure that aborts before any
    // rule runs.
    let config = match Config::from_cli(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    report::print_header();
    tracing::debug!("dotfiles root: {}", config.dotfiles_dir.display());

    let vcs = GitQuery::new(&config.dotfiles_dir);
    let mut results = Vec::new();
    for rule in rules::catalog() {
        let result = rules::execute(&rule, &config, &vcs);
        report::print_result(&result);
        results.push(result);
    }

    ExitCode::from(report::summarize(&results, &config))
}
