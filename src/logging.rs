//! Diagnostic logging for the validator.
//!
//! Rule results and the summary are printed to stdout by the [`crate::report`]
//! module; everything else (per-rule progress, file counts) goes through
//! [`tracing`] and lands on stderr, so piping stdout still yields a clean
//! report.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// The filter is taken from `RUST_LOG` when set; otherwise `--verbose`
/// enables `debug` and the default shows only warnings. Calling this more
/// than once is a no-op (the second install attempt is ignored), which keeps
/// it safe under test harnesses.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
