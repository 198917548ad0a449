//! `spreadcal_log` v1:
//! Tracing subscriber setup for the calendar binary.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Level implied by the `-v`/`-q` flags; quiet wins over verbose.
pub fn derive_log_level(n_verbose: u8, if_quiet: bool) -> LevelFilter {
    if if_quiet {
        return LevelFilter::ERROR;
    }
    match n_verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` directives take precedence over the flag-derived level.
/// Returns `false` when a global subscriber was already installed.
pub fn init_logging(n_verbose: u8, if_quiet: bool) -> bool {
    let filter = EnvFilter::builder()
        .with_default_directive(derive_log_level(n_verbose, if_quiet).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
