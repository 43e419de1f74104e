//! Logging infrastructure for the dualpack CLI.
//!
//! Diagnostics go through `tracing` to stderr. The build banner, per-file
//! summaries and the success line are user output and go through the
//! [`Reporter`](crate::pipeline::Reporter) instead.
//!
//! # Example
//!
//! ```rust,no_run
//! use dualpack_cli::logger::init_logger;
//!
//! init_logger(false, false, false);
//! tracing::debug!(file = "temp/index.es.js", "transpiling");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "dualpack_cli=debug,dualpack_transpile=debug";
const QUIET_FILTER: &str = "dualpack_cli=error,dualpack_transpile=error";
const DEFAULT_FILTER: &str = "dualpack_cli=warn,dualpack_transpile=warn";

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at the start of the program.
///
/// # Verbosity Levels
///
/// 1. `--verbose` flag: DEBUG for dualpack crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: WARN, so a normal build prints only the reporter output
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = filter_for(verbose, quiet, std::env::var("RUST_LOG").ok().as_deref());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool, quiet: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        rust_log
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_wins_over_rust_log() {
        let filter = filter_for(true, false, Some("off"));
        assert_eq!(filter.to_string(), EnvFilter::new(VERBOSE_FILTER).to_string());
    }

    #[test]
    fn test_quiet_filter() {
        let filter = filter_for(false, true, None);
        assert_eq!(filter.to_string(), EnvFilter::new(QUIET_FILTER).to_string());
    }

    #[test]
    fn test_rust_log_is_used_by_default() {
        let filter = filter_for(false, false, Some("dualpack_cli=trace"));
        assert_eq!(
            filter.to_string(),
            EnvFilter::new("dualpack_cli=trace").to_string()
        );
    }

    #[test]
    fn test_default_filter() {
        let filter = filter_for(false, false, None);
        assert_eq!(filter.to_string(), EnvFilter::new(DEFAULT_FILTER).to_string());
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logger(false, true, true);
        init_logger(true, false, true);
    }
}
