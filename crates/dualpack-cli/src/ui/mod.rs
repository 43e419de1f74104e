//! Terminal UI: human-readable formatting and the console reporter.
//!
//! # Examples
//!
//! ```no_run
//! use dualpack_cli::pipeline::Reporter;
//! use dualpack_cli::ui;
//!
//! let reporter = ui::ConsoleReporter::new(ui::should_use_color(), false);
//! reporter.build_succeeded("1.20s");
//! ```

mod format;
mod reporter;

pub use format::{format_duration, format_size};
pub use reporter::ConsoleReporter;

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection on stderr.
pub fn should_use_color() -> bool {
    resolve_color(
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var_os("FORCE_COLOR").is_some(),
        console::user_attended_stderr(),
    )
}

fn resolve_color(no_color: bool, force_color: bool, attended: bool) -> bool {
    // NO_COLOR wins over FORCE_COLOR
    if no_color {
        return false;
    }
    force_color || attended
}
