//! Terminal reporter for build events.

use crate::pipeline::{FileSummary, Reporter};
use crate::ui::format_size;
use owo_colors::{OwoColorize, Style};

/// Prints build events to stderr.
///
/// Colors are applied only when enabled; quiet mode suppresses everything
/// (errors are reported separately by `main`).
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    color: bool,
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new(color: bool, quiet: bool) -> Self {
        Self { color, quiet }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    /// `"<tool> v<version> transpiling..."`
    pub fn banner_line(&self, tool: &str, version: &str) -> String {
        format!(
            "{} {}",
            self.paint(&format!("{} v{}", tool, version), Style::new().cyan()),
            self.paint("transpiling...", Style::new().green())
        )
    }

    /// `"<src> -> <dst> <size> | map: <size>"`, code size in bold.
    pub fn summary_line(&self, summary: &FileSummary) -> String {
        format!(
            "{} -> {} {} | map: {}",
            summary.source.display(),
            summary.destination.display(),
            self.paint(&format_size(summary.code_size), Style::new().bold()),
            format_size(summary.map_size)
        )
    }

    pub fn success_line(&self, duration: &str) -> String {
        self.paint(
            &format!("Build successful ({}) 🎉", duration),
            Style::new().green(),
        )
    }
}

impl Reporter for ConsoleReporter {
    fn transpile_started(&self, tool: &str, version: &str) {
        if !self.quiet {
            eprintln!();
            eprintln!("{}", self.banner_line(tool, version));
        }
    }

    fn file_transpiled(&self, summary: &FileSummary) {
        if !self.quiet {
            eprintln!("{}", self.summary_line(summary));
        }
    }

    fn build_succeeded(&self, duration: &str) {
        if !self.quiet {
            eprintln!();
            eprintln!("{}", self.success_line(duration));
        }
    }
}
