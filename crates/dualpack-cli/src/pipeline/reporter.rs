//! Progress reporting capability handed to the build pipeline.

use std::path::PathBuf;

/// Sizes of one transpiled entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    /// Input path as configured
    pub source: PathBuf,
    /// Output path as configured
    pub destination: PathBuf,
    /// Bytes in the written code file
    pub code_size: u64,
    /// Bytes in the written source map
    pub map_size: u64,
}

/// Receives the human-facing events of a build.
///
/// The orchestrator and the transpile step only talk to this trait, never
/// to the terminal directly.
pub trait Reporter: Send + Sync {
    /// Transpilation is about to start with the named tool.
    fn transpile_started(&self, tool: &str, version: &str);

    /// One entry point was written.
    fn file_transpiled(&self, summary: &FileSummary);

    /// The whole build finished; `duration` is already formatted.
    fn build_succeeded(&self, duration: &str);
}
