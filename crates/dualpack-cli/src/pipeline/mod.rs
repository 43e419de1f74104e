//! The build pipeline.
//!
//! ```text
//! bundler ──▶ mkdir esm/cjs ──▶ ┌ transpile esm ┐ ──▶ success banner
//!                               └ transpile cjs ┘
//! ```
//!
//! - [`bundler`] - external bundler collaborator
//! - [`step`] - one file through the transpiler, written with its source map
//! - [`orchestrator`] - sequencing, concurrency and timing
//! - [`reporter`] - the logging capability the pipeline reports through
//! - [`paths`] - input/output layout

pub mod bundler;
pub mod orchestrator;
pub mod paths;
pub mod reporter;
pub mod step;

pub use bundler::{Bundler, CommandBundler, DEFAULT_BUNDLER_COMMAND};
pub use orchestrator::{BuildOrchestrator, BuildReport};
pub use paths::{BuildPaths, TranspileTarget};
pub use reporter::{FileSummary, Reporter};
pub use step::transpile_file;
