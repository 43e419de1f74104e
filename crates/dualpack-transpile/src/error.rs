//! Error types for source transpilation

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while transpiling a file.
///
/// Any of these means the transpiler produced no usable result.
#[derive(Error, Debug, Diagnostic)]
pub enum TranspileError {
    /// Source file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    #[diagnostic(code(dualpack::transpile::read_failed))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension is not a JavaScript or TypeScript one
    #[error("Unsupported file type: {}", path.display())]
    #[diagnostic(
        code(dualpack::transpile::unsupported_file),
        help("Expected a .js, .mjs, .cjs, .jsx, .ts, .mts, .cts or .tsx file")
    )]
    UnsupportedFile { path: PathBuf },

    /// Source failed to parse
    #[error("Failed to parse {}: {}", path.display(), messages.join(", "))]
    #[diagnostic(code(dualpack::transpile::parse_failed))]
    ParseFailed { path: PathBuf, messages: Vec<String> },

    /// Target not understood by the transformer
    #[error("Invalid target '{target}': {reason}")]
    #[diagnostic(code(dualpack::transpile::invalid_target))]
    InvalidTarget { target: String, reason: String },

    /// Transformer reported errors
    #[error("Transform failed for {}: {}", path.display(), messages.join(", "))]
    #[diagnostic(code(dualpack::transpile::transform_failed))]
    TransformFailed { path: PathBuf, messages: Vec<String> },

    /// Source map was requested but codegen did not produce one
    #[error("No source map generated for {}", path.display())]
    #[diagnostic(code(dualpack::transpile::missing_source_map))]
    MissingSourceMap { path: PathBuf },

    /// Blocking transform task panicked or was cancelled
    #[error("Transpile task for {} did not complete: {reason}", path.display())]
    #[diagnostic(code(dualpack::transpile::join_failed))]
    Join { path: PathBuf, reason: String },
}

/// Result type for transpile operations
pub type Result<T> = std::result::Result<T, TranspileError>;
