//! Error handling for the dualpack CLI.
//!
//! The hierarchy mirrors the build pipeline:
//! - **Top-level errors** (`CliError`) are what commands return
//! - **Domain errors** (`ConfigError`, `BuildError`) carry the details
//! - **Conversion** is automatic via `#[from]` attributes
//!
//! No error is recovered anywhere in the pipeline. Every failure travels up
//! to `main`, is rendered by miette, and the process exits non-zero.

mod report;

pub use report::{build_error_to_miette, cli_error_to_miette};

use dualpack_transpile::TranspileError;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Build pipeline errors
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Explicitly requested config file doesn't exist
    #[error("Config file not found: {}\n\nHint: Create a dualpack.config.json file or fix the --config path", .0.display())]
    NotFound(PathBuf),

    /// Missing required configuration field
    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Helpful hint for providing the field
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Filesystem operation that failed during a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOperation {
    CreateDir,
    Write,
    Stat,
}

impl fmt::Display for FsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CreateDir => "create directory",
            Self::Write => "write",
            Self::Stat => "stat",
        })
    }
}

/// Build pipeline errors. All of them abort the build.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The bundler could not be started or exited unsuccessfully
    #[error("Bundler `{command}` failed: {reason}")]
    BundlerFailed {
        /// Command line that was run
        command: String,
        /// What went wrong
        reason: String,
    },

    /// The transpiler produced no result for an entry file
    #[error("Transform failed for {}: {source}", .file.display())]
    TransformFailed {
        /// Entry file that failed to transform
        file: PathBuf,
        #[source]
        source: TranspileError,
    },

    /// Directory creation, file write or file stat failed
    #[error("Failed to {operation} {}: {source}", .path.display())]
    Filesystem {
        operation: FsOperation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait attaching the failed operation and path to I/O errors.
pub trait FsResultExt<T> {
    /// Wrap an I/O error as [`BuildError::Filesystem`].
    fn fs_context(self, operation: FsOperation, path: &Path) -> Result<T, BuildError>;
}

impl<T> FsResultExt<T> for std::io::Result<T> {
    fn fs_context(self, operation: FsOperation, path: &Path) -> Result<T, BuildError> {
        self.map_err(|source| BuildError::Filesystem {
            operation,
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound(PathBuf::from("dualpack.config.json"));
        let msg = err.to_string();
        assert!(msg.contains("Config file not found"));
        assert!(msg.contains("dualpack.config.json"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_config_error_invalid_value() {
        let err = ConfigError::InvalidValue {
            field: "cjs.output".to_string(),
            value: "dist/index.js".to_string(),
            hint: "ESM and CJS outputs must differ".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid value for 'cjs.output'"));
        assert!(msg.contains("dist/index.js"));
        assert!(msg.contains("must differ"));
    }

    #[test]
    fn test_build_error_bundler_failed() {
        let err = BuildError::BundlerFailed {
            command: "npx vite build".to_string(),
            reason: "exited with status 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Bundler `npx vite build` failed: exited with status 1"
        );
    }

    #[test]
    fn test_build_error_transform_failed() {
        let err = BuildError::TransformFailed {
            file: PathBuf::from("temp/index.es.js"),
            source: TranspileError::MissingSourceMap {
                path: PathBuf::from("temp/index.es.js"),
            },
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Transform failed for temp/index.es.js"));
        assert!(msg.contains("No source map generated"));
    }

    #[test]
    fn test_fs_context_wraps_io_error() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        let err = result
            .fs_context(FsOperation::Write, Path::new("dist/esm/index.esm.js"))
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::Filesystem {
                operation: FsOperation::Write,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "Failed to write dist/esm/index.esm.js: denied"
        );
    }

    #[test]
    fn test_cli_error_from_build_error() {
        let build_err = BuildError::BundlerFailed {
            command: "vite".to_string(),
            reason: "not found".to_string(),
        };
        let cli_err: CliError = build_err.into();
        assert!(matches!(cli_err, CliError::Build(_)));
    }
}
