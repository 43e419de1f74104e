//! Transpiler abstraction used by the build pipeline.

use crate::error::{Result, TranspileError};
use crate::options::TranspileOptions;
use crate::transform::{TranspileOutput, transform_source};
use async_trait::async_trait;
use std::path::Path;
use tokio::task;

/// Version of the OXC crates this transpiler is built against.
///
/// The workspace pins every `oxc_*` crate to exactly this version.
pub const OXC_VERSION: &str = "0.101.0";

/// A source-to-source transpiler that works on files.
///
/// Implementations must be shareable across the concurrent ESM and CJS
/// transpile steps.
#[async_trait]
pub trait Transpiler: Send + Sync + std::fmt::Debug {
    /// Tool name shown in the build banner
    fn name(&self) -> &str;

    /// Tool version shown in the build banner
    fn version(&self) -> &str;

    /// Read and transpile the file at `path`.
    async fn transpile_file(&self, path: &Path, options: &TranspileOptions) -> Result<TranspileOutput>;
}

/// OXC-backed transpiler.
///
/// Reads the source with `tokio::fs` and runs the CPU-bound transform on the
/// blocking pool so the two entry points transform in parallel.
#[derive(Debug, Clone, Copy, Default)]
pub struct OxcTranspiler;

impl OxcTranspiler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transpiler for OxcTranspiler {
    fn name(&self) -> &str {
        "oxc"
    }

    fn version(&self) -> &str {
        OXC_VERSION
    }

    async fn transpile_file(&self, path: &Path, options: &TranspileOptions) -> Result<TranspileOutput> {
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| TranspileError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let owned_path = path.to_path_buf();
        let options = *options;
        task::spawn_blocking(move || transform_source(&source, &owned_path, &options))
            .await
            .map_err(|e| TranspileError::Join {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?
    }
}
