use crate::config::DualpackConfig;
use crate::config::types::EntryConfig;
use crate::pipeline::{BuildPaths, TranspileTarget};
use dualpack_transpile::TranspileOptions;
use std::path::PathBuf;

// Conversion implementations: Config -> pipeline inputs

impl From<&EntryConfig> for TranspileTarget {
    fn from(entry: &EntryConfig) -> Self {
        TranspileTarget::new(entry.input.clone(), entry.output.clone())
    }
}

impl DualpackConfig {
    /// Project root, defaulting to the current directory.
    pub fn root(&self) -> PathBuf {
        self.cwd.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Input/output layout for the orchestrator.
    pub fn build_paths(&self) -> BuildPaths {
        BuildPaths::new(self.root())
            .with_esm((&self.esm).into())
            .with_cjs((&self.cjs).into())
    }

    /// Per-file transpiler options. Source maps are always requested.
    pub fn transpile_options(&self) -> TranspileOptions {
        TranspileOptions {
            target: self.transpile.target,
            source_maps: true,
            comments: self.transpile.comments,
        }
    }
}
