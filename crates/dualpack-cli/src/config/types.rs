use dualpack_transpile::EsTarget;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bundler invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BundlerConfig {
    /// Program followed by its arguments (e.g., ["npx", "vite", "build"])
    #[serde(default = "crate::config::defaults::default_bundler_command")]
    pub command: Vec<String>,
}

impl Default for BundlerConfig {
    fn default() -> Self {
        Self {
            command: crate::config::defaults::default_bundler_command(),
        }
    }
}

/// One entry point: the bundler's output and where its transpiled form goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EntryConfig {
    /// File produced by the bundler
    pub input: PathBuf,
    /// Transpiled file; the source map is written to `<output>.map`
    pub output: PathBuf,
}

/// Transpiler settings. Source maps are always generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TranspileConfig {
    /// JavaScript target version
    #[serde(default)]
    pub target: EsTarget,

    /// Keep comments in the output
    #[serde(default = "crate::config::defaults::default_comments")]
    pub comments: bool,
}

impl Default for TranspileConfig {
    fn default() -> Self {
        Self {
            target: EsTarget::default(),
            comments: crate::config::defaults::default_comments(),
        }
    }
}
