//! Configuration system for dualpack with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod conversions;
mod defaults;
mod loading;
mod types;
mod validation;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use defaults::*;
pub use types::*;

/// Config file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "dualpack.config.json";

/// Prefix of environment overrides; `__` separates nested keys
/// (`DUALPACK_TRANSPILE__TARGET=es2020`).
pub const ENV_PREFIX: &str = "DUALPACK_";

/// Dualpack configuration - loaded from dualpack.config.json, env and CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DualpackConfig {
    /// Project root; the bundler runs here and relative paths resolve here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,

    /// How the bundler is invoked
    #[serde(default)]
    pub bundler: BundlerConfig,

    /// ESM entry: bundler output and transpiled destination
    #[serde(default = "default_esm_entry")]
    pub esm: EntryConfig,

    /// CJS entry: bundler output and transpiled destination
    #[serde(default = "default_cjs_entry")]
    pub cjs: EntryConfig,

    /// Transpiler settings
    #[serde(default)]
    pub transpile: TranspileConfig,
}

impl DualpackConfig {
    /// Generate JSON Schema for dualpack.config.json.
    pub fn json_schema() -> Result<serde_json::Value, serde_json::Error> {
        let schema = schemars::schema_for!(DualpackConfig);
        serde_json::to_value(schema)
    }
}
