use crate::cli::BuildArgs;
use crate::config::{CONFIG_FILE_NAME, DualpackConfig, ENV_PREFIX};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use std::path::PathBuf;

impl DualpackConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(args: &BuildArgs) -> Result<Self> {
        Self::figment(args)?.extract().map_err(|e| {
            ConfigError::InvalidValue {
                field: "configuration".to_string(),
                value: e.to_string(),
                hint: format!("Check {} syntax and field types", CONFIG_FILE_NAME),
            }
            .into()
        })
    }

    /// Assemble the layered providers without extracting.
    pub fn figment(args: &BuildArgs) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_config()));

        // An explicit --config must exist; the implicit one is optional
        let config_file = match &args.config {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::NotFound(path.clone()).into());
            }
            Some(path) => Some(path.clone()),
            None => {
                let root = args.cwd.clone().unwrap_or_else(|| PathBuf::from("."));
                let default_path = root.join(CONFIG_FILE_NAME);
                default_path.is_file().then_some(default_path)
            }
        };

        if let Some(path) = config_file {
            tracing::debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }

        // Merge environment variables (DUALPACK_CWD, DUALPACK_TRANSPILE__TARGET, etc.)
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        Ok(Self::merge_cli_overrides(figment, args))
    }

    /// CLI flags override everything, but only the ones actually given.
    fn merge_cli_overrides(mut figment: Figment, args: &BuildArgs) -> Figment {
        if let Some(cwd) = &args.cwd {
            figment = figment.merge(("cwd", cwd));
        }
        if let Some(target) = args.target {
            figment = figment.merge(("transpile.target", target));
        }
        if args.no_comments {
            figment = figment.merge(("transpile.comments", false));
        }
        if let Some(command) = &args.bundler {
            figment = figment.merge(("bundler.command", split_command(command)));
        }
        figment
    }

    /// Get default configuration values.
    pub(crate) fn default_config() -> Self {
        use crate::config::defaults::*;
        use crate::config::types::*;

        Self {
            cwd: None,
            bundler: BundlerConfig::default(),
            esm: default_esm_entry(),
            cjs: default_cjs_entry(),
            transpile: TranspileConfig::default(),
        }
    }
}

/// Split a command line on whitespace. No quoting support.
pub(crate) fn split_command(command: &str) -> Vec<String> {
    command.split_whitespace().map(ToString::to_string).collect()
}
