use crate::config::DualpackConfig;
use crate::config::types::EntryConfig;
use crate::error::{ConfigError, Result};

impl DualpackConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        let has_program = self
            .bundler
            .command
            .first()
            .is_some_and(|program| !program.trim().is_empty());
        if !has_program {
            return Err(ConfigError::MissingField {
                field: "bundler.command".to_string(),
                hint: "Set the command that runs your bundler, e.g. [\"npx\", \"vite\", \"build\"]"
                    .to_string(),
            }
            .into());
        }

        if let Some(cwd) = &self.cwd {
            if !cwd.is_dir() {
                return Err(ConfigError::InvalidValue {
                    field: "cwd".to_string(),
                    value: cwd.display().to_string(),
                    hint: "Working directory must be an existing directory".to_string(),
                }
                .into());
            }
        }

        validate_entry("esm", &self.esm)?;
        validate_entry("cjs", &self.cjs)?;

        if self.esm.input == self.cjs.input {
            return Err(ConfigError::InvalidValue {
                field: "cjs.input".to_string(),
                value: self.cjs.input.display().to_string(),
                hint: "ESM and CJS entries must be different files".to_string(),
            }
            .into());
        }

        if self.esm.output == self.cjs.output {
            return Err(ConfigError::InvalidValue {
                field: "cjs.output".to_string(),
                value: self.cjs.output.display().to_string(),
                hint: "ESM and CJS outputs must be different files".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

fn validate_entry(name: &str, entry: &EntryConfig) -> Result<()> {
    if entry.input.file_name().is_none() {
        return Err(ConfigError::InvalidValue {
            field: format!("{}.input", name),
            value: entry.input.display().to_string(),
            hint: "Input must name a file".to_string(),
        }
        .into());
    }

    if entry.output.file_name().is_none() {
        return Err(ConfigError::InvalidValue {
            field: format!("{}.output", name),
            value: entry.output.display().to_string(),
            hint: "Output must name a file; its source map is written next to it".to_string(),
        }
        .into());
    }

    Ok(())
}
