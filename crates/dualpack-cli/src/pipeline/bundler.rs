//! Bundler collaborator.
//!
//! The bundler runs first and produces the entry files that get transpiled.
//! Its own configuration and plugin chain stay with the bundler; dualpack only
//! starts it in the project root and waits for it to finish.

use crate::error::BuildError;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Default bundler invocation: Vite with the project's own config.
pub const DEFAULT_BUNDLER_COMMAND: [&str; 3] = ["npx", "vite", "build"];

/// Something that produces the primary build artifacts.
#[async_trait]
pub trait Bundler: Send + Sync + std::fmt::Debug {
    /// Human-readable name for logs
    fn name(&self) -> &str;

    /// Run to completion in `root`.
    async fn bundle(&self, root: &Path) -> Result<(), BuildError>;
}

/// Bundler started as an external process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBundler {
    command: Vec<String>,
}

impl CommandBundler {
    /// `command[0]` is the program, the rest are its arguments.
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }

    /// Command line as a single string, for messages.
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }

    fn failure(&self, reason: impl Into<String>) -> BuildError {
        BuildError::BundlerFailed {
            command: self.command_line(),
            reason: reason.into(),
        }
    }
}

impl Default for CommandBundler {
    fn default() -> Self {
        Self::new(DEFAULT_BUNDLER_COMMAND.iter().map(ToString::to_string).collect())
    }
}

#[async_trait]
impl Bundler for CommandBundler {
    fn name(&self) -> &str {
        self.command.first().map_or("bundler", String::as_str)
    }

    async fn bundle(&self, root: &Path) -> Result<(), BuildError> {
        let Some((program, args)) = self.command.split_first() else {
            return Err(self.failure("no bundler command configured"));
        };

        tracing::info!(command = %self.command_line(), root = %root.display(), "running bundler");

        // Bundler output goes straight to the terminal
        let status = Command::new(program)
            .args(args)
            .current_dir(root)
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|e| self.failure(format!("failed to start: {}", e)))?;

        if !status.success() {
            let reason = match status.code() {
                Some(code) => format!("exited with status {}", code),
                None => "terminated by signal".to_string(),
            };
            return Err(self.failure(reason));
        }

        tracing::debug!(command = %self.command_line(), "bundler finished");
        Ok(())
    }
}
