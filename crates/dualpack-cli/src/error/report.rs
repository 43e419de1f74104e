//! Miette diagnostic conversion for CLI errors.

use crate::error::{BuildError, CliError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Build(e) => build_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        CliError::Json(e) => miette::miette!("JSON error: {}", e),
    }
}

/// Convert BuildError to miette Report
///
/// Transform failures keep the transpiler's own diagnostic so its code and
/// help text reach the terminal.
pub fn build_error_to_miette(err: BuildError) -> Report {
    match err {
        BuildError::TransformFailed { file, source } => {
            Report::new(source).wrap_err(format!("Transform failed for {}", file.display()))
        }
        BuildError::BundlerFailed { command, reason } => {
            miette::miette!(
                help = "Run the bundler command directly to see its full output",
                "Bundler `{}` failed: {}",
                command,
                reason
            )
        }
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dualpack_transpile::TranspileError;
    use std::path::PathBuf;

    #[test]
    fn test_transform_failure_keeps_cause() {
        let report = build_error_to_miette(BuildError::TransformFailed {
            file: PathBuf::from("temp/index.es.js"),
            source: TranspileError::ParseFailed {
                path: PathBuf::from("temp/index.es.js"),
                messages: vec!["Unexpected token".to_string()],
            },
        });

        assert_eq!(report.to_string(), "Transform failed for temp/index.es.js");
        let chain: Vec<String> = report.chain().map(ToString::to_string).collect();
        assert!(chain.iter().any(|m| m.contains("Unexpected token")));
    }

    #[test]
    fn test_json_error_message() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let report = cli_error_to_miette(CliError::from(json_err));
        assert!(report.to_string().starts_with("JSON error: "));
    }

    #[test]
    fn test_bundler_failure_message() {
        let report = cli_error_to_miette(CliError::Build(BuildError::BundlerFailed {
            command: "npx vite build".to_string(),
            reason: "exited with status 2".to_string(),
        }));
        assert_eq!(
            report.to_string(),
            "Bundler `npx vite build` failed: exited with status 2"
        );
    }
}
