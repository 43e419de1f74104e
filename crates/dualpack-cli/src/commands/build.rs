//! Build command implementation.

use crate::cli::BuildArgs;
use crate::config::DualpackConfig;
use crate::error::Result;
use crate::pipeline::{BuildOrchestrator, BuildReport, CommandBundler, Reporter};
use dualpack_transpile::OxcTranspiler;
use std::sync::Arc;

/// Execute the build command.
///
/// # Build Process
///
/// 1. Load and validate configuration (CLI > Env > File > Defaults)
/// 2. Wire the bundler command and the oxc transpiler into the orchestrator
/// 3. Run the build, reporting progress through `reporter`
///
/// # Errors
///
/// Returns errors for invalid configuration and for the first failure of
/// the bundler, directory creation, or either transpile step.
pub async fn execute(args: BuildArgs, reporter: Arc<dyn Reporter>) -> Result<BuildReport> {
    let config = DualpackConfig::load(&args)?;
    config.validate()?;
    tracing::debug!(?config, "resolved configuration");

    let orchestrator = BuildOrchestrator::new(
        config.build_paths(),
        Arc::new(CommandBundler::new(config.bundler.command.clone())),
        Arc::new(OxcTranspiler::new()),
        config.transpile_options(),
        reporter,
    );

    let report = orchestrator.run().await?;
    Ok(report)
}
