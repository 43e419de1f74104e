//! Build orchestration: bundle, then transpile both entry points.

use crate::error::{BuildError, FsOperation, FsResultExt};
use crate::pipeline::bundler::Bundler;
use crate::pipeline::paths::BuildPaths;
use crate::pipeline::reporter::{FileSummary, Reporter};
use crate::pipeline::step::transpile_file;
use crate::ui::format_duration;
use dualpack_transpile::{TranspileOptions, Transpiler};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::Instrument;

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub esm: FileSummary,
    pub cjs: FileSummary,
    /// Wall-clock time from start to finish, bundler included
    pub elapsed: Duration,
}

/// Runs one complete build.
///
/// The build is all-or-nothing: the first failure from the bundler, directory
/// creation, or either transpile step is returned and the success banner is
/// never reported.
pub struct BuildOrchestrator {
    paths: BuildPaths,
    bundler: Arc<dyn Bundler>,
    transpiler: Arc<dyn Transpiler>,
    options: TranspileOptions,
    reporter: Arc<dyn Reporter>,
}

impl std::fmt::Debug for BuildOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildOrchestrator")
            .field("paths", &self.paths)
            .field("bundler", &self.bundler)
            .field("transpiler", &self.transpiler)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl BuildOrchestrator {
    pub fn new(
        paths: BuildPaths,
        bundler: Arc<dyn Bundler>,
        transpiler: Arc<dyn Transpiler>,
        options: TranspileOptions,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            paths,
            bundler,
            transpiler,
            options,
            reporter,
        }
    }

    /// Execute the build.
    ///
    /// # Build Process
    ///
    /// 1. Run the bundler to completion
    /// 2. Create both output directories (concurrently)
    /// 3. Announce the transpiler
    /// 4. Transpile the ESM and CJS entries (concurrently, fail fast)
    /// 5. Report total elapsed time
    pub async fn run(&self) -> Result<BuildReport, BuildError> {
        let start = Instant::now();

        let bundler = self.bundler.name();
        self.bundler
            .bundle(&self.paths.root)
            .instrument(tracing::info_span!("bundle", bundler))
            .await?;
        self.ensure_output_dirs().await?;

        self.reporter
            .transpile_started(self.transpiler.name(), self.transpiler.version());

        let (esm, cjs) = tokio::try_join!(
            transpile_file(
                self.transpiler.as_ref(),
                &self.options,
                self.reporter.as_ref(),
                &self.paths,
                &self.paths.esm,
            ),
            transpile_file(
                self.transpiler.as_ref(),
                &self.options,
                self.reporter.as_ref(),
                &self.paths,
                &self.paths.cjs,
            ),
        )?;

        let elapsed = start.elapsed();
        tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "build finished");
        self.reporter.build_succeeded(&format_duration(elapsed));

        Ok(BuildReport { esm, cjs, elapsed })
    }

    /// Create the ESM and CJS output directories, parents included.
    ///
    /// Idempotent: existing directories are left alone.
    pub async fn ensure_output_dirs(&self) -> Result<(), BuildError> {
        let [esm_dir, cjs_dir] = self.paths.output_dirs();
        tokio::try_join!(create_dir_all(&esm_dir), create_dir_all(&cjs_dir))?;
        Ok(())
    }
}

async fn create_dir_all(dir: &Path) -> Result<(), BuildError> {
    tokio::fs::create_dir_all(dir)
        .await
        .fs_context(FsOperation::CreateDir, dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dualpack_transpile::{TranspileOutput, Transpiler};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    /// Counts how often it is asked for its name and bundles nothing.
    #[derive(Debug, Default)]
    struct NamedBundler {
        name_lookups: AtomicUsize,
    }

    #[async_trait]
    impl Bundler for NamedBundler {
        fn name(&self) -> &str {
            self.name_lookups.fetch_add(1, Ordering::SeqCst);
            "named"
        }

        async fn bundle(&self, _root: &Path) -> Result<(), BuildError> {
            Ok(())
        }
    }

    #[derive(Debug)]
    struct EchoTranspiler;

    #[async_trait]
    impl Transpiler for EchoTranspiler {
        fn name(&self) -> &str {
            "echo"
        }

        fn version(&self) -> &str {
            "1.0.0"
        }

        async fn transpile_file(
            &self,
            path: &Path,
            _options: &TranspileOptions,
        ) -> dualpack_transpile::Result<TranspileOutput> {
            Ok(TranspileOutput {
                code: format!("// {}\n", path.display()),
                map: Some("{}".to_string()),
            })
        }
    }

    #[derive(Default)]
    struct Lines(Mutex<Vec<String>>);

    impl Reporter for Lines {
        fn transpile_started(&self, tool: &str, version: &str) {
            self.0.lock().unwrap().push(format!("{tool} v{version}"));
        }

        fn file_transpiled(&self, summary: &FileSummary) {
            self.0
                .lock()
                .unwrap()
                .push(summary.destination.display().to_string());
        }

        fn build_succeeded(&self, _duration: &str) {
            self.0.lock().unwrap().push("done".to_string());
        }
    }

    #[tokio::test]
    async fn test_run_labels_bundle_step_with_bundler_name() {
        let temp = TempDir::new().unwrap();
        let bundler = Arc::new(NamedBundler::default());
        let reporter = Arc::new(Lines::default());

        let orchestrator = BuildOrchestrator::new(
            BuildPaths::new(temp.path()),
            bundler.clone(),
            Arc::new(EchoTranspiler),
            TranspileOptions::default(),
            reporter.clone(),
        );
        let report = orchestrator.run().await.unwrap();

        assert!(bundler.name_lookups.load(Ordering::SeqCst) >= 1);
        assert_eq!(report.esm.map_size, 2);

        let lines = reporter.0.lock().unwrap().clone();
        assert_eq!(lines.first().map(String::as_str), Some("echo v1.0.0"));
        assert_eq!(lines.last().map(String::as_str), Some("done"));
        assert_eq!(lines.len(), 4);
    }
}
