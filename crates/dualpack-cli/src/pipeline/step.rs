//! Transpile one entry point and write code plus source map.

use crate::error::{BuildError, FsOperation, FsResultExt};
use crate::pipeline::paths::{BuildPaths, TranspileTarget, map_path};
use crate::pipeline::reporter::{FileSummary, Reporter};
use dualpack_transpile::{TranspileError, TranspileOptions, Transpiler};
use std::path::Path;

/// Transpile `target` and write `<output>` and `<output>.map`.
///
/// # Steps
///
/// 1. Run the transpiler on the input (source maps requested)
/// 2. Write code and map concurrently
/// 3. Stat both outputs concurrently
/// 4. Report one summary line
///
/// # Errors
///
/// `TransformFailed` if the transpiler yields no result, `Filesystem` if a
/// write or stat fails. Nothing is retried and nothing already written is
/// removed.
pub async fn transpile_file(
    transpiler: &dyn Transpiler,
    options: &TranspileOptions,
    reporter: &dyn Reporter,
    paths: &BuildPaths,
    target: &TranspileTarget,
) -> Result<FileSummary, BuildError> {
    let input = paths.resolve(&target.input);
    let output = paths.resolve(&target.output);
    let map_output = map_path(&output);

    let options = TranspileOptions {
        source_maps: true,
        ..*options
    };
    let transform_failed = |source: TranspileError| BuildError::TransformFailed {
        file: target.input.clone(),
        source,
    };

    let result = transpiler
        .transpile_file(&input, &options)
        .await
        .map_err(transform_failed)?;
    let map = result.map.ok_or_else(|| {
        transform_failed(TranspileError::MissingSourceMap {
            path: input.clone(),
        })
    })?;

    tokio::try_join!(write(&output, result.code), write(&map_output, map))?;
    let (code_size, map_size) = tokio::try_join!(file_size(&output), file_size(&map_output))?;

    let summary = FileSummary {
        source: target.input.clone(),
        destination: target.output.clone(),
        code_size,
        map_size,
    };
    tracing::debug!(
        source = %summary.source.display(),
        destination = %summary.destination.display(),
        code_size,
        map_size,
        "entry transpiled"
    );
    reporter.file_transpiled(&summary);

    Ok(summary)
}

async fn write(path: &Path, contents: String) -> Result<(), BuildError> {
    tokio::fs::write(path, contents)
        .await
        .fs_context(FsOperation::Write, path)
}

async fn file_size(path: &Path) -> Result<u64, BuildError> {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.len())
        .fs_context(FsOperation::Stat, path)
}
