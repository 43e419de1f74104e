//! Input and output locations of the two transpiled entry points.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Bundler-produced ESM entry that gets transpiled.
pub const DEFAULT_ESM_INPUT: &str = "temp/index.es.js";
/// Bundler-produced CJS entry that gets transpiled.
pub const DEFAULT_CJS_INPUT: &str = "temp/index.cjs.js";
/// Transpiled ESM entry.
pub const DEFAULT_ESM_OUTPUT: &str = "dist/esm/index.esm.js";
/// Transpiled CJS entry.
pub const DEFAULT_CJS_OUTPUT: &str = "dist/cjs/index.cjs.js";

/// One source file and where its transpiled form goes.
///
/// Paths are kept as configured (usually relative to the project root) so
/// they read naturally in build output; [`BuildPaths::resolve`] anchors them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspileTarget {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl TranspileTarget {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Source map written next to the output: `<output>.map`.
    pub fn map_output(&self) -> PathBuf {
        map_path(&self.output)
    }
}

/// Append `.map` to a file path without touching its existing extension.
pub fn map_path(path: &Path) -> PathBuf {
    let mut os: OsString = path.as_os_str().to_owned();
    os.push(".map");
    PathBuf::from(os)
}

/// Every location the build touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPaths {
    /// Project root; the bundler runs here and relative paths resolve here
    pub root: PathBuf,
    pub esm: TranspileTarget,
    pub cjs: TranspileTarget,
}

impl BuildPaths {
    /// Default layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            esm: TranspileTarget::new(DEFAULT_ESM_INPUT, DEFAULT_ESM_OUTPUT),
            cjs: TranspileTarget::new(DEFAULT_CJS_INPUT, DEFAULT_CJS_OUTPUT),
        }
    }

    pub fn with_esm(mut self, esm: TranspileTarget) -> Self {
        self.esm = esm;
        self
    }

    pub fn with_cjs(mut self, cjs: TranspileTarget) -> Self {
        self.cjs = cjs;
        self
    }

    /// Anchor `path` at the project root. Absolute paths are returned as is.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    /// Directories that must exist before outputs are written.
    pub fn output_dirs(&self) -> [PathBuf; 2] {
        [
            self.output_dir(&self.esm),
            self.output_dir(&self.cjs),
        ]
    }

    fn output_dir(&self, target: &TranspileTarget) -> PathBuf {
        let output = self.resolve(&target.output);
        output
            .parent()
            .map_or_else(|| self.root.clone(), Path::to_path_buf)
    }
}
