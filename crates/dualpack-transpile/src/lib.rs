//! Source-to-source JavaScript transpilation using OXC.
//!
//! This crate turns one JavaScript or TypeScript file into transformed code
//! plus a source map document. It is the transpiler collaborator of the
//! `dualpack` build pipeline.
//!
//! # Example
//!
//! ```rust
//! use dualpack_transpile::{TranspileOptions, transform_source};
//! use std::path::Path;
//!
//! let out = transform_source(
//!     "export const add = (a, b) => a + b;",
//!     Path::new("index.js"),
//!     &TranspileOptions::default(),
//! )?;
//! assert!(out.code.contains("add"));
//! assert!(out.map.is_some());
//! # Ok::<(), dualpack_transpile::TranspileError>(())
//! ```

mod error;
mod options;
mod transform;
mod transpiler;

pub use error::{Result, TranspileError};
pub use options::{EsTarget, TranspileOptions};
pub use transform::{TranspileOutput, transform_source};
pub use transpiler::{OXC_VERSION, OxcTranspiler, Transpiler};
