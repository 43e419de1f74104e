//! OXC transform pipeline.
//!
//! Parse → semantic analysis → transform (syntax lowering for the requested
//! target, TypeScript stripping) → codegen with an optional source map.

use crate::error::{Result, TranspileError};
use crate::options::TranspileOptions;
use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions, CodegenReturn, CommentOptions};
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;
use oxc_transformer::{TransformOptions, Transformer};
use std::path::Path;

/// Transformed code and its serialized source map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspileOutput {
    /// Generated JavaScript. May be empty for an empty input.
    pub code: String,
    /// Source map document as JSON, present when maps were requested
    pub map: Option<String>,
}

/// Transpile `source` as if it was read from `path`.
///
/// The path picks the source type (JS, JSX, TS, TSX) and is recorded as the
/// source in the generated map.
///
/// # Errors
///
/// Returns an error if the extension is not a JavaScript/TypeScript one, the
/// source does not parse, the target is unknown, or the transformer reports
/// errors.
pub fn transform_source(
    source: &str,
    path: &Path,
    options: &TranspileOptions,
) -> Result<TranspileOutput> {
    // Create OXC allocator (required for all OXC operations)
    let allocator = Allocator::default();

    let source_type = SourceType::from_path(path).map_err(|_| TranspileError::UnsupportedFile {
        path: path.to_path_buf(),
    })?;

    let parsed = Parser::new(&allocator, source, source_type).parse();
    if parsed.panicked || !parsed.errors.is_empty() {
        return Err(TranspileError::ParseFailed {
            path: path.to_path_buf(),
            messages: parsed.errors.iter().map(ToString::to_string).collect(),
        });
    }
    let mut program = parsed.program;

    let scoping = SemanticBuilder::new()
        .build(&program)
        .semantic
        .into_scoping();

    let transform_options = TransformOptions::from_target(options.target.as_str()).map_err(
        |reason| TranspileError::InvalidTarget {
            target: options.target.to_string(),
            reason: reason.to_string(),
        },
    )?;

    let transformed =
        Transformer::new(&allocator, path, &transform_options).build_with_scoping(scoping, &mut program);
    if !transformed.errors.is_empty() {
        return Err(TranspileError::TransformFailed {
            path: path.to_path_buf(),
            messages: transformed.errors.iter().map(ToString::to_string).collect(),
        });
    }

    let codegen_options = CodegenOptions {
        comments: if options.comments {
            CommentOptions::default()
        } else {
            CommentOptions::disabled()
        },
        source_map_path: options.source_maps.then(|| path.to_path_buf()),
        ..CodegenOptions::default()
    };
    let CodegenReturn { code, map, .. } = Codegen::new().with_options(codegen_options).build(&program);

    let map = map.map(|map| map.to_json_string());
    if options.source_maps && map.is_none() {
        return Err(TranspileError::MissingSourceMap {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        target = %options.target,
        bytes = code.len(),
        "transformed source"
    );

    Ok(TranspileOutput { code, map })
}
