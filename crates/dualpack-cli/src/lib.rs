//! Dualpack CLI - bundle once, ship ESM and CJS with source maps.
//!
//! A build is a fixed pipeline: run the project's bundler, create the ESM
//! and CJS output directories, then transpile the bundler's two outputs
//! with oxc in parallel, each next to an external source map.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `build` and `schema` implementations
//! - [`config`] - layered configuration (CLI > env > file > defaults)
//! - [`pipeline`] - bundler, transpile step and orchestration
//! - [`error`] - error types with actionable messages
//! - [`logger`] - structured logging with tracing
//! - [`ui`] - size/duration formatting and the console reporter
//!
//! # Example
//!
//! ```rust,no_run
//! use dualpack_cli::{cli::BuildArgs, commands, ui};
//! use std::sync::Arc;
//!
//! # async fn run() -> dualpack_cli::Result<()> {
//! let reporter = Arc::new(ui::ConsoleReporter::new(ui::should_use_color(), false));
//! let report = commands::build_execute(BuildArgs::default(), reporter).await?;
//! println!("built in {:?}", report.elapsed);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod pipeline;
pub mod ui;

pub use error::{BuildError, CliError, ConfigError, Result};
