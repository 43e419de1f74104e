use clap::{Args, Subcommand};
use dualpack_transpile::EsTarget;
use std::path::PathBuf;

use crate::cli::validation::{parse_bundler_command, parse_target};

/// Available dualpack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bundle, then transpile both entry points
    ///
    /// Runs the bundler to completion, creates the ESM and CJS output
    /// directories, and transpiles both bundler outputs concurrently.
    Build(BuildArgs),

    /// Print the JSON Schema for dualpack.config.json
    Schema,
}

/// Arguments for the build command
///
/// Every field is optional; unset fields fall through to the environment,
/// the config file, and finally the built-in defaults.
#[derive(Args, Debug, Default, Clone)]
pub struct BuildArgs {
    /// Path to the config file
    ///
    /// Defaults to `dualpack.config.json` in the project root when present.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project root
    ///
    /// The bundler runs here and relative input/output paths resolve here.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// ECMAScript target for the transpiled output
    ///
    /// One of es2015..es2022 or esnext. Defaults to es2015.
    #[arg(short, long, value_name = "TARGET", value_parser = parse_target)]
    pub target: Option<EsTarget>,

    /// Bundler command line, split on whitespace
    ///
    /// Examples:
    ///   dualpack build --bundler "npx vite build"
    ///   dualpack build --bundler "pnpm rollup -c"
    #[arg(short, long, value_name = "COMMAND", value_parser = parse_bundler_command)]
    pub bundler: Option<String>,

    /// Strip comments from the transpiled output
    #[arg(long)]
    pub no_comments: bool,
}
