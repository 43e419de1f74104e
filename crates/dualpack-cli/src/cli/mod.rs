//! Command-line interface definition for dualpack.
//!
//! # Command Structure
//!
//! - `dualpack build` - Run the bundler, then transpile the ESM and CJS outputs
//! - `dualpack schema` - Print the JSON Schema of `dualpack.config.json`

mod commands;
mod tests;
mod validation;

use clap::Parser;

pub use commands::{BuildArgs, Command};
pub use validation::{parse_bundler_command, parse_target};

/// Dualpack - bundle once, ship ESM and CJS with source maps
#[derive(Parser, Debug)]
#[command(
    name = "dualpack",
    version,
    about = "Bundle once, ship ESM and CJS with source maps",
    long_about = "Dualpack runs your bundler, then transpiles its ESM and CJS outputs\n\
                  down to a fixed ECMAScript target with oxc, writing each file next to\n\
                  an external source map."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Per-file summaries and the success banner are not printed.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
