//! Command implementations for the dualpack CLI.
//!
//! - [`build`] - Bundle, then transpile the ESM and CJS entry points
//! - [`schema`] - Print the config file JSON Schema
//!
//! Each command provides an `execute` function that takes the parsed
//! command arguments and returns a Result.

pub mod build;
pub mod schema;

pub use build::execute as build_execute;
pub use schema::execute as schema_execute;
