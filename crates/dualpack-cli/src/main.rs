//! Dualpack CLI entry point: argument parsing, logging initialization and
//! command dispatch.

use clap::Parser;
use dualpack_cli::{cli, commands, error, logger, ui};
use miette::Result;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    let color = !args.no_color && ui::should_use_color();

    let result = match args.command {
        cli::Command::Build(build_args) => {
            let reporter = Arc::new(ui::ConsoleReporter::new(color, args.quiet));
            commands::build_execute(build_args, reporter).await.map(|_| ())
        }
        cli::Command::Schema => commands::schema_execute(),
    };

    result.map_err(error::cli_error_to_miette)
}
