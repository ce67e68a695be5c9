//! projman CLI - project skeletons from declarative templates
//!
//! This is the main entry point for the projman command-line interface.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

/// Exit code for configuration and template-load failures
const EXIT_CONFIG: u8 = 2;

/// Exit code for all other failures
const EXIT_FAILURE: u8 = 1;

fn main() -> ExitCode {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    // Run command
    let result = match cli.command {
        Commands::Create(args) => commands::create::run(args),
        Commands::List(args) => commands::list::run(args),
        Commands::Delete(args) => commands::delete::run(args),
        Commands::Types(args) => commands::types::run(args),
        Commands::Describe(args) => commands::describe::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&format!("{err:#}"));
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Map an error to the process exit code.
///
/// Configuration and template-load problems get a distinct code so wrapper
/// scripts can tell a broken setup apart from a failed operation.
fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(domain) = err.downcast_ref::<projman_projects::Error>() {
        if domain.is_config() {
            return EXIT_CONFIG;
        }
        return EXIT_FAILURE;
    }
    if err.downcast_ref::<projman_core::Error>().is_some() {
        return EXIT_CONFIG;
    }
    EXIT_FAILURE
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
