//! @dose
//! purpose: This is the CLI entry point for fluid-tool. It parses command-line arguments using
//!     clap, determines the project root directory, and dispatches to the selected action
//!     (build, test, or check), then reports the accumulated errors.
//!
//! when-editing:
//!     - !All actions are imported from the fluid_tool crate
//!     - !The root directory defaults to current working directory if not specified
//!
//! invariants:
//!     - At most one action is executed per invocation
//!     - The process exits with 0 when no error was recorded, 1 otherwise
//!     - Usage errors exit through clap (code 2) before anything is recorded
//!
//! do-not:
//!     - Never add business logic here - delegate to command modules

use anyhow::Context;
use clap::{CommandFactory, Parser};
use fluid_tool::cli::Cli;
use fluid_tool::commands::{dispatch, RunContext};
use fluid_tool::config::Config;
use fluid_tool::diagnostics::ErrorAccumulator;
use fluid_tool::logging;
use fluid_tool::runner::SystemRunner;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command()
            .print_help()
            .context("Failed to print help")?;
        return Ok(ExitCode::SUCCESS);
    };

    // Determine root directory
    let root = match cli.root {
        Some(root) => root,
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let config = Config::load(&root);
    tracing::debug!(root = %root.display(), toolchain = %config.toolchain, "loaded configuration");

    let mut errors = ErrorAccumulator::new();
    let mut runner = SystemRunner;
    let mut ctx = RunContext {
        root: &root,
        config: &config,
        runner: &mut runner,
        errors: &mut errors,
    };
    dispatch(&command, &mut ctx);

    errors.report();
    if errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
