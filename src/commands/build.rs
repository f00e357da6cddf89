//! @dose
//! purpose: Implements the build command. Validates the mode token and runs
//!     `<toolchain> build` (or `run` with --run) in the project root, adding `--release`
//!     for release mode.
//!
//! when-editing:
//!     - !An invalid mode skips the invocation entirely; no command is built from it
//!
//! flows:
//!     - Validate: mode token -> BuildMode, or record InvalidMode and stop
//!     - Execute: one child process; a non-zero exit is recorded as StepFailed

use crate::cli::BuildArgs;
use crate::commands::RunContext;
use crate::mode::{validate_build_mode, BuildMode};
use crate::runner::Invocation;
use std::path::Path;

/// Command line for building (or running) the project in `mode`
pub fn build_invocation(toolchain: &str, root: &Path, mode: BuildMode, run: bool) -> Invocation {
    Invocation::new(toolchain)
        .arg(if run { "run" } else { "build" })
        .args(mode.flags().iter().copied())
        .current_dir(root)
}

pub fn run_build(args: &BuildArgs, ctx: &mut RunContext<'_>) {
    let Some(mode) = validate_build_mode(&args.mode, "build", ctx.errors) else {
        return;
    };

    let invocation = build_invocation(&ctx.config.toolchain, ctx.root, mode, args.run);
    ctx.execute_step(&invocation);
}
