//! @dose
//! purpose: Implements the test command. Validates the mode token and runs
//!     `<toolchain> test` in the project root, adding `--release` for release mode.
//!
//! when-editing:
//!     - !An invalid mode skips the invocation entirely; no command is built from it
//!
//! invariants:
//!     - At most one child process per invocation

use crate::cli::TestArgs;
use crate::commands::RunContext;
use crate::mode::{validate_build_mode, BuildMode};
use crate::runner::Invocation;
use std::path::Path;

/// Command line for running the whole test suite in `mode`
pub fn test_invocation(toolchain: &str, root: &Path, mode: BuildMode) -> Invocation {
    Invocation::new(toolchain)
        .arg("test")
        .args(mode.flags().iter().copied())
        .current_dir(root)
}

pub fn run_test(args: &TestArgs, ctx: &mut RunContext<'_>) {
    let Some(mode) = validate_build_mode(&args.mode, "test", ctx.errors) else {
        return;
    };

    let invocation = test_invocation(&ctx.config.toolchain, ctx.root, mode);
    ctx.execute_step(&invocation);
}
