//! @dose
//! purpose: This module defines the command-line interface for fluid-tool using the clap derive
//!     macros. It specifies the build, test, and check commands and their arguments.
//!
//! when-editing:
//!     - !Each command with arguments gets its own Args struct in the Commands enum
//!     - !Global flags (root, verbose) are defined on Cli and propagate to all subcommands
//!     - The mode token is a plain String on purpose; see mode.rs for validation
//!
//! invariants:
//!     - Malformed syntax and unknown subcommands are rejected by clap before dispatch
//!     - A missing subcommand parses successfully (command = None) and shows help
//!
//! do-not:
//!     - Never turn the mode into a clap ValueEnum; a bad mode must be a recorded error
//!     - Never give a global flag the short `-r`; build uses it for --run
//!
//! gotchas:
//!     - The --root flag can be placed before or after the subcommand due to global = true

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fluid-tool")]
#[command(
    author,
    version,
    about = "A small helper that builds, tests, and checks Fluid Lang"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (defaults to current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Verbose output (logs every command line that is run)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build Fluid Lang
    Build(BuildArgs),

    /// Test Fluid Lang
    Test(TestArgs),

    /// Run every package's tests, then check formatting
    Check,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Build mode: release or debug (case-insensitive)
    #[arg(value_name = "RELEASE|DEBUG")]
    pub mode: String,

    /// Run the compiler after building it
    #[arg(short, long)]
    pub run: bool,
}

#[derive(Args, Debug)]
pub struct TestArgs {
    /// Test mode: release or debug (case-insensitive)
    #[arg(value_name = "RELEASE|DEBUG")]
    pub mode: String,
}
