//! @dose
//! purpose: Library crate root for fluid-tool, the developer helper that builds, tests, and
//!     checks the Fluid Lang workspace by driving the external toolchain. The binary in
//!     main.rs is a thin shell over these modules.
//!
//! when-editing:
//!     - !All public modules must be declared here with pub mod
//!     - Keep the re-export list organized by module
//!
//! invariants:
//!     - The library never exits the process; only main.rs decides the exit code

pub mod cli;
pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod logging;
pub mod mode;
pub mod runner;

// Re-export main types for convenience
pub use cli::{BuildArgs, Cli, Commands, TestArgs};
pub use commands::{dispatch, RunContext};
pub use config::Config;
pub use diagnostics::{ErrorAccumulator, ToolError};
pub use mode::BuildMode;
pub use runner::{CommandRunner, ExitOutcome, Invocation, SystemRunner};
