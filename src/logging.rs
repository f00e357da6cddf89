//! @dose
//! purpose: Stderr tracing setup for fluid-tool. `--verbose` raises the default level to
//!     debug so every spawned command line is logged; `RUST_LOG` overrides both.
//!
//! when-editing:
//!     - !Logs go to stderr; stdout stays reserved for help text and child output
//!
//! invariants:
//!     - Only the first init installs a subscriber; later calls are no-ops

use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity
pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "fluid_tool=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
///
/// Returns false when a subscriber was already installed.
pub fn init(verbose: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)));

    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("tracing subscriber already installed: {}", e);
            false
        }
    }
}
