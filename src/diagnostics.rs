//! @dose
//! purpose: Error taxonomy and the run-wide error accumulator. Every failure during an
//!     invocation (bad mode token, failing child process) is recorded here instead of being
//!     propagated, printed as it happens, and summarized once at the end of the run.
//!
//! when-editing:
//!     - !Recording never aborts the run; callers keep going after `record`
//!     - !The accumulator is passed by &mut into each action, never stored globally
//!     - Usage errors never reach this module; clap exits before dispatch
//!
//! invariants:
//!     - Entries are kept in the order they were recorded
//!     - The summary line exists only when at least one error was recorded
//!
//! gotchas:
//!     - `quiet()` suppresses the immediate stderr echo; it exists for tests and embedding

use colored::Colorize;
use std::path::PathBuf;
use thiserror::Error;

/// A failure recorded during one run
#[derive(Debug, Error)]
pub enum ToolError {
    /// The `<RELEASE|DEBUG>` token did not name a known mode
    #[error("Expected the {action} type to be `release` or `debug` but found `{token}`")]
    InvalidMode { action: &'static str, token: String },

    /// A top-level step exited with a non-zero status
    #[error("Failed running `{command}`")]
    StepFailed { command: String },

    /// A per-package test run exited with a non-zero status
    #[error("Failed running `{command}` for {package}")]
    PackageFailed { command: String, package: String },

    /// The child process could not be started at all
    #[error("Failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The packages directory could not be listed
    #[error("Failed to read packages directory {}: {source}", .path.display())]
    PackagesDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// One entry of the packages directory could not be inspected
    #[error("Failed to read package entry: {source}")]
    PackageEntry {
        #[source]
        source: walkdir::Error,
    },
}

/// Ordered collection of the errors recorded during one invocation
#[derive(Debug)]
pub struct ErrorAccumulator {
    entries: Vec<ToolError>,
    echo: bool,
}

impl Default for ErrorAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorAccumulator {
    /// Accumulator that prints each error to stderr as it is recorded
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            echo: true,
        }
    }

    /// Accumulator that only collects
    pub fn quiet() -> Self {
        Self {
            entries: Vec::new(),
            echo: false,
        }
    }

    pub fn record(&mut self, error: ToolError) {
        tracing::debug!(error = %error, "recorded error");
        if self.echo {
            eprintln!("{} {}", "error:".red().bold(), error);
        }
        self.entries.push(error);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ToolError] {
        &self.entries
    }

    /// Rendered messages, in recording order
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// Final summary line, or None when nothing failed
    pub fn summary(&self) -> Option<String> {
        match self.entries.len() {
            0 => None,
            1 => Some("Aborting due to 1 error".to_string()),
            n => Some(format!("Aborting due to {} errors", n)),
        }
    }

    /// Print the summary line to stderr. Prints nothing on success.
    pub fn report(&self) {
        if let Some(summary) = self.summary() {
            eprintln!("\n{} {}", "error:".red().bold(), summary);
        }
    }
}
