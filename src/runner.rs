//! @dose
//! purpose: External command lines and the seam that executes them. Actions build an
//!     Invocation, hand it to a CommandRunner, and look only at the exit outcome.
//!
//! when-editing:
//!     - !Children inherit stdio; nothing is captured or parsed
//!     - Add new runners by implementing CommandRunner, not by branching in actions
//!
//! invariants:
//!     - Runs are synchronous: `run` returns only after the child exits
//!     - Invocation's Display is the exact command line used in error messages
//!
//! gotchas:
//!     - A child killed by a signal has no exit code; it counts as a failure

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A single external command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    #[cfg(test)]
    pub(crate) fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How a finished child exited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    /// None when the child was terminated by a signal
    pub code: Option<i32>,
}

impl ExitOutcome {
    pub fn success(self) -> bool {
        self.code == Some(0)
    }
}

/// Executes invocations to completion
pub trait CommandRunner {
    fn run(&mut self, invocation: &Invocation) -> io::Result<ExitOutcome>;
}

/// Runs invocations as real child processes
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> io::Result<ExitOutcome> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(ref dir) = invocation.cwd {
            command.current_dir(dir);
        }

        tracing::debug!(command = %invocation, cwd = ?invocation.cwd, "spawning");
        let status = command.status()?;
        tracing::debug!(command = %invocation, code = ?status.code(), "finished");

        Ok(ExitOutcome {
            code: status.code(),
        })
    }
}
