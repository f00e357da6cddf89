//! @dose
//! purpose: Action dispatch. Routes the parsed subcommand to its action and provides the
//!     shared step executor that turns a failing child into a recorded error.
//!
//! when-editing:
//!     - !Dispatch is an exhaustive match on Commands; adding a subcommand must add an arm
//!     - !Actions never return errors; everything goes through RunContext::errors
//!
//! invariants:
//!     - Steps run strictly one after another, in the order the action issues them
//!     - A failed step never prevents the next step from running

mod build;
mod check;
mod test_run;

pub use build::*;
pub use check::*;
pub use test_run::*;

use crate::cli::Commands;
use crate::config::Config;
use crate::diagnostics::{ErrorAccumulator, ToolError};
use crate::runner::{CommandRunner, Invocation};
use std::path::Path;

/// Everything an action needs for one run
pub struct RunContext<'a> {
    pub root: &'a Path,
    pub config: &'a Config,
    pub runner: &'a mut dyn CommandRunner,
    pub errors: &'a mut ErrorAccumulator,
}

impl RunContext<'_> {
    /// Run one step to completion. Returns true when it exited successfully.
    ///
    /// A spawn failure is recorded as ToolError::Spawn; a non-zero exit is recorded
    /// with the error built by `on_failure` from the rendered command line.
    pub fn execute<F>(&mut self, invocation: &Invocation, on_failure: F) -> bool
    where
        F: FnOnce(String) -> ToolError,
    {
        match self.runner.run(invocation) {
            Ok(outcome) if outcome.success() => true,
            Ok(_) => {
                self.errors.record(on_failure(invocation.to_string()));
                false
            }
            Err(source) => {
                self.errors.record(ToolError::Spawn {
                    command: invocation.to_string(),
                    source,
                });
                false
            }
        }
    }

    /// Run a top-level step, recording ToolError::StepFailed on failure
    pub fn execute_step(&mut self, invocation: &Invocation) -> bool {
        self.execute(invocation, |command| ToolError::StepFailed { command })
    }
}

/// Run the action selected on the command line
pub fn dispatch(command: &Commands, ctx: &mut RunContext<'_>) {
    match command {
        Commands::Build(args) => run_build(args, ctx),
        Commands::Test(args) => run_test(args, ctx),
        Commands::Check => run_check(ctx),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::runner::{CommandRunner, ExitOutcome, Invocation};
    use std::io;

    type Predicate = Box<dyn Fn(&Invocation) -> bool>;

    /// Records every invocation; fails the ones matching `fail_when`
    pub struct FakeRunner {
        pub calls: Vec<Invocation>,
        fail_when: Predicate,
        unspawnable: bool,
    }

    impl FakeRunner {
        pub fn succeeding() -> Self {
            Self::failing_when(|_| false)
        }

        pub fn failing_when(pred: impl Fn(&Invocation) -> bool + 'static) -> Self {
            Self {
                calls: Vec::new(),
                fail_when: Box::new(pred),
                unspawnable: false,
            }
        }

        pub fn unspawnable() -> Self {
            Self {
                unspawnable: true,
                ..Self::succeeding()
            }
        }

        pub fn rendered(&self) -> Vec<String> {
            self.calls.iter().map(ToString::to_string).collect()
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&mut self, invocation: &Invocation) -> io::Result<ExitOutcome> {
            self.calls.push(invocation.clone());
            if self.unspawnable {
                return Err(io::Error::new(io::ErrorKind::NotFound, "program not found"));
            }
            let code = if (self.fail_when)(invocation) { 1 } else { 0 };
            Ok(ExitOutcome { code: Some(code) })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::FakeRunner;
    use super::*;
    use crate::cli::{BuildArgs, TestArgs};
    use tempfile::TempDir;

    #[test]
    fn test_execute_records_step_failure() {
        let config = Config::default();
        let mut runner = FakeRunner::failing_when(|_| true);
        let mut errors = ErrorAccumulator::quiet();
        let mut ctx = RunContext {
            root: Path::new("."),
            config: &config,
            runner: &mut runner,
            errors: &mut errors,
        };

        let ok = ctx.execute_step(&Invocation::new("cargo").arg("build"));
        assert!(!ok);
        assert_eq!(errors.messages(), vec!["Failed running `cargo build`"]);
    }

    #[test]
    fn test_execute_records_spawn_failure() {
        let config = Config::default();
        let mut runner = FakeRunner::unspawnable();
        let mut errors = ErrorAccumulator::quiet();
        let mut ctx = RunContext {
            root: Path::new("."),
            config: &config,
            runner: &mut runner,
            errors: &mut errors,
        };

        assert!(!ctx.execute_step(&Invocation::new("cargo").arg("test")));
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors.entries()[0], ToolError::Spawn { .. }));
    }

    #[test]
    fn test_dispatch_routes_each_command() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::default();
        let mut runner = FakeRunner::succeeding();
        let mut errors = ErrorAccumulator::quiet();

        let commands = [
            Commands::Build(BuildArgs {
                mode: "release".to_string(),
                run: false,
            }),
            Commands::Test(TestArgs {
                mode: "debug".to_string(),
            }),
        ];
        for command in &commands {
            let mut ctx = RunContext {
                root: temp_dir.path(),
                config: &config,
                runner: &mut runner,
                errors: &mut errors,
            };
            dispatch(command, &mut ctx);
        }

        assert_eq!(
            runner.rendered(),
            vec!["cargo build --release", "cargo test"]
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_dispatch_check_without_packages_dir_still_checks_formatting() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::default();
        let mut runner = FakeRunner::succeeding();
        let mut errors = ErrorAccumulator::quiet();
        let mut ctx = RunContext {
            root: temp_dir.path(),
            config: &config,
            runner: &mut runner,
            errors: &mut errors,
        };

        dispatch(&Commands::Check, &mut ctx);

        assert_eq!(runner.rendered(), vec!["cargo fmt -- --check"]);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors.entries()[0], ToolError::PackagesDir { .. }));
    }
}
