//! @dose
//! purpose: Implements the check command, the pre-commit gate for the Fluid workspace. Runs
//!     the tests of every package under the packages directory, then checks formatting, then
//!     the optional clippy and release-build steps enabled in fluid-tool.toml.
//!
//! when-editing:
//!     - !Never stop at the first failure; every package and every step is attempted
//!     - !Package tests run with the package directory as working directory
//!
//! invariants:
//!     - Packages are visited in file-name order so output is deterministic
//!     - Only directories count as packages; stray files are skipped
//!     - Each failing package yields exactly one PackageFailed error
//!
//! gotchas:
//!     - An unreadable packages directory is one recorded error; formatting still runs
//!     - An unreadable entry inside it is recorded on its own; the other packages still run
//!
//! flows:
//!     - Packages: list subdirectories, `<toolchain> test` in each
//!     - Workspace: `fmt -- --check`, then clippy / release build if configured

use crate::commands::RunContext;
use crate::config::Config;
use crate::diagnostics::ToolError;
use crate::runner::Invocation;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A directory under the packages directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub path: PathBuf,
}

/// Immediate subdirectories of `dir`, sorted by name.
///
/// The outer error means `dir` itself could not be read. An entry that cannot be
/// inspected (a dangling symlink, say) is returned in place as an inner error so
/// the remaining packages are still listed.
pub fn list_packages(dir: &Path) -> Result<Vec<Result<Package, walkdir::Error>>, walkdir::Error> {
    let mut packages = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(err),
            Err(err) => {
                packages.push(Err(err));
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        packages.push(Ok(Package {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.into_path(),
        }));
    }

    Ok(packages)
}

/// Command line testing one package
pub fn package_test_invocation(toolchain: &str, package: &Package) -> Invocation {
    Invocation::new(toolchain)
        .arg("test")
        .current_dir(&package.path)
}

/// Workspace-wide steps that follow the package tests, in run order
pub fn workspace_steps(config: &Config, root: &Path) -> Vec<Invocation> {
    let toolchain = config.toolchain.as_str();
    let mut steps = vec![Invocation::new(toolchain)
        .args(["fmt", "--", "--check"])
        .current_dir(root)];

    if config.check.clippy {
        steps.push(
            Invocation::new(toolchain)
                .args(["clippy", "--", "-D", "warnings"])
                .current_dir(root),
        );
    }
    if config.check.release_build {
        steps.push(
            Invocation::new(toolchain)
                .args(["build", "--release"])
                .current_dir(root),
        );
    }

    steps
}

pub fn run_check(ctx: &mut RunContext<'_>) {
    let packages_dir = ctx.config.packages_path(ctx.root);

    match list_packages(&packages_dir) {
        Ok(packages) => {
            tracing::debug!(count = packages.len(), dir = %packages_dir.display(), "testing packages");
            for package in packages {
                let package = match package {
                    Ok(package) => package,
                    Err(source) => {
                        ctx.errors.record(ToolError::PackageEntry { source });
                        continue;
                    }
                };
                let invocation = package_test_invocation(&ctx.config.toolchain, &package);
                ctx.execute(&invocation, move |command| ToolError::PackageFailed {
                    command,
                    package: package.name,
                });
            }
        }
        Err(source) => ctx.errors.record(ToolError::PackagesDir {
            path: packages_dir,
            source,
        }),
    }

    for step in workspace_steps(ctx.config, ctx.root) {
        ctx.execute_step(&step);
    }
}
