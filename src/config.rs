//! @dose
//! purpose: Configuration file parsing for fluid-tool.toml. Selects the toolchain program,
//!     the packages directory scanned by `check`, and the optional extra check steps.
//!
//! when-editing:
//!     - !Config is loaded once at startup and passed through the call chain
//!     - Every field has a default so an empty or partial file is valid
//!
//! invariants:
//!     - Config::load returns default config if fluid-tool.toml doesn't exist
//!     - A broken config file is a warning, never a recorded run error
//!
//! gotchas:
//!     - packages_dir is relative to the project root, not the current directory

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional config file at the project root
pub const CONFIG_FILE: &str = "fluid-tool.toml";

/// Main configuration structure matching fluid-tool.toml
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// External program every step invokes
    pub toolchain: String,

    /// Directory whose immediate subdirectories are tested by `check`
    pub packages_dir: PathBuf,

    /// Extra steps for `check`
    pub check: CheckConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            toolchain: "cargo".to_string(),
            packages_dir: PathBuf::from("packages"),
            check: CheckConfig::default(),
        }
    }
}

/// Optional steps appended to `check` after the format check
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CheckConfig {
    /// Run clippy with warnings denied
    pub clippy: bool,

    /// Finish with a release build
    pub release_build: bool,
}

impl Config {
    /// Load configuration from fluid-tool.toml in the given root directory
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);

        if !config_path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                Self::default()
            }
        }
    }

    /// Absolute (root-joined) packages directory
    pub fn packages_path(&self, root: &Path) -> PathBuf {
        root.join(&self.packages_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.toolchain, "cargo");
        assert_eq!(config.packages_dir, PathBuf::from("packages"));
        assert!(!config.check.clippy);
        assert!(!config.check.release_build);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"
toolchain = "cargo-nightly"
packages_dir = "crates"

[check]
clippy = true
release_build = true
"#;
        fs::write(temp_dir.path().join(CONFIG_FILE), config_content).unwrap();

        let config = Config::load(temp_dir.path());
        assert_eq!(config.toolchain, "cargo-nightly");
        assert_eq!(config.packages_dir, PathBuf::from("crates"));
        assert!(config.check.clippy);
        assert!(config.check.release_build);
    }

    #[test]
    fn test_load_partial_config_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[check]\nclippy = true\n",
        )
        .unwrap();

        let config = Config::load(temp_dir.path());
        assert_eq!(config.toolchain, "cargo");
        assert_eq!(config.packages_dir, PathBuf::from("packages"));
        assert!(config.check.clippy);
        assert!(!config.check.release_build);
    }

    #[test]
    fn test_load_invalid_config_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE), "toolchain = [").unwrap();

        let config = Config::load(temp_dir.path());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_packages_path_is_root_relative() {
        let config = Config::default();
        assert_eq!(
            config.packages_path(Path::new("/work/fluid")),
            PathBuf::from("/work/fluid/packages")
        );
    }
}
