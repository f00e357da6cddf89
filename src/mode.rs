//! @dose
//! purpose: Build mode selection for the build and test actions. Converts the user supplied
//!     `<RELEASE|DEBUG>` token into a BuildMode, case-insensitively.
//!
//! when-editing:
//!     - !The token is validated here, not by clap, so a bad token is a recorded error
//!       rather than a usage error
//!     - Error messages must quote the token exactly as the user typed it
//!
//! invariants:
//!     - Exactly two modes exist: Release and Debug
//!     - Release is the only mode that adds the `--release` flag

use crate::diagnostics::{ErrorAccumulator, ToolError};
use std::fmt;
use std::str::FromStr;

/// Optimization profile passed through to the toolchain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Release,
    Debug,
}

impl BuildMode {
    /// Toolchain flags selecting this mode
    pub fn flags(self) -> &'static [&'static str] {
        match self {
            BuildMode::Release => &["--release"],
            BuildMode::Debug => &[],
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Release => write!(f, "release"),
            BuildMode::Debug => write!(f, "debug"),
        }
    }
}

/// Returned when a token is neither `release` nor `debug`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl FromStr for BuildMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "release" => Ok(BuildMode::Release),
            "debug" => Ok(BuildMode::Debug),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

/// Validate `token` for `action` ("build" or "test").
///
/// On mismatch the error is recorded and `None` is returned; the caller skips
/// its invocation but the run carries on.
pub fn validate_build_mode(
    token: &str,
    action: &'static str,
    errors: &mut ErrorAccumulator,
) -> Option<BuildMode> {
    match token.parse::<BuildMode>() {
        Ok(mode) => Some(mode),
        Err(UnknownMode(token)) => {
            errors.record(ToolError::InvalidMode { action, token });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_casings() {
        for token in ["release", "Release", "RELEASE"] {
            assert_eq!(token.parse::<BuildMode>(), Ok(BuildMode::Release));
        }
        for token in ["debug", "Debug", "DEBUG", "dEbUg"] {
            assert_eq!(token.parse::<BuildMode>(), Ok(BuildMode::Debug));
        }
    }

    #[test]
    fn test_parse_rejects_other_tokens() {
        for token in ["", "rel", "releases", "profile", " debug"] {
            assert_eq!(
                token.parse::<BuildMode>(),
                Err(UnknownMode(token.to_string()))
            );
        }
    }

    #[test]
    fn test_validate_records_one_error_with_verbatim_token() {
        let mut errors = ErrorAccumulator::quiet();
        let mode = validate_build_mode("Fast", "build", &mut errors);

        assert_eq!(mode, None);
        assert_eq!(errors.len(), 1);
        let message = errors.entries()[0].to_string();
        assert!(message.contains("`Fast`"), "Got: {}", message);
        assert!(message.contains("build type"), "Got: {}", message);
    }

    #[test]
    fn test_validate_success_records_nothing() {
        let mut errors = ErrorAccumulator::quiet();
        assert_eq!(
            validate_build_mode("RELEASE", "test", &mut errors),
            Some(BuildMode::Release)
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_flags() {
        assert_eq!(BuildMode::Release.flags(), &["--release"]);
        assert!(BuildMode::Debug.flags().is_empty());
        assert_eq!(BuildMode::Debug.to_string(), "debug");
    }
}
