//! Run configuration
//!
//! Everything the release run reads from inputs and environment is captured
//! once into a [`RunConfig`] before any work starts.

use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

/// Release tool executable used when none is configured
pub const DEFAULT_TOOL: &str = "bit";

/// Fallback increment level passed to the release tool as `--increment`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Increment {
    /// Next major version
    Major,
    /// Next major pre-release
    Premajor,
    /// Next minor version
    Minor,
    /// Next minor pre-release
    Preminor,
    /// Next patch version
    Patch,
    /// Next patch pre-release
    Prepatch,
    /// Next pre-release of the current version
    Prerelease,
}

impl Increment {
    /// Name as understood by the release tool
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Premajor => "premajor",
            Self::Minor => "minor",
            Self::Preminor => "preminor",
            Self::Patch => "patch",
            Self::Prepatch => "prepatch",
            Self::Prerelease => "prerelease",
        }
    }
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable configuration for one release run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Workspace directory the release tool runs in
    pub ws_dir: PathBuf,
    /// Release tool executable
    pub tool: String,
    /// Append `--persist` to the tag command
    pub persist: bool,
    /// Append `--build` to the tag command (false when ripple builds remotely)
    pub build: bool,
    /// Release tool log level, rendered as `--log=<level>`
    pub log_level: Option<String>,
    /// Fallback increment when no version signal is found
    pub increment: Option<Increment>,
    /// Pre-release identifier for the fallback increment
    pub prerelease_id: Option<String>,
    /// Step for the fallback increment
    pub increment_by: Option<u32>,
    /// Fail when neither a signal nor a fallback increment is available
    pub strict: bool,
    /// Head commit ref used to find the merged PR by merge marker
    pub head_ref: Option<String>,
    /// Report commands without executing them or touching labels
    pub dry_run: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ws_dir: PathBuf::from("./"),
            tool: DEFAULT_TOOL.to_string(),
            persist: false,
            build: true,
            log_level: None,
            increment: None,
            prerelease_id: None,
            increment_by: None,
            strict: false,
            head_ref: None,
            dry_run: false,
        }
    }
}

impl RunConfig {
    /// Whether any fallback increment flag is configured
    pub const fn has_fallback_increment(&self) -> bool {
        self.increment.is_some() || self.prerelease_id.is_some() || self.increment_by.is_some()
    }
}
