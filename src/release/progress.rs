//! Progress callback trait for interface-agnostic updates
//!
//! The CLI prints these; tests use [`NoopProgress`].

use crate::release::command::CommandSpec;
use crate::release::overrides::ComponentOverride;
use crate::release::resolve::Resolution;
use crate::types::{LabelRemoval, PullRequest};
use async_trait::async_trait;
use std::fmt;

/// Release run phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Finding the last merged pull request
    LocatingPr,
    /// Fetching PR commits for the fallback message
    FetchingCommits,
    /// Resolving the global signal and overrides
    Resolving,
    /// Running the tag command
    Tagging,
    /// Running the export command
    Exporting,
    /// Removing consumed labels
    CleaningUp,
    /// Run complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::LocatingPr => "Locating merged pull request",
            Self::FetchingCommits => "Fetching commits",
            Self::Resolving => "Resolving version",
            Self::Tagging => "Tagging",
            Self::Exporting => "Exporting",
            Self::CleaningUp => "Removing consumed labels",
            Self::Complete => "Done",
        };
        f.write_str(s)
    }
}

/// Progress callback trait
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called once the merged PR is known (`None` when there is none)
    async fn on_pr_located(&self, pr: Option<&PullRequest>);

    /// Called with the resolved global signal and overrides
    async fn on_resolved(&self, resolution: Option<&Resolution>, overrides: &[ComponentOverride]);

    /// Called with each command before it runs (or instead of running it
    /// in a dry run)
    async fn on_command(&self, command: &CommandSpec);

    /// Called for each consumed label during cleanup
    async fn on_label_removed(&self, name: &str, outcome: LabelRemoval);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_pr_located(&self, _pr: Option<&PullRequest>) {}
    async fn on_resolved(&self, _resolution: Option<&Resolution>, _overrides: &[ComponentOverride]) {}
    async fn on_command(&self, _command: &CommandSpec) {}
    async fn on_label_removed(&self, _name: &str, _outcome: LabelRemoval) {}
    async fn on_message(&self, _message: &str) {}
}
