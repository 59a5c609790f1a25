//! Platform services for GitHub and GitLab
//!
//! Provides a unified interface over the pull request / merge request
//! operations a release run needs.

mod detection;
mod factory;
mod github;
mod gitlab;

pub use detection::{detect_platform, parse_repo_info, parse_repo_slug};
pub use factory::create_platform_service;
pub use github::GitHubService;
pub use gitlab::GitLabService;

use crate::error::Result;
use crate::types::{Commit, LabelRemoval, PlatformConfig, PullRequest};
use async_trait::async_trait;

/// Platform service trait for PR/MR operations
///
/// This trait abstracts GitHub and GitLab operations, allowing the same
/// release logic to work with either platform.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// List closed PRs, most recently updated first
    async fn list_closed_prs(&self) -> Result<Vec<PullRequest>>;

    /// Get a single PR by number
    async fn get_pr(&self, number: u64) -> Result<PullRequest>;

    /// List the commits of a PR, oldest first
    async fn list_pr_commits(&self, number: u64) -> Result<Vec<Commit>>;

    /// Get a commit by ref (SHA, branch or `HEAD`)
    async fn get_commit(&self, reference: &str) -> Result<Commit>;

    /// Remove a label from a PR
    ///
    /// A label that is not on the PR yields [`LabelRemoval::NotFound`]
    /// rather than an error.
    async fn remove_label(&self, number: u64, name: &str) -> Result<LabelRemoval>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}
