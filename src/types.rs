//! Core types for ws-release

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A label attached to a pull request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Label {
    /// Label name
    pub name: String,
    /// Label description (carries the component id for override labels)
    pub description: Option<String>,
}

/// A pull request / merge request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR/MR number
    pub number: u64,
    /// PR/MR title
    pub title: String,
    /// Labels in the order the platform returned them
    pub labels: Vec<Label>,
    /// When the PR was merged (None for closed-unmerged)
    pub merged_at: Option<DateTime<Utc>>,
}

/// A commit on the hosting platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commit {
    /// Commit SHA
    pub sha: String,
    /// Full commit message
    pub message: String,
}

/// Outcome of a label removal request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRemoval {
    /// The label was on the PR and has been removed
    Removed,
    /// The label was not on the PR (or already gone)
    NotFound,
}

/// Detected platform type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    /// GitHub or GitHub Enterprise
    GitHub,
    /// GitLab or self-hosted GitLab
    GitLab,
}

/// Platform configuration
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Platform type
    pub platform: Platform,
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com/gitlab.com)
    pub host: Option<String>,
}
