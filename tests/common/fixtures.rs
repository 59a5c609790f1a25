//! Test data factories for ws-release types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use ws_release::types::{Commit, Label, Platform, PlatformConfig, PullRequest};

/// Create a label with a description
pub fn make_label(name: &str, description: &str) -> Label {
    Label {
        name: name.to_string(),
        description: Some(description.to_string()),
    }
}

/// Create a label without description
pub fn make_plain_label(name: &str) -> Label {
    Label {
        name: name.to_string(),
        description: None,
    }
}

/// Create a merged pull request
pub fn make_merged_pr(number: u64, title: &str, labels: Vec<Label>) -> PullRequest {
    PullRequest {
        number,
        title: title.to_string(),
        labels,
        merged_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
    }
}

/// Create a pull request that was closed without merging
pub fn make_unmerged_pr(number: u64, title: &str, labels: Vec<Label>) -> PullRequest {
    PullRequest {
        merged_at: None,
        ..make_merged_pr(number, title, labels)
    }
}

/// Create a commit
pub fn make_commit(sha: &str, message: &str) -> Commit {
    Commit {
        sha: sha.to_string(),
        message: message.to_string(),
    }
}

/// Create a GitHub platform config
pub fn github_config() -> PlatformConfig {
    PlatformConfig {
        platform: Platform::GitHub,
        owner: "testowner".to_string(),
        repo: "testrepo".to_string(),
        host: None,
    }
}
