//! Authentication for GitHub and GitLab
//!
//! Supports environment variables (CI runners) and CLI-based auth (gh, glab).

mod github;
mod gitlab;

use tokio::process::Command;

pub use github::{GitHubAuthConfig, get_github_auth};
pub use gitlab::{GitLabAuthConfig, get_gitlab_auth};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from CLI tool (gh or glab)
    Cli,
    /// Token from environment variable
    EnvVar,
}

/// Read an environment variable, treating an empty value as unset
fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Ask a platform CLI (`gh` / `glab`) for its stored token
///
/// Any failure (not installed, not logged in) yields `None`.
async fn cli_token(program: &str, host_args: &[&str]) -> Option<String> {
    let status = Command::new(program)
        .args(["auth", "status"])
        .args(host_args)
        .output()
        .await
        .ok()?;
    if !status.status.success() {
        return None;
    }

    let output = Command::new(program)
        .args(["auth", "token"])
        .args(host_args)
        .output()
        .await
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!token.is_empty()).then_some(token)
}
