//! Error types for ws-release

use thiserror::Error;

/// Errors raised while resolving and running a release
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid credentials
    #[error("authentication error: {0}")]
    Auth(String),

    /// Invalid run configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// GitHub API failure
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// GitLab API failure
    #[error("GitLab API error: {0}")]
    GitLabApi(String),

    /// Generic hosting-platform failure
    #[error("platform error: {0}")]
    Platform(String),

    /// Could not parse a remote URL, slug or response
    #[error("parse error: {0}")]
    Parse(String),

    /// The release tool could not be spawned
    #[error("failed to run `{command}`: {message}")]
    Exec {
        /// Rendered command line
        command: String,
        /// Underlying I/O error
        message: String,
    },

    /// The release tool exited with a nonzero status
    #[error("`{command}` exited with status {code}")]
    CommandFailed {
        /// Rendered command line
        command: String,
        /// Exit code (-1 when killed by a signal)
        code: i32,
    },

    /// Remote URL did not point at a supported platform
    #[error("no supported remote found (GitHub or GitLab)")]
    NoSupportedRemotes,
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::GitLabApi(err.to_string())
    }
}

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
