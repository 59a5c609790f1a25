//! GitLab authentication

use crate::auth::{AuthSource, cli_token, non_empty_env};
use crate::error::{Error, Result};

/// GitLab authentication configuration
#[derive(Debug, Clone)]
pub struct GitLabAuthConfig {
    /// Authentication token
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
    /// GitLab host (e.g., "gitlab.com")
    pub host: String,
}

/// Get GitLab authentication
///
/// Priority:
/// 1. `GITLAB_TOKEN` environment variable
/// 2. `GL_TOKEN` environment variable
/// 3. glab CLI (`glab auth token`)
pub async fn get_gitlab_auth(host: Option<&str>) -> Result<GitLabAuthConfig> {
    let host = host
        .map(String::from)
        .or_else(|| non_empty_env("GITLAB_HOST"))
        .unwrap_or_else(|| "gitlab.com".to_string());

    for var in ["GITLAB_TOKEN", "GL_TOKEN"] {
        if let Some(token) = non_empty_env(var) {
            return Ok(GitLabAuthConfig {
                token,
                source: AuthSource::EnvVar,
                host,
            });
        }
    }

    if let Some(token) = cli_token("glab", &["--hostname", host.as_str()]).await {
        return Ok(GitLabAuthConfig {
            token,
            source: AuthSource::Cli,
            host,
        });
    }

    Err(Error::Auth(
        "GitLab token not found. Set GITLAB_TOKEN or run `glab auth login`".to_string(),
    ))
}
