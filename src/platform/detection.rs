//! Platform detection from remote URLs and repository slugs

use crate::error::{Error, Result};
use crate::types::{Platform, PlatformConfig};
use regex::Regex;
use std::env;
use std::sync::OnceLock;

/// Detect platform (GitHub or GitLab) from a remote URL
pub fn detect_platform(url: &str) -> Option<Platform> {
    let gh_host = env::var("GH_HOST").ok();
    let gitlab_host = env::var("GITLAB_HOST").ok();

    let hostname = extract_hostname(url)?;

    // Check GitHub
    if hostname == "github.com"
        || hostname.ends_with(".github.com")
        || gh_host.as_ref().is_some_and(|h| hostname == *h)
    {
        return Some(Platform::GitHub);
    }

    // Check GitLab
    if hostname == "gitlab.com"
        || hostname.ends_with(".gitlab.com")
        || gitlab_host.as_ref().is_some_and(|h| hostname == *h)
    {
        return Some(Platform::GitLab);
    }

    None
}

/// Parse repository info (owner/repo) from a remote URL
pub fn parse_repo_info(url: &str) -> Result<PlatformConfig> {
    let platform = detect_platform(url).ok_or(Error::NoSupportedRemotes)?;
    let hostname = extract_hostname(url);

    let path = remote_path_regex()
        .captures(url)
        .and_then(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| m.as_str())
        .ok_or_else(|| Error::Parse(format!("cannot parse remote URL: {url}")))?;

    let (owner, repo) = split_owner_repo(path)?;

    // Determine if self-hosted
    let host = match platform {
        Platform::GitHub => {
            if hostname.as_ref().is_some_and(|h| h != "github.com") {
                hostname
            } else {
                None
            }
        }
        Platform::GitLab => {
            if hostname.as_ref().is_some_and(|h| h != "gitlab.com") {
                hostname
            } else {
                None
            }
        }
    };

    Ok(PlatformConfig {
        platform,
        owner,
        repo,
        host,
    })
}

/// Parse an `owner/repo` slug (as found in `GITHUB_REPOSITORY` or
/// `CI_PROJECT_PATH`) into a platform config
pub fn parse_repo_slug(
    slug: &str,
    platform: Platform,
    host: Option<String>,
) -> Result<PlatformConfig> {
    let (owner, repo) = split_owner_repo(slug.trim().trim_matches('/'))?;
    Ok(PlatformConfig {
        platform,
        owner,
        repo,
        host,
    })
}

fn remote_path_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // SSH format: git@host:owner/repo.git
    // HTTPS format: https://host/owner/repo.git
    RE.get_or_init(|| {
        Regex::new(r"^(?:git@[^:]+:(.+?)|https?://[^/]+/(.+?))(?:\.git)?/?$")
            .expect("hardcoded remote URL pattern is valid")
    })
}

/// Split a path into owner and repo (GitLab supports nested groups)
fn split_owner_repo(path: &str) -> Result<(String, String)> {
    match path.rsplit_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(Error::Parse(format!("invalid repo path: {path}"))),
    }
}

fn extract_hostname(url: &str) -> Option<String> {
    // SSH format
    if url.starts_with("git@") {
        return url
            .strip_prefix("git@")
            .and_then(|s| s.split(':').next())
            .map(ToString::to_string);
    }

    // HTTPS format
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(ToString::to_string))
}
