//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{Commit, Label, LabelRemoval, Platform, PlatformConfig, PullRequest};
use async_trait::async_trait;
use octocrab::{Octocrab, Page};
use octocrab::params::{Direction, State, pulls::Sort};
use serde::Deserialize;

/// Page size used when listing closed PRs and PR commits
const PAGE_SIZE: u8 = 100;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: PlatformConfig,
}

/// Commit as returned by the REST commits endpoints
#[derive(Deserialize)]
struct RestCommit {
    sha: String,
    commit: RestCommitDetail,
}

#[derive(Deserialize)]
struct RestCommitDetail {
    message: String,
}

impl From<RestCommit> for Commit {
    fn from(c: RestCommit) -> Self {
        Self {
            sha: c.sha,
            message: c.commit.message,
        }
    }
}

impl GitHubService {
    /// Create a new GitHub service
    pub fn new(token: &str, owner: String, repo: String, host: Option<String>) -> Result<Self> {
        let base_uri = host.as_ref().map(|h| format!("https://{h}/api/v3"));
        Self::build(token, owner, repo, host, base_uri.as_deref())
    }

    /// Create a GitHub service against an explicit API base URI
    /// (e.g. `http://127.0.0.1:1234`)
    pub fn with_base_uri(
        token: &str,
        owner: String,
        repo: String,
        base_uri: &str,
    ) -> Result<Self> {
        Self::build(token, owner, repo, None, Some(base_uri))
    }

    fn build(
        token: &str,
        owner: String,
        repo: String,
        host: Option<String>,
        base_uri: Option<&str>,
    ) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(uri) = base_uri {
            builder = builder
                .base_uri(uri)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder.build().map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self {
            client,
            config: PlatformConfig {
                platform: Platform::GitHub,
                owner,
                repo,
                host,
            },
        })
    }

    fn repo_route(&self, path: &str) -> String {
        format!("/repos/{}/{}{path}", self.config.owner, self.config.repo)
    }
}

fn convert_pr(pr: octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        title: pr.title.unwrap_or_default(),
        labels: pr
            .labels
            .unwrap_or_default()
            .into_iter()
            .map(|l| Label {
                name: l.name,
                description: l.description,
            })
            .collect(),
        merged_at: pr.merged_at,
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn list_closed_prs(&self) -> Result<Vec<PullRequest>> {
        let page = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .list()
            .state(State::Closed)
            .sort(Sort::Updated)
            .direction(Direction::Descending)
            .per_page(PAGE_SIZE)
            .send()
            .await?;

        Ok(page.items.into_iter().map(convert_pr).collect())
    }

    async fn get_pr(&self, number: u64) -> Result<PullRequest> {
        let pr = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .get(number)
            .await?;

        Ok(convert_pr(pr))
    }

    async fn list_pr_commits(&self, number: u64) -> Result<Vec<Commit>> {
        // Oldest first; the last commit lives on the final page
        let route = self.repo_route(&format!("/pulls/{number}/commits"));
        let first: Page<RestCommit> = self
            .client
            .get(route, Some(&[("per_page", PAGE_SIZE)]))
            .await?;
        let commits = self.client.all_pages(first).await?;

        Ok(commits.into_iter().map(Commit::from).collect())
    }

    async fn get_commit(&self, reference: &str) -> Result<Commit> {
        let route = self.repo_route(&format!(
            "/commits/{}",
            urlencoding::encode(reference)
        ));
        let commit: RestCommit = self.client.get(route, None::<&()>).await?;

        Ok(commit.into())
    }

    async fn remove_label(&self, number: u64, name: &str) -> Result<LabelRemoval> {
        let route = self.repo_route(&format!(
            "/issues/{number}/labels/{}",
            urlencoding::encode(name)
        ));

        match self
            .client
            .delete::<serde_json::Value, _, ()>(route, None)
            .await
        {
            Ok(_) => Ok(LabelRemoval::Removed),
            Err(octocrab::Error::GitHub { source, .. }) if source.status_code.as_u16() == 404 => {
                Ok(LabelRemoval::NotFound)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
