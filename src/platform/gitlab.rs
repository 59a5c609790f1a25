//! GitLab platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{Commit, Label, LabelRemoval, Platform, PlatformConfig, PullRequest};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// GitLab service using reqwest
pub struct GitLabService {
    client: Client,
    token: String,
    api_base: String,
    config: PlatformConfig,
    project_path: String,
}

#[derive(Deserialize)]
struct MergeRequest {
    iid: u64,
    title: String,
    #[serde(default)]
    labels: Vec<MrLabel>,
    merged_at: Option<DateTime<Utc>>,
}

/// Label object returned with `with_labels_details=true`
#[derive(Deserialize)]
struct MrLabel {
    name: String,
    description: Option<String>,
}

/// Single-MR view, where labels are plain names
#[derive(Deserialize)]
struct MergeRequestLabels {
    #[serde(default)]
    labels: Vec<String>,
}

#[derive(Deserialize)]
struct MrCommit {
    id: String,
    message: String,
}

#[derive(Serialize)]
struct RemoveLabelsPayload<'a> {
    remove_labels: &'a str,
}

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Page size for list endpoints
const PER_PAGE: &str = "100";

impl From<MergeRequest> for PullRequest {
    fn from(mr: MergeRequest) -> Self {
        Self {
            number: mr.iid,
            title: mr.title,
            labels: mr
                .labels
                .into_iter()
                .map(|l| Label {
                    name: l.name,
                    description: l.description,
                })
                .collect(),
            merged_at: mr.merged_at,
        }
    }
}

impl From<MrCommit> for Commit {
    fn from(c: MrCommit) -> Self {
        Self {
            sha: c.id,
            message: c.message,
        }
    }
}

impl GitLabService {
    /// Create a new GitLab service
    pub fn new(token: String, owner: String, repo: String, host: Option<String>) -> Self {
        let host = host.unwrap_or_else(|| "gitlab.com".to_string());
        let api_base = format!("https://{host}/api/v4");
        let host = if host == "gitlab.com" { None } else { Some(host) };
        Self::with_api_base(token, owner, repo, host, api_base)
    }

    /// Create a GitLab service against an explicit API base URL
    /// (e.g. `http://127.0.0.1:1234/api/v4`)
    pub fn with_api_base(
        token: String,
        owner: String,
        repo: String,
        host: Option<String>,
        api_base: String,
    ) -> Self {
        let project_path = format!("{owner}/{repo}");

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            api_base: api_base.trim_end_matches('/').to_string(),
            config: PlatformConfig {
                platform: Platform::GitLab,
                owner,
                repo,
                host,
            },
            project_path,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn encoded_project(&self) -> String {
        urlencoding::encode(&self.project_path).into_owned()
    }

    async fn list_merge_requests(&self, query: &[(&str, &str)]) -> Result<Vec<MergeRequest>> {
        let url = self.api_url(&format!(
            "/projects/{}/merge_requests",
            self.encoded_project()
        ));

        let mrs: Vec<MergeRequest> = self
            .client
            .get(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .query(&[("with_labels_details", "true"), ("per_page", PER_PAGE)])
            .query(query)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::GitLabApi(e.to_string()))?
            .json()
            .await?;

        Ok(mrs)
    }
}

#[async_trait]
impl PlatformService for GitLabService {
    async fn list_closed_prs(&self) -> Result<Vec<PullRequest>> {
        let mrs = self
            .list_merge_requests(&[
                ("state", "merged"),
                ("order_by", "updated_at"),
                ("sort", "desc"),
            ])
            .await?;

        Ok(mrs.into_iter().map(PullRequest::from).collect())
    }

    async fn get_pr(&self, number: u64) -> Result<PullRequest> {
        let iid = number.to_string();
        let mrs = self
            .list_merge_requests(&[("iids[]", iid.as_str()), ("state", "all")])
            .await?;

        mrs.into_iter()
            .next()
            .map(PullRequest::from)
            .ok_or_else(|| Error::GitLabApi(format!("merge request !{number} not found")))
    }

    async fn list_pr_commits(&self, number: u64) -> Result<Vec<Commit>> {
        let url = self.api_url(&format!(
            "/projects/{}/merge_requests/{}/commits",
            self.encoded_project(),
            number
        ));

        let mut commits: Vec<MrCommit> = self
            .client
            .get(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .query(&[("per_page", PER_PAGE)])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::GitLabApi(e.to_string()))?
            .json()
            .await?;

        // GitLab lists MR commits newest first
        commits.reverse();
        Ok(commits.into_iter().map(Commit::from).collect())
    }

    async fn get_commit(&self, reference: &str) -> Result<Commit> {
        let url = self.api_url(&format!(
            "/projects/{}/repository/commits/{}",
            self.encoded_project(),
            urlencoding::encode(reference)
        ));

        let commit: MrCommit = self
            .client
            .get(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::GitLabApi(e.to_string()))?
            .json()
            .await?;

        Ok(commit.into())
    }

    async fn remove_label(&self, number: u64, name: &str) -> Result<LabelRemoval> {
        let url = self.api_url(&format!(
            "/projects/{}/merge_requests/{}",
            self.encoded_project(),
            number
        ));

        // GitLab accepts removal of absent labels silently, so check first
        let response = self
            .client
            .get(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(LabelRemoval::NotFound);
        }
        let current: MergeRequestLabels = response
            .error_for_status()
            .map_err(|e| Error::GitLabApi(e.to_string()))?
            .json()
            .await?;
        if !current.labels.iter().any(|l| l == name) {
            return Ok(LabelRemoval::NotFound);
        }

        self.client
            .put(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .json(&RemoveLabelsPayload {
                remove_labels: name,
            })
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::GitLabApi(e.to_string()))?;

        Ok(LabelRemoval::Removed)
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
