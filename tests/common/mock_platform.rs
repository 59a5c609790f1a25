//! Mock platform service for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use ws_release::error::{Error, Result};
use ws_release::platform::PlatformService;
use ws_release::types::{Commit, LabelRemoval, PlatformConfig, PullRequest};

/// Call record for `remove_label`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveLabelCall {
    pub pr_number: u64,
    pub name: String,
}

/// Simple mock platform service for testing
///
/// Features:
/// - Closed PR list in platform order
/// - Per-PR commits and live label state (removal really removes)
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    config: PlatformConfig,
    closed_prs: Mutex<Vec<PullRequest>>,
    pr_commits: Mutex<HashMap<u64, Vec<Commit>>>,
    commits_by_ref: Mutex<HashMap<String, Commit>>,
    live_labels: Mutex<HashMap<u64, Vec<String>>>,
    // Call tracking
    list_closed_calls: AtomicUsize,
    get_pr_calls: Mutex<Vec<u64>>,
    list_commits_calls: Mutex<Vec<u64>>,
    get_commit_calls: Mutex<Vec<String>>,
    remove_label_calls: Mutex<Vec<RemoveLabelCall>>,
    // Error injection
    error_on_list_closed: Mutex<Option<String>>,
    error_on_remove_label: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a new mock with the given config
    pub fn with_config(config: PlatformConfig) -> Self {
        Self {
            config,
            closed_prs: Mutex::new(Vec::new()),
            pr_commits: Mutex::new(HashMap::new()),
            commits_by_ref: Mutex::new(HashMap::new()),
            live_labels: Mutex::new(HashMap::new()),
            list_closed_calls: AtomicUsize::new(0),
            get_pr_calls: Mutex::new(Vec::new()),
            list_commits_calls: Mutex::new(Vec::new()),
            get_commit_calls: Mutex::new(Vec::new()),
            remove_label_calls: Mutex::new(Vec::new()),
            error_on_list_closed: Mutex::new(None),
            error_on_remove_label: Mutex::new(None),
        }
    }

    // === Setup methods ===

    /// Append a closed PR (list order = insertion order); its labels
    /// become the live labels on the PR
    pub fn add_closed_pr(&self, pr: PullRequest) {
        self.live_labels.lock().unwrap().insert(
            pr.number,
            pr.labels.iter().map(|l| l.name.clone()).collect(),
        );
        self.closed_prs.lock().unwrap().push(pr);
    }

    /// Set the commits of a PR (oldest first)
    pub fn set_pr_commits(&self, pr_number: u64, commits: Vec<Commit>) {
        self.pr_commits.lock().unwrap().insert(pr_number, commits);
    }

    /// Make `get_commit(reference)` return `commit`
    pub fn set_commit(&self, reference: &str, commit: Commit) {
        self.commits_by_ref
            .lock()
            .unwrap()
            .insert(reference.to_string(), commit);
    }

    /// Labels currently on a PR
    pub fn live_labels(&self, pr_number: u64) -> Vec<String> {
        self.live_labels
            .lock()
            .unwrap()
            .get(&pr_number)
            .cloned()
            .unwrap_or_default()
    }

    // === Error injection methods ===

    /// Make `list_closed_prs` return an error
    pub fn fail_list_closed(&self, msg: &str) {
        *self.error_on_list_closed.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `remove_label` return an error
    pub fn fail_remove_label(&self, msg: &str) {
        *self.error_on_remove_label.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    pub fn list_closed_call_count(&self) -> usize {
        self.list_closed_calls.load(Ordering::SeqCst)
    }

    pub fn get_pr_calls(&self) -> Vec<u64> {
        self.get_pr_calls.lock().unwrap().clone()
    }

    pub fn list_commits_calls(&self) -> Vec<u64> {
        self.list_commits_calls.lock().unwrap().clone()
    }

    pub fn get_commit_calls(&self) -> Vec<String> {
        self.get_commit_calls.lock().unwrap().clone()
    }

    pub fn remove_label_calls(&self) -> Vec<RemoveLabelCall> {
        self.remove_label_calls.lock().unwrap().clone()
    }

    /// Names passed to `remove_label`, in order
    pub fn removed_label_names(&self) -> Vec<String> {
        self.remove_label_calls()
            .into_iter()
            .map(|c| c.name)
            .collect()
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn list_closed_prs(&self) -> Result<Vec<PullRequest>> {
        self.list_closed_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(msg) = self.error_on_list_closed.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        Ok(self.closed_prs.lock().unwrap().clone())
    }

    async fn get_pr(&self, number: u64) -> Result<PullRequest> {
        self.get_pr_calls.lock().unwrap().push(number);

        self.closed_prs
            .lock()
            .unwrap()
            .iter()
            .find(|pr| pr.number == number)
            .cloned()
            .ok_or_else(|| Error::Platform(format!("PR #{number} not found")))
    }

    async fn list_pr_commits(&self, number: u64) -> Result<Vec<Commit>> {
        self.list_commits_calls.lock().unwrap().push(number);
        Ok(self
            .pr_commits
            .lock()
            .unwrap()
            .get(&number)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_commit(&self, reference: &str) -> Result<Commit> {
        self.get_commit_calls
            .lock()
            .unwrap()
            .push(reference.to_string());
        self.commits_by_ref
            .lock()
            .unwrap()
            .get(reference)
            .cloned()
            .ok_or_else(|| Error::Platform(format!("commit {reference} not found")))
    }

    async fn remove_label(&self, number: u64, name: &str) -> Result<LabelRemoval> {
        self.remove_label_calls
            .lock()
            .unwrap()
            .push(RemoveLabelCall {
                pr_number: number,
                name: name.to_string(),
            });

        if let Some(msg) = self.error_on_remove_label.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let mut live = self.live_labels.lock().unwrap();
        let labels = live.entry(number).or_default();
        match labels.iter().position(|l| l == name) {
            Some(idx) => {
                labels.remove(idx);
                Ok(LabelRemoval::Removed)
            }
            None => Ok(LabelRemoval::NotFound),
        }
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
