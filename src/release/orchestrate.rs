//! Release run orchestration
//!
//! Strictly sequential: locate PR, fetch commits if needed, resolve the
//! global signal and overrides, tag, export, then clean up labels. Any
//! collaborator error aborts the remaining steps.

use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::exec::{CommandExecutor, ExecOptions};
use crate::platform::PlatformService;
use crate::release::cleanup::{CleanupReport, consumed_label_names, remove_consumed_labels};
use crate::release::command::{CommandSpec, export_command, tag_command};
use crate::release::overrides::{ComponentOverride, extract_overrides};
use crate::release::progress::{Phase, ProgressCallback};
use crate::release::resolve::{resolve_with_source, tag_message};
use crate::release::signal::VersionSignal;
use crate::types::{Commit, PullRequest};
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

/// Summary of a release run
#[derive(Debug, Clone)]
pub struct ReleaseOutcome {
    /// Repository as `owner/repo`
    pub repository: String,
    /// PR the signals were read from
    pub pr_number: Option<u64>,
    /// Message passed to `tag -m`
    pub tag_message: String,
    /// Resolved global signal
    pub signal: Option<VersionSignal>,
    /// Per-component overrides
    pub overrides: Vec<ComponentOverride>,
    /// Tag invocation
    pub tag: CommandSpec,
    /// Export invocation
    pub export: CommandSpec,
    /// Cleanup result (None in a dry run or without a PR)
    pub cleanup: Option<CleanupReport>,
    /// Whether commands were only reported
    pub dry_run: bool,
}

fn merge_marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // GitHub: "Merge pull request #12 from owner/branch"
    // GitLab: "See merge request group/project!12"
    RE.get_or_init(|| {
        Regex::new(r"(?i)merge (?:pull )?request\s+\S*?[#!](\d+)")
            .expect("hardcoded merge marker pattern is valid")
    })
}

/// PR number from a merge commit message, if it carries a merge marker
pub fn merged_pr_number(message: &str) -> Option<u64> {
    merge_marker_regex()
        .captures(message)
        .and_then(|c| c[1].parse().ok())
}

/// Find the PR the release is for
///
/// A merge marker in the head commit selects that PR directly; otherwise
/// the most recently updated closed PR with a merge timestamp is used.
pub async fn locate_pr(
    platform: &dyn PlatformService,
    head: Option<&Commit>,
) -> Result<Option<PullRequest>> {
    if let Some(number) = head.and_then(|c| merged_pr_number(&c.message)) {
        debug!(number, "head commit names a merged PR");
        return platform.get_pr(number).await.map(Some);
    }

    let prs = platform.list_closed_prs().await?;
    Ok(prs.into_iter().find(|pr| pr.merged_at.is_some()))
}

async fn run_checked(
    executor: &dyn CommandExecutor,
    command: &CommandSpec,
    options: &ExecOptions,
) -> Result<()> {
    let code = executor
        .execute(&command.program, &command.args, options)
        .await?;
    if code == 0 {
        Ok(())
    } else {
        Err(Error::CommandFailed {
            command: command.to_string(),
            code,
        })
    }
}

/// Run a full release
///
/// Cleanup only runs after both tag and export succeed, so a failed run
/// leaves its signal labels in place for a retry.
#[allow(clippy::too_many_lines)]
pub async fn run_release(
    platform: &dyn PlatformService,
    executor: &dyn CommandExecutor,
    config: &RunConfig,
    progress: &dyn ProgressCallback,
) -> Result<ReleaseOutcome> {
    // Phase: locate PR
    progress.on_phase(Phase::LocatingPr).await;

    let head = match &config.head_ref {
        Some(reference) => Some(platform.get_commit(reference).await?),
        None => None,
    };
    let pr = locate_pr(platform, head.as_ref()).await?;
    progress.on_pr_located(pr.as_ref()).await;

    // Phase: commits, only when title and labels leave a gap
    let commit_message = match &pr {
        Some(pr) => {
            let title_blank = pr.title.trim().is_empty();
            let unresolved =
                resolve_with_source(&pr.labels, Some(pr.title.as_str()), None).is_none();
            if title_blank || unresolved {
                progress.on_phase(Phase::FetchingCommits).await;
                let mut commits = platform.list_pr_commits(pr.number).await?;
                commits.pop().map(|c| c.message)
            } else {
                None
            }
        }
        None => {
            warn!("no merged pull request found; using commit message only");
            head.map(|c| c.message)
        }
    };

    // Phase: resolve
    progress.on_phase(Phase::Resolving).await;

    let (labels, title) = pr
        .as_ref()
        .map_or((&[][..], None), |pr| (pr.labels.as_slice(), Some(pr.title.as_str())));
    let resolution = resolve_with_source(labels, title, commit_message.as_deref());
    let overrides = extract_overrides(labels);
    progress.on_resolved(resolution.as_ref(), &overrides).await;

    match &resolution {
        Some(r) => info!(signal = %r.signal, source = %r.source, "resolved version signal"),
        None => info!("no version signal; release tool default applies"),
    }

    if config.strict && resolution.is_none() && !config.has_fallback_increment() {
        return Err(Error::Config(
            "strict mode: no version signal found and no fallback increment configured"
                .to_string(),
        ));
    }

    let signal = resolution.map(|r| r.signal);
    let message = match &pr {
        Some(pr) => tag_message(Some(pr.title.as_str()), commit_message.as_deref()),
        // No PR context: fixed fallback
        None => tag_message(None, None),
    };
    let tag = tag_command(&message, signal.as_ref(), &overrides, config);
    let export = export_command(config);

    let repo = platform.config();
    let mut outcome = ReleaseOutcome {
        repository: format!("{}/{}", repo.owner, repo.repo),
        pr_number: pr.as_ref().map(|p| p.number),
        tag_message: message,
        signal,
        overrides,
        tag,
        export,
        cleanup: None,
        dry_run: config.dry_run,
    };

    if config.dry_run {
        progress.on_message("Dry run - no commands will be executed").await;
        progress.on_command(&outcome.tag).await;
        progress.on_command(&outcome.export).await;
        progress.on_phase(Phase::Complete).await;
        return Ok(outcome);
    }

    let options = ExecOptions {
        cwd: config.ws_dir.clone(),
        env: Vec::new(),
    };

    // Phase: tag
    progress.on_phase(Phase::Tagging).await;
    progress.on_command(&outcome.tag).await;
    run_checked(executor, &outcome.tag, &options).await?;

    // Phase: export, only after tag has exited
    progress.on_phase(Phase::Exporting).await;
    progress.on_command(&outcome.export).await;
    run_checked(executor, &outcome.export, &options).await?;

    // Phase: cleanup
    if let Some(pr) = &pr {
        let consumed = consumed_label_names(&pr.labels);
        if !consumed.is_empty() {
            progress.on_phase(Phase::CleaningUp).await;
            let report = remove_consumed_labels(platform, pr.number, &consumed, progress).await?;
            outcome.cleanup = Some(report);
        }
    }

    progress.on_phase(Phase::Complete).await;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_merge_marker() {
        assert_eq!(
            merged_pr_number("Merge pull request #42 from acme/feature\n\n[minor] Add"),
            Some(42)
        );
    }

    #[test]
    fn test_gitlab_merge_marker() {
        assert_eq!(
            merged_pr_number("Add parser\n\nSee merge request acme/ws!17"),
            Some(17)
        );
    }

    #[test]
    fn test_no_marker() {
        assert_eq!(merged_pr_number("fix bug"), None);
        assert_eq!(merged_pr_number("Add feature (#12)"), None);
    }
}
