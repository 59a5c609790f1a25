//! Precedence resolution of the global version signal
//!
//! Sources are evaluated in order (labels, title, commit message) and the
//! first one that yields a signal wins.

use crate::release::signal::{MatchMode, VersionSignal, parse_keyword};
use crate::types::Label;
use std::fmt;

/// Tag message used when neither a PR title nor a commit message exists
pub const FALLBACK_TAG_MESSAGE: &str = "CI";

/// Where the winning signal came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalSource {
    /// A label whose whole name is a keyword
    Label,
    /// The pull request title
    Title,
    /// The commit message
    CommitMessage,
}

impl fmt::Display for SignalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label => f.write_str("label"),
            Self::Title => f.write_str("title"),
            Self::CommitMessage => f.write_str("commit message"),
        }
    }
}

/// A resolved signal and its source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The bump to apply
    pub signal: VersionSignal,
    /// Which source produced it
    pub source: SignalSource,
}

type Resolver<'a> = &'a dyn Fn() -> Option<VersionSignal>;

/// Resolve the global signal and report which source produced it
///
/// Labels are matched exactly, title and commit message in bracketed mode.
/// Later sources are only evaluated when earlier ones yield nothing.
pub fn resolve_with_source(
    labels: &[Label],
    title: Option<&str>,
    commit_message: Option<&str>,
) -> Option<Resolution> {
    let from_labels = || {
        labels
            .iter()
            .find_map(|label| parse_keyword(&label.name, MatchMode::Exact))
    };
    let from_title = || title.and_then(|t| parse_keyword(t, MatchMode::Bracketed));
    let from_commit = || commit_message.and_then(|m| parse_keyword(m, MatchMode::Bracketed));

    let chain: [(SignalSource, Resolver<'_>); 3] = [
        (SignalSource::Label, &from_labels),
        (SignalSource::Title, &from_title),
        (SignalSource::CommitMessage, &from_commit),
    ];

    chain
        .iter()
        .find_map(|(source, resolve)| {
            resolve().map(|signal| Resolution {
                signal,
                source: *source,
            })
        })
}

/// Resolve the global version signal; `None` lets the release tool apply
/// its own default bump policy
pub fn resolve_global_version(
    labels: &[Label],
    title: Option<&str>,
    commit_message: Option<&str>,
) -> Option<VersionSignal> {
    resolve_with_source(labels, title, commit_message).map(|r| r.signal)
}

/// Pick the tag message: PR title, else last commit message, else `"CI"`
pub fn tag_message(title: Option<&str>, last_commit_message: Option<&str>) -> String {
    [title, last_commit_message]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .unwrap_or(FALLBACK_TAG_MESSAGE)
        .to_string()
}
