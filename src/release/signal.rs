//! Bump keyword parsing from a single string

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Global version bump for the whole workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSignal {
    /// `major`
    Major,
    /// `minor`
    Minor,
    /// `patch`
    Patch,
    /// `pre-release:<flag>`, flag captured verbatim
    PreRelease(String),
}

impl fmt::Display for VersionSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => f.write_str("major"),
            Self::Minor => f.write_str("minor"),
            Self::Patch => f.write_str("patch"),
            Self::PreRelease(flag) => write!(f, "pre-release:{flag}"),
        }
    }
}

/// How a keyword is matched against text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The whole text is the keyword (dedicated `major` / `minor` / `patch` labels)
    Exact,
    /// The text contains `[keyword]` or `[pre-release:<flag>]` (titles, commits)
    Bracketed,
}

/// Plain keywords in precedence order
static KEYWORDS: [(&str, VersionSignal); 3] = [
    ("major", VersionSignal::Major),
    ("minor", VersionSignal::Minor),
    ("patch", VersionSignal::Patch),
];

fn pre_release_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[pre-release:([^\]]+)\]").expect("hardcoded pre-release pattern is valid")
    })
}

/// Extract a bump keyword from `text`
///
/// In bracketed mode a `[pre-release:<flag>]` annotation wins over any plain
/// keyword in the same text; among plain keywords the order is
/// major, minor, patch. Returns `None` when nothing matches.
pub fn parse_keyword(text: &str, mode: MatchMode) -> Option<VersionSignal> {
    match mode {
        MatchMode::Exact => KEYWORDS
            .iter()
            .find(|(keyword, _)| text == *keyword)
            .map(|(_, signal)| signal.clone()),
        MatchMode::Bracketed => {
            if let Some(caps) = pre_release_regex().captures(text) {
                return Some(VersionSignal::PreRelease(caps[1].to_string()));
            }
            KEYWORDS
                .iter()
                .find(|(keyword, _)| text.contains(&format!("[{keyword}]")))
                .map(|(_, signal)| signal.clone())
        }
    }
}
