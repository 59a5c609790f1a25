//! Removal of consumed signal labels

use crate::error::Result;
use crate::platform::PlatformService;
use crate::release::overrides::parse_override_suffix;
use crate::release::progress::ProgressCallback;
use crate::release::signal::{MatchMode, parse_keyword};
use crate::types::{Label, LabelRemoval};
use tracing::{debug, info};

/// What cleanup did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    /// Labels removed from the PR
    pub removed: Vec<String>,
    /// Labels that were already gone
    pub already_absent: Vec<String>,
}

/// Names of labels that were consumed as a signal: an exact bump keyword
/// or an override label
pub fn consumed_label_names(labels: &[Label]) -> Vec<String> {
    labels
        .iter()
        .filter(|l| {
            parse_keyword(&l.name, MatchMode::Exact).is_some()
                || parse_override_suffix(&l.name).is_some()
        })
        .map(|l| l.name.clone())
        .collect()
}

/// Remove each consumed label from the PR
///
/// A label that is no longer on the PR is recorded, not treated as a
/// failure; any other platform error aborts cleanup.
pub async fn remove_consumed_labels(
    platform: &dyn PlatformService,
    pr_number: u64,
    label_names: &[String],
    progress: &dyn ProgressCallback,
) -> Result<CleanupReport> {
    let mut report = CleanupReport::default();

    for name in label_names {
        let outcome = platform.remove_label(pr_number, name).await?;
        progress.on_label_removed(name, outcome).await;
        match outcome {
            LabelRemoval::Removed => {
                debug!(pr = pr_number, label = %name, "removed label");
                report.removed.push(name.clone());
            }
            LabelRemoval::NotFound => {
                debug!(pr = pr_number, label = %name, "label already absent");
                report.already_absent.push(name.clone());
            }
        }
    }

    info!(
        pr = pr_number,
        removed = report.removed.len(),
        absent = report.already_absent.len(),
        "label cleanup finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(name: &str) -> Label {
        Label {
            name: name.to_string(),
            description: Some("desc".to_string()),
        }
    }

    #[test]
    fn test_consumed_names() {
        let labels = vec![
            label("major"),
            label("docs"),
            label("ui@auto"),
            label("[minor]"),
            label("core@patch"),
        ];
        assert_eq!(
            consumed_label_names(&labels),
            vec!["major", "ui@auto", "core@patch"]
        );
    }

    #[test]
    fn test_no_labels_nothing_consumed() {
        assert!(consumed_label_names(&[]).is_empty());
        assert!(consumed_label_names(&[label("bug")]).is_empty());
    }
}
