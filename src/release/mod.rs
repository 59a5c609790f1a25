//! Release decision engine
//!
//! Turns the last merged pull request into release tool invocations:
//! 1. Signals - parse bump keywords from labels, title and commits
//! 2. Overrides - per-component bumps from `<name>@<bump>` labels
//! 3. Commands - ordered `tag` / `export` arguments
//! 4. Cleanup - remove the labels that were consumed

mod cleanup;
mod command;
mod orchestrate;
mod overrides;
mod progress;
mod resolve;
mod signal;

pub use cleanup::{CleanupReport, consumed_label_names, remove_consumed_labels};
pub use command::{CommandSpec, build_export_args, build_tag_args, export_command, tag_command};
pub use orchestrate::{ReleaseOutcome, locate_pr, merged_pr_number, run_release};
pub use overrides::{ComponentOverride, OverrideBump, extract_overrides, parse_override_suffix};
pub use progress::{NoopProgress, Phase, ProgressCallback};
pub use resolve::{
    FALLBACK_TAG_MESSAGE, Resolution, SignalSource, resolve_global_version, resolve_with_source,
    tag_message,
};
pub use signal::{MatchMode, VersionSignal, parse_keyword};
