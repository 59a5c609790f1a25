//! Release tool argument construction
//!
//! Pure functions: the argument lists are built once and handed verbatim to
//! the process executor.

use crate::config::RunConfig;
use crate::exec::render_command;
use crate::release::overrides::ComponentOverride;
use crate::release::signal::VersionSignal;
use std::fmt;

/// A fully built release tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Executable
    pub program: String,
    /// Ordered arguments
    pub args: Vec<String>,
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_command(&self.program, &self.args))
    }
}

fn log_flag(config: &RunConfig) -> Option<String> {
    config.log_level.as_ref().map(|level| format!("--log={level}"))
}

/// Flags filling the bump slot: the resolved signal, else the configured
/// fallback increment, else nothing
fn bump_flags(signal: Option<&VersionSignal>, config: &RunConfig) -> Vec<String> {
    match signal {
        Some(VersionSignal::PreRelease(flag)) => vec!["--pre-release".to_string(), flag.clone()],
        Some(bump) => vec![format!("--{bump}")],
        None => {
            let mut flags = Vec::new();
            if let Some(increment) = config.increment {
                flags.extend(["--increment".to_string(), increment.to_string()]);
            }
            if let Some(id) = &config.prerelease_id {
                flags.extend(["--prerelease-id".to_string(), id.clone()]);
            }
            if let Some(step) = config.increment_by {
                flags.extend(["--increment-by".to_string(), step.to_string()]);
            }
            flags
        }
    }
}

/// Build the `tag` arguments
///
/// Order: `tag -m "<message>"`, log level, `--build`, bump flags,
/// `--persist`, then one quoted token per override.
pub fn build_tag_args(
    tag_message: &str,
    signal: Option<&VersionSignal>,
    overrides: &[ComponentOverride],
    config: &RunConfig,
) -> Vec<String> {
    let mut args = vec![
        "tag".to_string(),
        "-m".to_string(),
        format!("\"{tag_message}\""),
    ];
    args.extend(log_flag(config));
    if config.build {
        args.push("--build".to_string());
    }
    args.extend(bump_flags(signal, config));
    if config.persist {
        args.push("--persist".to_string());
    }
    args.extend(overrides.iter().map(ComponentOverride::token));
    args
}

/// Build the `export` arguments; export never takes version flags
pub fn build_export_args(config: &RunConfig) -> Vec<String> {
    let mut args = vec!["export".to_string()];
    args.extend(log_flag(config));
    args
}

/// The `tag` invocation for the configured release tool
pub fn tag_command(
    tag_message: &str,
    signal: Option<&VersionSignal>,
    overrides: &[ComponentOverride],
    config: &RunConfig,
) -> CommandSpec {
    CommandSpec {
        program: config.tool.clone(),
        args: build_tag_args(tag_message, signal, overrides, config),
    }
}

/// The `export` invocation for the configured release tool
pub fn export_command(config: &RunConfig) -> CommandSpec {
    CommandSpec {
        program: config.tool.clone(),
        args: build_export_args(config),
    }
}
