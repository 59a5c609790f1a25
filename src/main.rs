//! ws-release - tag and export a component workspace from PR signals
//!
//! CLI binary run as a CI step after a pull request is merged.

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;

/// Hosting platform selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlatformArg {
    /// GitHub or GitHub Enterprise
    Github,
    /// GitLab or self-hosted GitLab
    Gitlab,
}

#[derive(Debug, Parser)]
#[command(name = "ws-release")]
#[command(about = "Resolve version bumps from the last merged PR, then tag and export the workspace")]
#[command(version)]
struct Cli {
    /// Workspace directory the release tool runs in
    #[arg(long, env = "INPUT_WS-DIR")]
    ws_dir: Option<PathBuf>,

    /// Legacy workspace directory variable
    #[arg(long = "wsdir", env = "WSDIR", hide = true)]
    legacy_ws_dir: Option<PathBuf>,

    /// Release tool executable
    #[arg(long, env = "RELEASE_TOOL", default_value = ws_release::config::DEFAULT_TOOL)]
    tool: String,

    /// Persist the tag (`--persist`)
    #[arg(long, env = "INPUT_PERSIST", action = ArgAction::SetTrue, value_parser = FalseyValueParser::new())]
    persist: bool,

    /// Build components while tagging (`--build`); true unless set to a false value
    #[arg(long, env = "INPUT_BUILD", value_name = "BOOL")]
    build: Option<String>,

    /// Components are built remotely; never pass `--build`
    #[arg(long, env = "INPUT_RIPPLE", action = ArgAction::SetTrue, value_parser = FalseyValueParser::new())]
    ripple: bool,

    /// Fallback increment when no version signal is found
    /// (major, premajor, minor, preminor, patch, prepatch, prerelease)
    #[arg(long, env = "INPUT_INCREMENT", value_name = "LEVEL")]
    increment: Option<String>,

    /// Pre-release identifier for the fallback increment
    #[arg(long, env = "INPUT_PRERELEASE-ID")]
    prerelease_id: Option<String>,

    /// Step for the fallback increment
    #[arg(long, env = "INPUT_INCREMENT-BY", value_name = "N")]
    increment_by: Option<String>,

    /// Fail when no version signal or fallback increment is available
    #[arg(long, env = "INPUT_STRICT", action = ArgAction::SetTrue, value_parser = FalseyValueParser::new())]
    strict: bool,

    /// Release tool log level (`--log=<level>`)
    #[arg(long, env = "INPUT_LOG")]
    log_level: Option<String>,

    /// Repository as `owner/repo`
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: Option<String>,

    /// Git remote URL to derive platform and repository from
    #[arg(long, conflicts_with = "repository")]
    remote_url: Option<String>,

    /// Hosting platform
    #[arg(long, value_enum, default_value_t = PlatformArg::Github)]
    platform: PlatformArg,

    /// Enterprise / self-hosted host name
    #[arg(long, env = "GH_HOST")]
    host: Option<String>,

    /// Head commit used to find the merged PR by merge marker
    #[arg(long = "ref", env = "GITHUB_SHA")]
    head_ref: Option<String>,

    /// Show the commands without running them or removing labels
    #[arg(long)]
    dry_run: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    ws_release::logging::init_tracing(args.log_json, level);

    match cli::run_release(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::report_failure(&err);
            ExitCode::FAILURE
        }
    }
}
