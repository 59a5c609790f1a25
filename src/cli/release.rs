//! Release command - resolve signals, tag, export, clean up

use crate::cli::progress::CliProgress;
use crate::cli::style::{Stylize, check};
use crate::{Cli, PlatformArg};
use anstream::{eprintln, println};
use anyhow::Result;
use clap::ValueEnum;
use std::path::PathBuf;
use ws_release::config::{Increment, RunConfig};
use ws_release::error::Error;
use ws_release::exec::TokioExecutor;
use ws_release::platform::{create_platform_service, parse_repo_info, parse_repo_slug};
use ws_release::release::ReleaseOutcome;
use ws_release::types::{Platform, PlatformConfig};

/// Action inputs left unset by the workflow arrive as empty strings
fn input(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn parse_bool(name: &str, value: &str) -> ws_release::error::Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "y" | "yes" | "t" | "true" | "on" | "1" => Ok(true),
        "n" | "no" | "f" | "false" | "off" | "0" => Ok(false),
        _ => Err(Error::Config(format!(
            "invalid {name} value '{value}': expected true or false"
        ))),
    }
}

/// Capture all inputs once into an immutable run config
fn run_config(args: &Cli) -> ws_release::error::Result<RunConfig> {
    let build = input(args.build.as_ref())
        .map(|v| parse_bool("build", v))
        .transpose()?
        .unwrap_or(true);
    let increment = input(args.increment.as_ref())
        .map(|v| {
            Increment::from_str(v, true)
                .map_err(|_| Error::Config(format!("invalid increment '{v}'")))
        })
        .transpose()?;
    let increment_by = input(args.increment_by.as_ref())
        .map(|v| {
            v.parse::<u32>()
                .map_err(|e| Error::Config(format!("invalid increment-by '{v}': {e}")))
        })
        .transpose()?;

    Ok(RunConfig {
        ws_dir: args
            .ws_dir
            .clone()
            .or_else(|| args.legacy_ws_dir.clone())
            .unwrap_or_else(|| PathBuf::from("./")),
        tool: args.tool.clone(),
        persist: args.persist,
        build: build && !args.ripple,
        log_level: input(args.log_level.as_ref()).map(str::to_string),
        increment,
        prerelease_id: input(args.prerelease_id.as_ref()).map(str::to_string),
        increment_by,
        strict: args.strict,
        head_ref: input(args.head_ref.as_ref()).map(str::to_string),
        dry_run: args.dry_run,
    })
}

fn platform_config(args: &Cli) -> ws_release::error::Result<PlatformConfig> {
    if let Some(url) = &args.remote_url {
        return parse_repo_info(url);
    }

    let platform = match args.platform {
        PlatformArg::Github => Platform::GitHub,
        PlatformArg::Gitlab => Platform::GitLab,
    };
    let slug = args.repository.as_deref().ok_or_else(|| {
        Error::Config(
            "repository not set. Pass --repository owner/repo or set GITHUB_REPOSITORY"
                .to_string(),
        )
    })?;
    parse_repo_slug(slug, platform, args.host.clone())
}

fn print_summary(outcome: &ReleaseOutcome) {
    let signal = outcome
        .signal
        .as_ref()
        .map_or_else(|| "tool default".to_string(), ToString::to_string);
    let pr = outcome.pr_number.map_or_else(
        || format!("{} (no PR)", outcome.repository),
        |n| format!("{}#{n}", outcome.repository),
    );

    println!();
    if outcome.dry_run {
        println!("Dry run for {} ({})", pr.accent(), signal.accent());
        return;
    }
    println!("{} Released {} ({})", check(), pr.accent(), signal.accent());
    if !outcome.overrides.is_empty() {
        println!(
            "  {} component override{}",
            outcome.overrides.len().accent(),
            if outcome.overrides.len() == 1 { "" } else { "s" }
        );
    }
    if let Some(report) = &outcome.cleanup {
        println!(
            "  {} label{} removed",
            report.removed.len().accent(),
            if report.removed.len() == 1 { "" } else { "s" }
        );
    }
}

/// Run the release command
pub async fn run_release(args: Cli) -> Result<()> {
    let config = run_config(&args)?;
    let platform_config = platform_config(&args)?;

    // Fails on a missing token before anything else happens
    let platform = create_platform_service(&platform_config).await?;

    let progress = CliProgress;
    let outcome = ws_release::release::run_release(
        platform.as_ref(),
        &TokioExecutor,
        &config,
        &progress,
    )
    .await?;

    print_summary(&outcome);
    Ok(())
}

/// Report a fatal error: one line on stderr, plus a workflow command when
/// running under GitHub Actions
pub fn report_failure(err: &anyhow::Error) {
    eprintln!("{}: {err:#}", "error".error());
    if std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true") {
        println!("::error::{err:#}");
    }
}
