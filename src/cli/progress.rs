//! CLI progress callback with styled output

use crate::cli::style::{Stylize, arrow, bullet, check};
use anstream::println;
use async_trait::async_trait;
use ws_release::release::{CommandSpec, ComponentOverride, Phase, ProgressCallback, Resolution};
use ws_release::types::{LabelRemoval, PullRequest};

/// CLI progress callback that prints to stdout
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Complete => println!("{} {}", check(), phase.to_string().emphasis()),
            _ => println!("{}...", phase.to_string().emphasis()),
        }
    }

    async fn on_pr_located(&self, pr: Option<&PullRequest>) {
        match pr {
            Some(pr) => println!(
                "  {} PR {} {}",
                bullet(),
                format!("#{}", pr.number).accent(),
                pr.title.muted()
            ),
            None => println!("  {}", "no merged pull request found".warn().for_stdout()),
        }
    }

    async fn on_resolved(&self, resolution: Option<&Resolution>, overrides: &[ComponentOverride]) {
        match resolution {
            Some(r) => println!(
                "  {} bump {} {}",
                bullet(),
                r.signal.accent(),
                format!("(from {})", r.source).muted()
            ),
            None => println!("  {} bump {}", bullet(), "tool default".muted()),
        }
        for o in overrides {
            println!(
                "  {} override {} {}",
                bullet(),
                o.component.accent(),
                o.bump.muted()
            );
        }
    }

    async fn on_command(&self, command: &CommandSpec) {
        println!("  {} {}", arrow(), command.accent());
    }

    async fn on_label_removed(&self, name: &str, outcome: LabelRemoval) {
        match outcome {
            LabelRemoval::Removed => println!("  {} Removed {}", check(), name.emphasis()),
            LabelRemoval::NotFound => {
                println!("  - {} {}", name.accent(), "already removed".muted());
            }
        }
    }

    async fn on_message(&self, message: &str) {
        println!("{}", message.muted());
    }
}
