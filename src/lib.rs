//! ws-release - version-signal resolution for component workspaces
//!
//! Reads the most recently merged pull request (labels, title, commits),
//! decides the workspace bump and per-component overrides, builds the
//! release tool's `tag` / `export` invocations and removes consumed labels.

pub mod auth;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod platform;
pub mod release;
pub mod types;
