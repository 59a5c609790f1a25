//! CLI commands
//!
//! Glue between the `ws-release` arguments and the library.

mod progress;
mod release;
mod style;

pub use release::{report_failure, run_release};
