//! Mock process executor for testing

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use ws_release::error::Result;
use ws_release::exec::{CommandExecutor, ExecOptions};

/// Call record for `execute`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecCall {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Executor that records invocations and returns configured exit codes
///
/// Exit codes are keyed by the first argument (`tag`, `export`); anything
/// not configured exits 0.
#[derive(Default)]
pub struct MockExecutor {
    calls: Mutex<Vec<ExecCall>>,
    exit_codes: Mutex<HashMap<String, i32>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the given subcommand exit with `code`
    pub fn exit_with(&self, subcommand: &str, code: i32) {
        self.exit_codes
            .lock()
            .unwrap()
            .insert(subcommand.to_string(), code);
    }

    pub fn calls(&self) -> Vec<ExecCall> {
        self.calls.lock().unwrap().clone()
    }

    /// First argument of every call, in order
    pub fn subcommands(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| c.args.first().cloned())
            .collect()
    }
}

#[async_trait]
impl CommandExecutor for MockExecutor {
    async fn execute(
        &self,
        program: &str,
        args: &[String],
        options: &ExecOptions,
    ) -> Result<i32> {
        self.calls.lock().unwrap().push(ExecCall {
            program: program.to_string(),
            args: args.to_vec(),
            cwd: options.cwd.clone(),
        });

        let codes = self.exit_codes.lock().unwrap();
        Ok(args
            .first()
            .and_then(|sub| codes.get(sub).copied())
            .unwrap_or(0))
    }
}
