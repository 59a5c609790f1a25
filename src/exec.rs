//! Process execution for the release tool

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::debug;

/// Options for a single process invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOptions {
    /// Working directory
    pub cwd: PathBuf,
    /// Extra environment variables (the parent environment is inherited)
    pub env: Vec<(String, String)>,
}

/// Runs external commands and reports their exit status
///
/// Implementations must not return before the process has exited.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run `program` with `args`, returning its exit code
    async fn execute(&self, program: &str, args: &[String], options: &ExecOptions)
        -> Result<i32>;
}

/// Executor backed by `tokio::process`; output is inherited so the
/// release tool logs straight into the CI job
pub struct TokioExecutor;

#[async_trait]
impl CommandExecutor for TokioExecutor {
    async fn execute(
        &self,
        program: &str,
        args: &[String],
        options: &ExecOptions,
    ) -> Result<i32> {
        debug!(program, ?args, cwd = %options.cwd.display(), "spawning");

        let status = Command::new(program)
            .args(args)
            .current_dir(&options.cwd)
            .envs(options.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .status()
            .await
            .map_err(|e| Error::Exec {
                command: render_command(program, args),
                message: e.to_string(),
            })?;

        // Killed by a signal
        Ok(status.code().unwrap_or(-1))
    }
}

/// Render a command line for messages
pub fn render_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_command() {
        let args = vec!["tag".to_string(), "--persist".to_string()];
        assert_eq!(render_command("bit", &args), "bit tag --persist");
    }

    #[tokio::test]
    async fn test_missing_program_is_exec_error() {
        let dir = tempfile::tempdir().unwrap();
        let options = ExecOptions {
            cwd: dir.path().to_path_buf(),
            env: vec![],
        };

        let err = TokioExecutor
            .execute("ws-release-no-such-tool", &["tag".to_string()], &options)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Exec { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_exit_code_and_cwd_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker"), "").unwrap();
        let options = ExecOptions {
            cwd: dir.path().to_path_buf(),
            env: vec![("WS_RELEASE_CODE".to_string(), "3".to_string())],
        };

        let args = vec![
            "-c".to_string(),
            "test -f marker && exit $WS_RELEASE_CODE".to_string(),
        ];
        let code = TokioExecutor.execute("sh", &args, &options).await.unwrap();

        assert_eq!(code, 3);
    }
}
