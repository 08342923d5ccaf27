use async_trait::async_trait;
use maint_core::api::{CommandRunner, ExecutionError, Operation, RawOutput};
use std::process::Stdio;
use tokio::process::Command;

/// Spawns each operation as a child process and waits for it to exit,
/// capturing stdout and stderr in full.
pub struct ProcessRunner {}

impl ProcessRunner {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    fn name(&self) -> &str {
        "process"
    }

    async fn run(&self, op: &Operation) -> Result<RawOutput, ExecutionError> {
        let program = op
            .program()
            .ok_or_else(|| ExecutionError::EmptyCommand(op.name.clone()))?;

        let mut cmd = Command::new(program);
        cmd.args(op.args())
            .envs(&op.envs)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &op.cwd {
            cmd.current_dir(dir);
        }

        let output = cmd.output().await.map_err(|source| ExecutionError::Spawn {
            program: program.to_string(),
            source,
        })?;

        // Killed by a signal: no exit code.
        let exit_code = output.status.code().unwrap_or(-1);
        tracing::trace!(
            program,
            exit_code,
            stdout_len = output.stdout.len(),
            stderr_len = output.stderr.len(),
            "process exited"
        );

        Ok(RawOutput {
            exit_code,
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(name: &str, script: &str) -> Operation {
        Operation::new(name, ["sh", "-c", script])
    }

    #[tokio::test]
    async fn captures_exit_code_and_both_streams() {
        let out = ProcessRunner::new()
            .run(&sh("mixed", "echo out; echo err >&2; exit 3"))
            .await
            .unwrap();
        assert_eq!(out.exit_code, 3);
        assert_eq!(out.stdout, b"out\n");
        assert_eq!(out.stderr, b"err\n");
    }

    #[tokio::test]
    async fn passes_env_and_working_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let op = sh("env", "printf '%s|' \"$MAINT_TEST_VALUE\"; pwd")
            .with_env("MAINT_TEST_VALUE", "hello")
            .with_cwd(tmp.path());

        let out = ProcessRunner::new().run(&op).await.unwrap();

        let text = String::from_utf8(out.stdout).unwrap();
        let (value, cwd) = text.trim_end().split_once('|').unwrap();
        assert_eq!(value, "hello");
        assert_eq!(
            std::fs::canonicalize(cwd).unwrap(),
            std::fs::canonicalize(tmp.path()).unwrap()
        );
    }

    #[tokio::test]
    async fn missing_executable_is_a_spawn_error() {
        let op = Operation::new("ghost", ["maint-definitely-missing-binary", "--version"]);
        let err = ProcessRunner::new().run(&op).await.unwrap_err();
        assert!(matches!(
            err,
            ExecutionError::Spawn { ref program, .. } if program == "maint-definitely-missing-binary"
        ));
    }
}
