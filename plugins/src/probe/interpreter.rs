use anyhow::{Context, Result};
use async_trait::async_trait;
use maint_core::api::{RuntimeProbe, RuntimeVersion};
use tokio::process::Command;

/// Asks the configured interpreter for its version (`python --version`).
pub struct InterpreterProbe {
    python: String,
}

impl InterpreterProbe {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }
}

#[async_trait]
impl RuntimeProbe for InterpreterProbe {
    fn name(&self) -> &str {
        "interpreter"
    }

    async fn version(&self) -> Result<RuntimeVersion> {
        let output = Command::new(&self.python)
            .arg("--version")
            .output()
            .await
            .with_context(|| format!("failed to run {} --version", self.python))?;

        if !output.status.success() {
            anyhow::bail!(
                "{} --version exited with {}",
                self.python,
                output.status.code().unwrap_or(-1)
            );
        }

        // Older interpreters print the banner on stderr.
        let banner = if output.stdout.is_empty() {
            String::from_utf8_lossy(&output.stderr).into_owned()
        } else {
            String::from_utf8_lossy(&output.stdout).into_owned()
        };
        let version = RuntimeVersion::parse(&banner)?;
        tracing::debug!(python = %self.python, %version, "interpreter version");
        Ok(version)
    }
}
