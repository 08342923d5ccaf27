use std::sync::Arc;
use std::time::Instant;

use crate::error::ExecutionError;

use super::console::Console;
use super::output::decode_stream;
use super::traits::CommandRunner;
use super::types::{Operation, OperationResult, RunReport};

/// Whether a failing operation ends the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencePolicy {
    StopOnFailure,
    BestEffort,
}

impl SequencePolicy {
    pub fn from_stop_on_failure(stop_on_failure: bool) -> Self {
        if stop_on_failure {
            Self::StopOnFailure
        } else {
            Self::BestEffort
        }
    }

    pub fn stops_on_failure(self) -> bool {
        matches!(self, Self::StopOnFailure)
    }
}

/// Sequences operations through a [`CommandRunner`], one at a time.
#[derive(Clone)]
pub struct Orchestrator {
    runner: Arc<dyn CommandRunner>,
    console: Console,
}

impl Orchestrator {
    pub fn new(runner: Arc<dyn CommandRunner>, console: Console) -> Self {
        Self { runner, console }
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    /// Runs a single operation. A non-zero exit comes back as a failed
    /// result; only spawn and decode problems are errors.
    #[tracing::instrument(name = "orchestrator.run_operation", skip(self, op), fields(op = %op.name))]
    pub async fn run_operation(&self, op: &Operation) -> Result<OperationResult, ExecutionError> {
        op.validate()?;

        self.console.line(format!("{}...", op.name));
        tracing::debug!(command = %op.display_command(), runner = self.runner.name(), "spawning");

        let started = Instant::now();
        let raw = self.runner.run(op).await?;
        let duration_ms = started.elapsed().as_millis() as u64;

        let stdout = decode_stream(&op.name, "stdout", &raw.stdout)?;
        let stderr = decode_stream(&op.name, "stderr", &raw.stderr)?;
        let succeeded = raw.exit_code == 0;

        if succeeded {
            self.console.success(&op.on_success_message);
        } else {
            self.console
                .failure(format!("{}: {}", op.on_failure_message, stderr.trim_end()));
        }
        tracing::info!(
            exit_code = raw.exit_code,
            duration_ms,
            succeeded,
            "operation finished"
        );

        Ok(OperationResult {
            name: op.name.clone(),
            succeeded,
            exit_code: raw.exit_code,
            stdout,
            stderr,
            duration_ms,
        })
    }

    /// Runs `ops` in order. Under [`SequencePolicy::StopOnFailure`] the first
    /// failed result ends the run and the remaining names land in
    /// `RunReport::skipped`. An execution error always ends the run.
    pub async fn run_sequence(
        &self,
        workflow: &str,
        ops: &[Operation],
        policy: SequencePolicy,
    ) -> RunReport {
        let mut report = RunReport::new(workflow);

        for (idx, op) in ops.iter().enumerate() {
            match self.run_operation(op).await {
                Ok(result) => {
                    let failed = !result.succeeded;
                    report.push(result);
                    if failed && policy.stops_on_failure() {
                        report.skipped = remaining_names(ops, idx);
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(op = %op.name, "execution error: {e}");
                    self.console.failure(format!("{}: {e}", op.on_failure_message));
                    report.record_error(e);
                    report.skipped = remaining_names(ops, idx);
                    break;
                }
            }
        }

        report.finish()
    }
}

fn remaining_names(ops: &[Operation], failed_idx: usize) -> Vec<String> {
    ops[failed_idx + 1..].iter().map(|op| op.name.clone()).collect()
}
