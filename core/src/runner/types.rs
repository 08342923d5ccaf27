use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ExecutionError;

/// One external command treated as an atomic step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub name: String,
    pub command: Vec<String>,
    pub on_success_message: String,
    pub on_failure_message: String,
    pub envs: BTreeMap<String, String>,
    pub cwd: Option<PathBuf>,
}

impl Operation {
    pub fn new<I, S>(name: impl Into<String>, command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        Self {
            on_success_message: format!("{name} succeeded"),
            on_failure_message: format!("{name} failed"),
            command: command.into_iter().map(Into::into).collect(),
            envs: BTreeMap::new(),
            cwd: None,
            name,
        }
    }

    pub fn on_success(mut self, msg: impl Into<String>) -> Self {
        self.on_success_message = msg.into();
        self
    }

    pub fn on_failure(mut self, msg: impl Into<String>) -> Self {
        self.on_failure_message = msg.into();
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.insert(key.into(), value.into());
        self
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn program(&self) -> Option<&str> {
        self.command.first().map(String::as_str)
    }

    pub fn args(&self) -> &[String] {
        self.command.get(1..).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ExecutionError> {
        match self.program() {
            Some(p) if !p.trim().is_empty() => Ok(()),
            _ => Err(ExecutionError::EmptyCommand(self.name.clone())),
        }
    }

    /// Command line for log and progress output.
    pub fn display_command(&self) -> String {
        self.command.join(" ")
    }
}

/// Undecoded output of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOutput {
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    pub name: String,
    pub succeeded: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: u64,
}

/// Aggregated results of one top-level action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: String,
    pub workflow: String,
    pub results: Vec<OperationResult>,
    pub overall_success: bool,
    /// Operations left unattempted after a stop-on-failure abort.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
    /// Failures that are not process exits (spawn, filesystem, decode).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl RunReport {
    pub fn new(workflow: impl Into<String>) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            workflow: workflow.into(),
            results: Vec::new(),
            overall_success: true,
            skipped: Vec::new(),
            errors: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn push(&mut self, result: OperationResult) {
        self.overall_success &= result.succeeded;
        self.results.push(result);
    }

    pub fn record_error(&mut self, err: impl std::fmt::Display) {
        self.overall_success = false;
        self.errors.push(err.to_string());
    }

    /// Folds another report's outcome into this one, keeping this run id.
    pub fn extend(&mut self, other: RunReport) {
        for result in other.results {
            self.push(result);
        }
        self.skipped.extend(other.skipped);
        for err in other.errors {
            self.record_error(err);
        }
        self.overall_success &= other.overall_success;
    }

    pub fn finish(mut self) -> Self {
        self.finished_at = Some(Utc::now());
        self
    }

    pub fn exit_code(&self) -> i32 {
        if self.overall_success {
            0
        } else {
            1
        }
    }
}
