use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Raised only when a process could not be run at all. A non-zero exit is a
/// normal [`crate::runner::OperationResult`], never an `ExecutionError`.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("operation '{0}' has an empty command")]
    EmptyCommand(String),
    #[error("spawn failed for '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("{stream} of '{operation}' is not valid UTF-8")]
    Decode {
        operation: String,
        stream: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("precondition failed: {0}")]
    Precondition(String),
    #[error("operation '{name}' exited with code {exit_code}")]
    Operation { name: String, exit_code: i32 },
    #[error("execution error: {0}")]
    Execution(#[from] ExecutionError),
    #[error("{0}")]
    Unexpected(String),
    #[error("usage: {0}")]
    Usage(String),
}

impl WorkflowError {
    pub fn unexpected(err: impl std::fmt::Display) -> Self {
        Self::Unexpected(err.to_string())
    }
}
