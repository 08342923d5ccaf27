use async_trait::async_trait;

use crate::error::ExecutionError;

use super::types::{Operation, RawOutput};

/// Runs one operation to completion and hands back its raw output.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    fn name(&self) -> &str;
    async fn run(&self, op: &Operation) -> Result<RawOutput, ExecutionError>;
}
