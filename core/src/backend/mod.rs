pub mod requirements;

use std::path::PathBuf;

use anyhow::Result;

use crate::context::ProjectContext;
use crate::runner::{Operation, SequencePolicy};

/// Ordered operations plus the policy they run under.
#[derive(Debug, Clone)]
pub struct Plan {
    pub ops: Vec<Operation>,
    pub policy: SequencePolicy,
}

impl Plan {
    pub fn stop_on_failure(ops: Vec<Operation>) -> Self {
        Self {
            ops,
            policy: SequencePolicy::StopOnFailure,
        }
    }

    pub fn best_effort(ops: Vec<Operation>) -> Self {
        Self {
            ops,
            policy: SequencePolicy::BestEffort,
        }
    }
}

/// How the pinned-dependency manifest is regenerated.
#[derive(Debug, Clone)]
pub enum ExportPlan {
    /// The package manager writes the file itself.
    Command(Operation),
    /// The operation's stdout becomes the file content.
    Capture { op: Operation, target: PathBuf },
}

/// Package-manager family capability: builds the operations each workflow
/// step needs. Selected once at startup.
pub trait BackendStrategy: Send + Sync {
    fn name(&self) -> &str;

    fn sync(&self, ctx: &ProjectContext) -> Operation;

    fn sync_dev(&self, ctx: &ProjectContext) -> Operation;

    fn install_editable(&self, ctx: &ProjectContext) -> Operation;

    fn list_outdated(&self, ctx: &ProjectContext) -> Operation;

    fn upgrade_package(&self, ctx: &ProjectContext, package: &str) -> Plan;

    fn upgrade_all(&self, ctx: &ProjectContext) -> Result<Plan>;

    fn export_requirements(&self, ctx: &ProjectContext) -> ExportPlan;
}
