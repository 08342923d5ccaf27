//! Top-level actions. Each entry point returns a finished [`RunReport`];
//! nothing escapes as an error.

mod cleanup;
mod install;
mod probe;
mod update;

pub use cleanup::run_cleanup;
pub use install::{run_install, InstallOptions};
pub use probe::{RuntimeProbe, RuntimeVersion};
pub use update::{run_update, UpdateAction, UPDATE_USAGE};

use crate::error::WorkflowError;
use crate::runner::{Console, RunReport};

/// First operation failure in the report, if any.
pub fn first_failure(report: &RunReport) -> Option<WorkflowError> {
    report
        .results
        .iter()
        .find(|r| !r.succeeded)
        .map(|r| WorkflowError::Operation {
            name: r.name.clone(),
            exit_code: r.exit_code,
        })
}

/// Converts the outcome of a workflow body into the finished report,
/// printing precondition and unexpected failures.
fn conclude(
    console: &Console,
    mut report: RunReport,
    outcome: Result<(), WorkflowError>,
) -> RunReport {
    if let Err(e) = outcome {
        match &e {
            WorkflowError::Precondition(msg) => console.failure(format!("Error: {msg}")),
            _ => console.failure(format!("Error during {}: {e}", report.workflow)),
        }
        tracing::error!(workflow = %report.workflow, "workflow aborted: {e}");
        report.record_error(e);
    } else if let Some(failure) = first_failure(&report) {
        tracing::warn!(workflow = %report.workflow, "{failure}");
    }

    if !report.skipped.is_empty() {
        tracing::info!(skipped = ?report.skipped, "operations did not run");
    }

    report.finish()
}
