pub mod cleanup;
pub mod cli;
pub mod install;
pub mod update;

use std::path::Path;

use maint_core::api as core_api;

/// Writes the report when requested and maps it to the process exit code.
pub(crate) fn finish(
    report: &core_api::RunReport,
    report_path: Option<&Path>,
) -> Result<i32, core_api::CliError> {
    if let Some(path) = report_path {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| core_api::CliError::Anyhow(e.into()))?;
        std::fs::write(path, json)?;
        tracing::debug!(path = %path.display(), "report written");
    }
    tracing::info!(
        workflow = %report.workflow,
        run_id = %report.run_id,
        success = report.overall_success,
        "workflow finished"
    );
    Ok(report.exit_code())
}
