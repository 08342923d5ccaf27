use crate::context::{AppContext, ProjectContext, SEARCH_PATH_VAR};
use crate::error::WorkflowError;
use crate::runner::{RunReport, SequencePolicy};

use super::conclude;
use super::probe::RuntimeVersion;

#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Also sync the development extras.
    pub dev: bool,
}

/// Version check, dependency sync, search-path setup, editable install and
/// optionally the dev extras. Stops at the first failure.
#[tracing::instrument(name = "workflow.install", skip_all, fields(dev = opts.dev))]
pub async fn run_install(
    ctx: &AppContext,
    project: ProjectContext,
    opts: InstallOptions,
) -> RunReport {
    let console = ctx.console();
    console.line("Installing project...");

    let mut report = RunReport::new("install");
    let outcome = install_steps(ctx, project, opts, &mut report).await;
    let report = conclude(console, report, outcome);

    if report.overall_success {
        console.line("");
        console.success("Install complete!");
        console.line("");
        for line in &ctx.cfg().install.usage_hint {
            console.line(line);
        }
    }
    report
}

async fn install_steps(
    ctx: &AppContext,
    project: ProjectContext,
    opts: InstallOptions,
    report: &mut RunReport,
) -> Result<(), WorkflowError> {
    let console = ctx.console();
    let backend = ctx.backend();
    let orchestrator = ctx.orchestrator();

    let min = RuntimeVersion::parse(&ctx.cfg().install.min_python)
        .map_err(|e| WorkflowError::unexpected(format!("invalid install.min_python: {e}")))?;
    let found = ctx
        .probe()
        .version()
        .await
        .map_err(|e| WorkflowError::unexpected(format!("cannot determine Python version: {e}")))?;
    tracing::debug!(probe = ctx.probe().name(), %found, "runtime probed");
    if found < min {
        return Err(WorkflowError::Precondition(format!(
            "Python {}.{} or newer is required (found {found})",
            min.major, min.minor
        )));
    }
    console.success(format!("Python version: {found}"));

    let synced = orchestrator
        .run_sequence(
            "install",
            &[backend.sync(&project)],
            SequencePolicy::StopOnFailure,
        )
        .await;
    report.extend(synced);
    if !report.overall_success {
        report.skipped.push(backend.install_editable(&project).name);
        if opts.dev {
            report.skipped.push(backend.sync_dev(&project).name);
        }
        return Ok(());
    }

    console.line("Configuring environment...");
    let project = project
        .with_search_path(std::env::var_os(SEARCH_PATH_VAR))
        .map_err(WorkflowError::unexpected)?;
    let search_path = project.search_path().unwrap_or_default().to_string();
    tracing::debug!(search_path = %search_path, "search path prepared");
    console.success("Environment configured");

    let mut ops = vec![backend
        .install_editable(&project)
        .with_env(SEARCH_PATH_VAR, search_path.clone())];
    if opts.dev {
        ops.push(backend.sync_dev(&project).with_env(SEARCH_PATH_VAR, search_path));
    }

    let installed = orchestrator
        .run_sequence("install", &ops, SequencePolicy::StopOnFailure)
        .await;
    report.extend(installed);
    Ok(())
}
