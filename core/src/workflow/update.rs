use crate::backend::ExportPlan;
use crate::context::{AppContext, ProjectContext};
use crate::error::WorkflowError;
use crate::runner::{Orchestrator, RunReport, SequencePolicy};

use super::conclude;

pub const UPDATE_USAGE: &[&str] = &[
    "Specify exactly one action:",
    "  --check         list outdated packages",
    "  --package NAME  update one package",
    "  --all           update all packages",
    "  --update-file   regenerate the requirements file",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    Check,
    Package(String),
    All,
    ExportRequirements,
}

impl UpdateAction {
    /// Exactly one flag must be set. Zero or several is a usage error; no
    /// flag takes priority over another.
    pub fn from_flags(
        check: bool,
        package: Option<String>,
        all: bool,
        update_file: bool,
    ) -> Result<Self, WorkflowError> {
        let package = package.filter(|p| !p.trim().is_empty());
        let selected = [check, package.is_some(), all, update_file]
            .iter()
            .filter(|set| **set)
            .count();

        match selected {
            0 => Err(WorkflowError::Usage("no update action given".into())),
            1 => Ok(if check {
                Self::Check
            } else if let Some(name) = package {
                Self::Package(name.trim().to_string())
            } else if all {
                Self::All
            } else {
                Self::ExportRequirements
            }),
            _ => Err(WorkflowError::Usage(
                "update actions are mutually exclusive".into(),
            )),
        }
    }

    fn label(&self) -> String {
        match self {
            Self::Check => "update --check".to_string(),
            Self::Package(name) => format!("update --package {name}"),
            Self::All => "update --all".to_string(),
            Self::ExportRequirements => "update --update-file".to_string(),
        }
    }
}

#[tracing::instrument(name = "workflow.update", skip(ctx, project))]
pub async fn run_update(
    ctx: &AppContext,
    project: &ProjectContext,
    action: UpdateAction,
) -> RunReport {
    let mut report = RunReport::new(action.label());
    let outcome = update_steps(ctx, project, &action, &mut report).await;
    conclude(ctx.console(), report, outcome)
}

async fn update_steps(
    ctx: &AppContext,
    project: &ProjectContext,
    action: &UpdateAction,
    report: &mut RunReport,
) -> Result<(), WorkflowError> {
    let console = ctx.console();
    let backend = ctx.backend();
    let orchestrator = ctx.orchestrator();
    let label = report.workflow.clone();

    match action {
        UpdateAction::Check => {
            console.line("Checking for outdated packages...");
            let op = backend.list_outdated(project);
            let result = orchestrator.run_operation(&op).await?;
            if result.succeeded {
                console.line("Outdated packages:");
                console.line(result.stdout.trim_end());
            }
            report.push(result);
        }
        UpdateAction::Package(name) => {
            console.line(format!("Updating package: {name}"));
            let plan = backend.upgrade_package(project, name);
            let upgraded = orchestrator
                .run_sequence(&label, &plan.ops, plan.policy)
                .await;
            report.extend(upgraded);
            if report.overall_success {
                console.success(format!("Updated {name}"));
            }
        }
        UpdateAction::All => {
            console.line("Updating all packages...");
            let plan = backend
                .upgrade_all(project)
                .map_err(WorkflowError::unexpected)?;
            if plan.ops.is_empty() {
                console.line(format!(
                    "No packages listed in {}",
                    project.requirements_file()
                ));
                return Ok(());
            }
            let upgraded = orchestrator
                .run_sequence(&label, &plan.ops, plan.policy)
                .await;
            report.extend(upgraded);
            if report.overall_success {
                console.success("All packages upgraded");
            }
        }
        UpdateAction::ExportRequirements => {
            console.line(format!("Regenerating {}...", project.requirements_file()));
            export_requirements(&orchestrator, backend.export_requirements(project), report)
                .await?;
        }
    }
    Ok(())
}

async fn export_requirements(
    orchestrator: &Orchestrator,
    plan: ExportPlan,
    report: &mut RunReport,
) -> Result<(), WorkflowError> {
    let label = report.workflow.clone();
    match plan {
        ExportPlan::Command(op) => {
            let exported = orchestrator
                .run_sequence(&label, &[op], SequencePolicy::StopOnFailure)
                .await;
            report.extend(exported);
        }
        ExportPlan::Capture { op, target } => {
            let result = orchestrator.run_operation(&op).await?;
            let stdout = result.succeeded.then(|| result.stdout.clone());
            report.push(result);
            if let Some(content) = stdout {
                tokio::fs::write(&target, content).await.map_err(|e| {
                    WorkflowError::unexpected(format!("cannot write {}: {e}", target.display()))
                })?;
                orchestrator
                    .console()
                    .success(format!("Wrote {}", target.display()));
            }
        }
    }
    Ok(())
}
