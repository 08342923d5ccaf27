use anyhow::{Context, Result};

use maint_core::api as core_api;
use maint_core::api::{parse_requirement_names, ExportPlan, Operation, Plan, ProjectContext};

/// Plain `pip` workflow through `python -m pip`: the requirements file is
/// the manifest and `pip freeze` regenerates it.
pub struct PipBackendStrategy {
    python: String,
}

impl PipBackendStrategy {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    fn op(&self, name: &str, args: &[&str]) -> Operation {
        let argv = [self.python.as_str(), "-m", "pip"]
            .into_iter()
            .chain(args.iter().copied());
        Operation::new(name, argv)
    }

    fn upgrade_op(&self, ctx: &ProjectContext, package: &str) -> Operation {
        self.op(&format!("Upgrading {package}"), &["install", "--upgrade", package])
            .on_success(format!("Upgraded {package}"))
            .on_failure(format!("Updating {package} failed"))
            .with_cwd(ctx.root())
    }
}

impl core_api::BackendStrategy for PipBackendStrategy {
    fn name(&self) -> &str {
        "pip"
    }

    fn sync(&self, ctx: &ProjectContext) -> Operation {
        self.op(
            "Installing dependencies",
            &["install", "-r", ctx.requirements_file()],
        )
        .on_success("Dependencies installed")
        .on_failure("Dependency install failed")
        .with_cwd(ctx.root())
    }

    fn sync_dev(&self, ctx: &ProjectContext) -> Operation {
        self.op("Installing development dependencies", &["install", "-e", ".[dev]"])
            .on_success("Development dependencies installed")
            .on_failure("Development dependency install failed")
            .with_cwd(ctx.root())
    }

    fn install_editable(&self, ctx: &ProjectContext) -> Operation {
        self.op("Installing package in development mode", &["install", "-e", "."])
            .on_success("Package installed")
            .on_failure("Package install failed")
            .with_cwd(ctx.root())
    }

    fn list_outdated(&self, ctx: &ProjectContext) -> Operation {
        self.op("Listing outdated packages", &["list", "--outdated"])
            .on_success("Outdated check finished")
            .on_failure("Outdated check failed")
            .with_cwd(ctx.root())
    }

    fn upgrade_package(&self, ctx: &ProjectContext, package: &str) -> Plan {
        Plan::stop_on_failure(vec![self.upgrade_op(ctx, package)])
    }

    fn upgrade_all(&self, ctx: &ProjectContext) -> Result<Plan> {
        let path = ctx.requirements_path();
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let ops = parse_requirement_names(&content)
            .iter()
            .map(|name| self.upgrade_op(ctx, name))
            .collect();
        Ok(Plan::best_effort(ops))
    }

    fn export_requirements(&self, ctx: &ProjectContext) -> ExportPlan {
        ExportPlan::Capture {
            op: self
                .op("Freezing installed packages", &["freeze"])
                .on_success("Installed versions captured")
                .on_failure("Freeze failed")
                .with_cwd(ctx.root()),
            target: ctx.requirements_path(),
        }
    }
}
