use anyhow::Result;

use maint_core::api as core_api;
use maint_core::api::{ExportPlan, Operation, Plan, ProjectContext};

/// `uv` project workflow: the lock file is the source of truth and
/// `uv sync` brings the environment in line with it.
pub struct UvBackendStrategy {
    exe: String,
}

impl UvBackendStrategy {
    pub fn new(exe: impl Into<String>) -> Self {
        Self { exe: exe.into() }
    }

    fn op(&self, name: &str, args: &[&str]) -> Operation {
        let argv = std::iter::once(self.exe.as_str()).chain(args.iter().copied());
        Operation::new(name, argv)
    }
}

impl core_api::BackendStrategy for UvBackendStrategy {
    fn name(&self) -> &str {
        "uv"
    }

    fn sync(&self, ctx: &ProjectContext) -> Operation {
        self.op("Installing dependencies", &["sync"])
            .on_success("Dependencies installed")
            .on_failure("Dependency install failed")
            .with_cwd(ctx.root())
    }

    fn sync_dev(&self, ctx: &ProjectContext) -> Operation {
        self.op("Installing development dependencies", &["sync", "--extra", "dev"])
            .on_success("Development dependencies installed")
            .on_failure("Development dependency install failed")
            .with_cwd(ctx.root())
    }

    fn install_editable(&self, ctx: &ProjectContext) -> Operation {
        self.op("Installing package in development mode", &["pip", "install", "-e", "."])
            .on_success("Package installed")
            .on_failure("Package install failed")
            .with_cwd(ctx.root())
    }

    fn list_outdated(&self, ctx: &ProjectContext) -> Operation {
        self.op("Listing outdated packages", &["pip", "list", "--outdated"])
            .on_success("Outdated check finished")
            .on_failure("Outdated check failed")
            .with_cwd(ctx.root())
    }

    fn upgrade_package(&self, ctx: &ProjectContext, package: &str) -> Plan {
        Plan::stop_on_failure(vec![
            self.op(&format!("Adding {package}"), &["add", package])
                .on_success(format!("Added {package}"))
                .on_failure(format!("Updating {package} failed"))
                .with_cwd(ctx.root()),
            self.op("Syncing dependencies", &["sync"])
                .on_success("Dependencies synced")
                .on_failure("Dependency sync failed")
                .with_cwd(ctx.root()),
        ])
    }

    fn upgrade_all(&self, ctx: &ProjectContext) -> Result<Plan> {
        Ok(Plan::stop_on_failure(vec![
            self.op("Upgrading lock file", &["lock", "--upgrade"])
                .on_success("Lock file regenerated")
                .on_failure("Lock file generation failed")
                .with_cwd(ctx.root()),
            self.op("Syncing dependencies", &["sync"])
                .on_success("Dependencies upgraded and synced")
                .on_failure("Dependency sync failed")
                .with_cwd(ctx.root()),
        ]))
    }

    fn export_requirements(&self, ctx: &ProjectContext) -> ExportPlan {
        let target = ctx.requirements_file();
        ExportPlan::Command(
            self.op(&format!("Exporting {target}"), &["export", "-o", target])
                .on_success(format!("{target} exported from the lock file"))
                .on_failure("Export failed")
                .with_cwd(ctx.root()),
        )
    }
}
