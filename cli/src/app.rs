//! CLI assembly: merges config overrides, builds services, and dispatches
//! to the selected workflow.
use std::path::{Path, PathBuf};

use maint_core::api as core_api;
use maint_plugins::factory;

use crate::commands::cli::{Args, Commands};
use crate::commands::{cleanup, install, update};

/// Config as loaded from file and environment, with CLI flags applied last.
pub fn resolve_config(args: &Args) -> Result<core_api::AppConfig, core_api::CliError> {
    let mut cfg = match &args.config {
        Some(path) => core_api::load_from_path(path)
            .map(|cfg| core_api::apply_env_overrides(cfg, |k| std::env::var(k).ok())),
        None => core_api::load_default(),
    }
    .map_err(|e| core_api::CliError::Config(e.to_string()))?;

    if let Some(backend) = args.backend {
        cfg.backend.kind = backend.into();
    }
    Ok(cfg)
}

pub fn resolve_root(root: Option<&Path>) -> Result<PathBuf, core_api::CliError> {
    let cwd = std::env::current_dir()?;
    Ok(match root {
        Some(r) if r.is_absolute() => r.to_path_buf(),
        Some(r) => cwd.join(r),
        None => cwd,
    })
}

#[tracing::instrument(name = "cli.run_app", skip_all)]
pub async fn run_app(args: Args, cfg: core_api::AppConfig) -> Result<i32, core_api::CliError> {
    let services = factory::build_services(&cfg);
    let ctx = core_api::AppContext::new(cfg, services, core_api::Console::stdout());
    run_with_context(args, &ctx).await
}

pub async fn run_with_context(
    args: Args,
    ctx: &core_api::AppContext,
) -> Result<i32, core_api::CliError> {
    let root = resolve_root(args.root.as_deref())?;
    let project =
        core_api::ProjectContext::new(root, ctx.cfg().update.requirements_file.clone());
    tracing::debug!(
        root = %project.root().display(),
        backend = ctx.backend().name(),
        "dispatching"
    );
    let report_path = args.report.as_deref();

    match args.command {
        Commands::Cleanup => cleanup::handle_cleanup(ctx, &project, report_path),
        Commands::Install(install_args) => {
            install::handle_install(install_args, ctx, project, report_path).await
        }
        Commands::Update(update_args) => {
            update::handle_update(update_args, ctx, &project, report_path).await
        }
    }
}
