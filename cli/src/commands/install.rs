use maint_core::api as core_api;

use super::cli::InstallArgs;
use super::finish;

pub async fn handle_install(
    args: InstallArgs,
    ctx: &core_api::AppContext,
    project: core_api::ProjectContext,
    report_path: Option<&std::path::Path>,
) -> Result<i32, core_api::CliError> {
    let opts = core_api::InstallOptions { dev: args.dev };
    let report = core_api::run_install(ctx, project, opts).await;
    finish(&report, report_path)
}
