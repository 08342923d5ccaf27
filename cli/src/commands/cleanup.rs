use maint_core::api as core_api;

use super::finish;

pub fn handle_cleanup(
    ctx: &core_api::AppContext,
    project: &core_api::ProjectContext,
    report_path: Option<&std::path::Path>,
) -> Result<i32, core_api::CliError> {
    let report = core_api::run_cleanup(ctx.console(), &ctx.cfg().cleanup, project.root());
    finish(&report, report_path)
}
