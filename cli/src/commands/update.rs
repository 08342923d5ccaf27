use maint_core::api as core_api;

use super::cli::UpdateArgs;
use super::finish;

pub async fn handle_update(
    args: UpdateArgs,
    ctx: &core_api::AppContext,
    project: &core_api::ProjectContext,
    report_path: Option<&std::path::Path>,
) -> Result<i32, core_api::CliError> {
    let action = match core_api::UpdateAction::from_flags(
        args.check,
        args.package,
        args.all,
        args.update_file,
    ) {
        Ok(action) => action,
        Err(e) => {
            tracing::warn!("rejected update invocation: {e}");
            for line in core_api::UPDATE_USAGE {
                ctx.console().line(line);
            }
            return Ok(1);
        }
    };

    let report = core_api::run_update(ctx, project, action).await;
    finish(&report, report_path)
}
