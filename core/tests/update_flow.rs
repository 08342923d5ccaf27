mod common;

use common::{context, FakeRunner, FixedProbe};
use maint_core::api::{run_update, ProjectContext, UpdateAction, WorkflowError};
use pretty_assertions::assert_eq;

fn project(root: &std::path::Path) -> ProjectContext {
    ProjectContext::new(root, "requirements.txt")
}

#[tokio::test]
async fn check_prints_outdated_listing_and_mutates_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let runner = FakeRunner::new();
    runner.respond("list outdated", 0, "requests 2.30.0 2.31.0\n", "");
    let ctx = context(runner.clone(), FixedProbe::version(3, 11));

    let report = run_update(&ctx, &project(tmp.path()), UpdateAction::Check).await;

    assert_eq!(report.exit_code(), 0);
    assert_eq!(runner.call_names(), vec!["list outdated"]);
    assert!(ctx
        .console()
        .captured()
        .contains("Outdated packages:\nrequests 2.30.0 2.31.0\n"));
    assert!(!tmp.path().join("requirements.txt").exists());
}

#[tokio::test]
async fn failed_add_skips_the_resync() {
    let tmp = tempfile::tempdir().unwrap();
    let runner = FakeRunner::new();
    runner.respond("add", 1, "", "No solution found");
    let ctx = context(runner.clone(), FixedProbe::version(3, 11));

    let report = run_update(
        &ctx,
        &project(tmp.path()),
        UpdateAction::Package("requests".into()),
    )
    .await;

    assert_eq!(report.exit_code(), 1);
    assert_eq!(runner.call_names(), vec!["add"]);
    assert_eq!(runner.calls()[0].command, vec!["pm", "add", "requests"]);
}

#[tokio::test]
async fn update_all_from_requirements_continues_past_failures() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join("requirements.txt"),
        "requests==2.31.0\npyppeteer>=1.0\nPyYAML\n",
    )
    .unwrap();
    let runner = FakeRunner::new();
    runner.respond("upgrade pyppeteer", 1, "", "network unreachable");
    let ctx = context(runner.clone(), FixedProbe::version(3, 11));

    let report = run_update(&ctx, &project(tmp.path()), UpdateAction::All).await;

    assert_eq!(report.exit_code(), 1);
    assert_eq!(
        runner.call_names(),
        vec!["upgrade requests", "upgrade pyppeteer", "upgrade PyYAML"]
    );
}

#[tokio::test]
async fn update_all_without_requirements_file_is_unexpected_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let runner = FakeRunner::new();
    let ctx = context(runner.clone(), FixedProbe::version(3, 11));

    let report = run_update(&ctx, &project(tmp.path()), UpdateAction::All).await;

    assert_eq!(report.exit_code(), 1);
    assert!(runner.calls().is_empty());
    assert_eq!(report.errors.len(), 1);
    assert!(ctx.console().captured().contains("Error during update --all"));
}

#[tokio::test]
async fn export_writes_captured_freeze_output() {
    let tmp = tempfile::tempdir().unwrap();
    let runner = FakeRunner::new();
    runner.respond("freeze", 0, "requests==2.31.0\nPyYAML==6.0.1\n", "");
    let ctx = context(runner.clone(), FixedProbe::version(3, 11));

    let report = run_update(
        &ctx,
        &project(tmp.path()),
        UpdateAction::ExportRequirements,
    )
    .await;

    assert_eq!(report.exit_code(), 0);
    let written = std::fs::read_to_string(tmp.path().join("requirements.txt")).unwrap();
    assert_eq!(written, "requests==2.31.0\nPyYAML==6.0.1\n");
}

#[tokio::test]
async fn failed_freeze_leaves_existing_file_alone() {
    let tmp = tempfile::tempdir().unwrap();
    let target = tmp.path().join("requirements.txt");
    std::fs::write(&target, "keep==1.0\n").unwrap();
    let runner = FakeRunner::new();
    runner.respond("freeze", 1, "partial==0.1\n", "pip crashed");
    let ctx = context(runner.clone(), FixedProbe::version(3, 11));

    let report = run_update(
        &ctx,
        &project(tmp.path()),
        UpdateAction::ExportRequirements,
    )
    .await;

    assert_eq!(report.exit_code(), 1);
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "keep==1.0\n");
}

#[test]
fn check_together_with_all_is_rejected() {
    let err = UpdateAction::from_flags(true, None, true, false).unwrap_err();
    assert!(matches!(err, WorkflowError::Usage(_)));
}
