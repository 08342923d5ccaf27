#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use maint_core::api::{
    parse_requirement_names, AppConfig, AppContext, BackendStrategy, CommandRunner, Console,
    ExecutionError, ExportPlan, Operation, Plan, ProjectContext, RawOutput, RuntimeProbe,
    RuntimeVersion, Services,
};

/// Scripted runner: answers by operation name and records every call.
#[derive(Default)]
pub struct FakeRunner {
    outputs: Mutex<HashMap<String, RawOutput>>,
    spawn_failures: Mutex<HashSet<String>>,
    calls: Mutex<Vec<Operation>>,
}

impl FakeRunner {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, name: &str, exit_code: i32, stdout: &str, stderr: &str) {
        self.respond_bytes(name, exit_code, stdout.as_bytes(), stderr.as_bytes());
    }

    pub fn respond_bytes(&self, name: &str, exit_code: i32, stdout: &[u8], stderr: &[u8]) {
        self.outputs.lock().unwrap().insert(
            name.to_string(),
            RawOutput {
                exit_code,
                stdout: stdout.to_vec(),
                stderr: stderr.to_vec(),
            },
        );
    }

    pub fn fail_spawn(&self, name: &str) {
        self.spawn_failures.lock().unwrap().insert(name.to_string());
    }

    pub fn calls(&self) -> Vec<Operation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_names(&self) -> Vec<String> {
        self.calls().into_iter().map(|op| op.name).collect()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    fn name(&self) -> &str {
        "fake"
    }

    async fn run(&self, op: &Operation) -> Result<RawOutput, ExecutionError> {
        self.calls.lock().unwrap().push(op.clone());
        if self.spawn_failures.lock().unwrap().contains(&op.name) {
            return Err(ExecutionError::Spawn {
                program: op.program().unwrap_or_default().to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }
        Ok(self
            .outputs
            .lock()
            .unwrap()
            .get(&op.name)
            .cloned()
            .unwrap_or_default())
    }
}

pub struct FixedProbe(pub Result<RuntimeVersion, String>);

impl FixedProbe {
    pub fn version(major: u32, minor: u32) -> Arc<Self> {
        Arc::new(Self(Ok(RuntimeVersion::new(major, minor, 0))))
    }

    pub fn failing(msg: &str) -> Arc<Self> {
        Arc::new(Self(Err(msg.to_string())))
    }
}

#[async_trait]
impl RuntimeProbe for FixedProbe {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn version(&self) -> anyhow::Result<RuntimeVersion> {
        self.0.clone().map_err(|e| anyhow::anyhow!(e))
    }
}

/// Backend with short operation names so tests can script them.
pub struct ScriptedBackend;

impl BackendStrategy for ScriptedBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    fn sync(&self, ctx: &ProjectContext) -> Operation {
        Operation::new("sync", ["pm", "sync"]).with_cwd(ctx.root())
    }

    fn sync_dev(&self, ctx: &ProjectContext) -> Operation {
        Operation::new("sync dev", ["pm", "sync", "--extra", "dev"]).with_cwd(ctx.root())
    }

    fn install_editable(&self, ctx: &ProjectContext) -> Operation {
        Operation::new("install editable", ["pm", "install", "-e", "."]).with_cwd(ctx.root())
    }

    fn list_outdated(&self, _ctx: &ProjectContext) -> Operation {
        Operation::new("list outdated", ["pm", "list", "--outdated"])
    }

    fn upgrade_package(&self, _ctx: &ProjectContext, package: &str) -> Plan {
        Plan::stop_on_failure(vec![
            Operation::new("add", ["pm", "add", package]),
            Operation::new("sync", ["pm", "sync"]),
        ])
    }

    fn upgrade_all(&self, ctx: &ProjectContext) -> anyhow::Result<Plan> {
        let content = std::fs::read_to_string(ctx.requirements_path())?;
        Ok(Plan::best_effort(
            parse_requirement_names(&content)
                .into_iter()
                .map(|name| Operation::new(format!("upgrade {name}"), ["pm", "upgrade", name.as_str()]))
                .collect(),
        ))
    }

    fn export_requirements(&self, ctx: &ProjectContext) -> ExportPlan {
        ExportPlan::Capture {
            op: Operation::new("freeze", ["pm", "freeze"]),
            target: ctx.requirements_path(),
        }
    }
}

pub fn context(runner: Arc<FakeRunner>, probe: Arc<FixedProbe>) -> AppContext {
    AppContext::new(
        AppConfig::default(),
        Services {
            runner,
            backend: Arc::new(ScriptedBackend),
            probe,
        },
        Console::buffer(),
    )
}
