#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use maint_core::api::{
    AppConfig, AppContext, CommandRunner, Console, ExecutionError, Operation, RawOutput,
    RuntimeProbe, RuntimeVersion, Services,
};
use maint_plugins::factory;

/// Records operations and reports success for all of them.
#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<Vec<String>>>,
}

impl RecordingRunner {
    pub fn commands(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    fn name(&self) -> &str {
        "recording"
    }

    async fn run(&self, op: &Operation) -> Result<RawOutput, ExecutionError> {
        self.calls.lock().unwrap().push(op.command.clone());
        Ok(RawOutput::default())
    }
}

pub struct Py311;

#[async_trait]
impl RuntimeProbe for Py311 {
    fn name(&self) -> &str {
        "py311"
    }

    async fn version(&self) -> anyhow::Result<RuntimeVersion> {
        Ok(RuntimeVersion::new(3, 11, 0))
    }
}

/// Context with the real backend for `cfg` but a recording runner.
pub fn context(cfg: AppConfig) -> (AppContext, Arc<RecordingRunner>) {
    let runner = Arc::new(RecordingRunner::default());
    let services = Services {
        runner: runner.clone(),
        backend: factory::build_backend(&cfg.backend),
        probe: Arc::new(Py311),
    };
    (AppContext::new(cfg, services, Console::buffer()), runner)
}
