use std::sync::Arc;

use maint_core::api::{
    AppConfig, BackendConfig, BackendKind, BackendStrategy, CommandRunner, RuntimeProbe, Services,
};

use crate::backend::{PipBackendStrategy, UvBackendStrategy};
use crate::probe::InterpreterProbe;
use crate::runner::ProcessRunner;

pub fn build_runner() -> Arc<dyn CommandRunner> {
    Arc::new(ProcessRunner::new())
}

pub fn build_backend(cfg: &BackendConfig) -> Arc<dyn BackendStrategy> {
    match cfg.kind {
        BackendKind::Uv => Arc::new(UvBackendStrategy::new(cfg.uv.clone())),
        BackendKind::Pip => Arc::new(PipBackendStrategy::new(cfg.python.clone())),
    }
}

pub fn build_probe(cfg: &BackendConfig) -> Arc<dyn RuntimeProbe> {
    Arc::new(InterpreterProbe::new(cfg.python.clone()))
}

pub fn build_services(cfg: &AppConfig) -> Services {
    let backend = build_backend(&cfg.backend);
    let probe = build_probe(&cfg.backend);
    tracing::debug!(
        kind = cfg.backend.kind.as_str(),
        backend = backend.name(),
        probe = probe.name(),
        "services built"
    );
    Services {
        runner: build_runner(),
        backend,
        probe,
    }
}
