use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::backend::BackendStrategy;
use crate::config::AppConfig;
use crate::runner::{CommandRunner, Console, Orchestrator};
use crate::workflow::RuntimeProbe;

/// Environment variable carrying the module search path.
pub const SEARCH_PATH_VAR: &str = "PYTHONPATH";

#[derive(Clone)]
pub struct Services {
    pub runner: Arc<dyn CommandRunner>,
    pub backend: Arc<dyn BackendStrategy>,
    pub probe: Arc<dyn RuntimeProbe>,
}

#[derive(Clone)]
pub struct AppContext {
    cfg: AppConfig,
    services: Services,
    console: Console,
}

impl AppContext {
    pub fn new(cfg: AppConfig, services: Services, console: Console) -> Self {
        Self {
            cfg,
            services,
            console,
        }
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.cfg
    }

    pub fn backend(&self) -> &dyn BackendStrategy {
        self.services.backend.as_ref()
    }

    pub fn probe(&self) -> &dyn RuntimeProbe {
        self.services.probe.as_ref()
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn orchestrator(&self) -> Orchestrator {
        Orchestrator::new(self.services.runner.clone(), self.console.clone())
    }
}

/// Where a workflow operates. Passed explicitly to every step that needs the
/// project location instead of mutating process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    root: PathBuf,
    requirements_file: String,
    search_path: Option<String>,
}

impl ProjectContext {
    pub fn new(root: impl Into<PathBuf>, requirements_file: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            requirements_file: requirements_file.into(),
            search_path: None,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Requirements file as configured, relative to the root for commands
    /// that run there.
    pub fn requirements_file(&self) -> &str {
        &self.requirements_file
    }

    pub fn requirements_path(&self) -> PathBuf {
        self.root.join(&self.requirements_file)
    }

    pub fn search_path(&self) -> Option<&str> {
        self.search_path.as_deref()
    }

    /// Prepends the project root to `existing` unless it is already listed.
    pub fn with_search_path(mut self, existing: Option<OsString>) -> anyhow::Result<Self> {
        let mut entries: Vec<PathBuf> = existing
            .as_deref()
            .map(|v| std::env::split_paths(v).collect())
            .unwrap_or_default();
        if !entries.iter().any(|p| p == &self.root) {
            entries.insert(0, self.root.clone());
        }
        let joined = std::env::join_paths(entries)
            .map_err(|e| anyhow::anyhow!("cannot build {SEARCH_PATH_VAR}: {e}"))?;
        self.search_path = Some(joined.to_string_lossy().into_owned());
        Ok(self)
    }
}
