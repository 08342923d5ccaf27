use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub install: InstallConfig,

    #[serde(default)]
    pub cleanup: CleanupConfig,

    #[serde(default)]
    pub update: UpdateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default)]
    pub file: bool,

    /// EnvFilter string, e.g. "warn" or "maint_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. `~` is expanded.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: false,
            level: default_logging_level(),
            directory: None,
        }
    }
}

/// Package-manager family the install and update workflows target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Uv,
    Pip,
}

impl BackendKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uv => "uv",
            Self::Pip => "pip",
        }
    }
}

impl std::str::FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uv" => Ok(Self::Uv),
            "pip" => Ok(Self::Pip),
            other => Err(format!("unknown backend '{other}' (expected 'uv' or 'pip')")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub kind: BackendKind,

    /// Executable for the uv backend.
    #[serde(default = "default_uv_executable")]
    pub uv: String,

    /// Interpreter used by the pip backend (`python -m pip`) and by the
    /// install version check.
    #[serde(default = "default_python")]
    pub python: String,
}

fn default_uv_executable() -> String {
    "uv".to_string()
}

fn default_python() -> String {
    if cfg!(windows) {
        "python".to_string()
    } else {
        "python3".to_string()
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::default(),
            uv: default_uv_executable(),
            python: default_python(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Minimum interpreter version, "MAJOR.MINOR".
    #[serde(default = "default_min_python")]
    pub min_python: String,

    /// Lines printed after a successful install.
    #[serde(default = "default_usage_hint")]
    pub usage_hint: Vec<String>,
}

fn default_min_python() -> String {
    "3.7".to_string()
}

fn default_usage_hint() -> Vec<String> {
    vec![
        "Usage:".to_string(),
        "  python -m weread_exporter -b <book id> -o epub -o pdf".to_string(),
        String::new(),
        "Development install:".to_string(),
        "  maint install --dev".to_string(),
    ]
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            min_python: default_min_python(),
            usage_hint: default_usage_hint(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupConfig {
    /// Directories removed from the project root when present.
    #[serde(default = "default_cleanup_directories")]
    pub directories: Vec<String>,

    /// Directory name removed wherever it appears under the root.
    #[serde(default = "default_cache_dir_name")]
    pub cache_dir_name: String,

    /// Files removed from the project root when present.
    #[serde(default = "default_cleanup_files")]
    pub files: Vec<String>,
}

fn default_cleanup_directories() -> Vec<String> {
    ["cache", "output", "dist", "build"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_cache_dir_name() -> String {
    "__pycache__".to_string()
}

fn default_cleanup_files() -> Vec<String> {
    [
        "version.py",
        "version_file.txt",
        "main.py",
        "webpage.html",
        "screenshot.jpg",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl CleanupConfig {
    /// Checks that every target stays inside the project root and returns
    /// the compiled cache directory pattern.
    pub fn validate(&self) -> Result<glob::Pattern, String> {
        let name = self.cache_dir_name.as_str();
        if name.trim().is_empty() {
            return Err("cache_dir_name is empty".to_string());
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(format!("cache_dir_name '{name}' is not a single directory name"));
        }
        if name.chars().all(|c| matches!(c, '*' | '?')) {
            return Err(format!("cache_dir_name '{name}' matches every directory"));
        }
        let pattern = glob::Pattern::new(name)
            .map_err(|e| format!("cache_dir_name '{name}' is not a valid pattern: {e}"))?;

        for entry in &self.directories {
            check_inside_root("directories", entry)?;
        }
        for entry in &self.files {
            check_inside_root("files", entry)?;
        }
        Ok(pattern)
    }
}

fn check_inside_root(key: &str, entry: &str) -> Result<(), String> {
    let path = Path::new(entry);
    let relative = !entry.trim().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
    if relative {
        Ok(())
    } else {
        Err(format!("{key} entry '{entry}' is not a path inside the project"))
    }
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            directories: default_cleanup_directories(),
            cache_dir_name: default_cache_dir_name(),
            files: default_cleanup_files(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateConfig {
    #[serde(default = "default_requirements_file")]
    pub requirements_file: String,
}

fn default_requirements_file() -> String {
    "requirements.txt".to_string()
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            requirements_file: default_requirements_file(),
        }
    }
}
