use std::path::{Path, PathBuf};

use super::types::AppConfig;

/// Get the default maint data directory: ~/.maint
pub fn get_maint_data_dir() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(home.join(".maint"))
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.maint/config.toml
    let user_config = get_maint_data_dir()?.join("config.toml");

    // Priority 2: ./maint.toml (current directory)
    let local_config = Path::new("maint.toml");

    let cfg = if user_config.exists() {
        load_from_path(&user_config)?
    } else if local_config.exists() {
        load_from_path(local_config)?
    } else {
        AppConfig::default()
    };

    Ok(apply_env_overrides(cfg, |key| std::env::var(key).ok()))
}

pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let cfg = toml::from_str::<AppConfig>(&s)
        .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))?;
    Ok(cfg)
}

/// Environment variable overrides (highest priority below CLI flags).
/// Unparseable backend names are ignored with a warning.
pub fn apply_env_overrides<F>(mut cfg: AppConfig, lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_empty("MAINT_BACKEND") {
        match v.parse() {
            Ok(kind) => cfg.backend.kind = kind,
            Err(e) => tracing::warn!("ignoring MAINT_BACKEND: {e}"),
        }
    }
    if let Some(v) = non_empty("MAINT_PYTHON") {
        cfg.backend.python = v;
    }
    if let Some(v) = non_empty("MAINT_LOG_LEVEL") {
        cfg.logging.level = v;
    }

    cfg
}
