use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use maint_core::api::BackendKind;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendArg {
    Uv,
    Pip,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Uv => BackendKind::Uv,
            BackendArg::Pip => BackendKind::Pip,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "maint", version, about = "Project maintenance: cleanup, install, update")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Package-manager backend; overrides config and MAINT_BACKEND.
    #[arg(long, value_enum, global = true)]
    pub backend: Option<BackendArg>,

    /// Config file to use instead of ~/.maint/config.toml or ./maint.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write the run report as JSON to this path.
    #[arg(long, global = true)]
    pub report: Option<PathBuf>,

    /// Project root (defaults to the current directory).
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct InstallArgs {
    /// Also install the development extras.
    #[arg(long)]
    pub dev: bool,
}

/// The actions are validated as mutually exclusive after parsing so that a
/// bad combination prints the update usage and exits 1.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct UpdateArgs {
    /// List outdated packages without changing anything.
    #[arg(long)]
    pub check: bool,

    /// Update a single package.
    #[arg(long, value_name = "NAME")]
    pub package: Option<String>,

    /// Update all packages.
    #[arg(long)]
    pub all: bool,

    /// Regenerate the requirements file.
    #[arg(long = "update-file")]
    pub update_file: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove caches, build output and scratch files.
    Cleanup,
    /// Install dependencies and the package in development mode.
    Install(InstallArgs),
    /// Check or update dependencies.
    Update(UpdateArgs),
}
