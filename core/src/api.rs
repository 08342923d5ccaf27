//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `maint_core::api` instead of reaching into internal modules.

pub use crate::backend::requirements::parse_requirement_names;
pub use crate::backend::{BackendStrategy, ExportPlan, Plan};
pub use crate::config::{
    apply_env_overrides, get_maint_data_dir, load_default, load_from_path, AppConfig,
    BackendConfig, BackendKind, CleanupConfig, LoggingConfig,
};
pub use crate::context::{AppContext, ProjectContext, Services, SEARCH_PATH_VAR};
pub use crate::error::{CliError, ExecutionError, WorkflowError};
pub use crate::runner::{
    CommandRunner, Console, Operation, OperationResult, Orchestrator, RawOutput, RunReport,
    SequencePolicy,
};
pub use crate::workflow::{
    run_cleanup, run_install, run_update, InstallOptions, RuntimeProbe, RuntimeVersion,
    UpdateAction, UPDATE_USAGE,
};
