mod console;
mod orchestrator;
mod output;
mod traits;
pub mod types;

pub use console::Console;
pub use orchestrator::{Orchestrator, SequencePolicy};
pub use output::decode_stream;
pub use traits::CommandRunner;
pub use types::{Operation, OperationResult, RawOutput, RunReport};
