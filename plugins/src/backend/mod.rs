pub mod pip;
pub mod uv;

pub use pip::PipBackendStrategy;
pub use uv::UvBackendStrategy;
