pub mod backend;
pub mod factory;
pub mod probe;
pub mod runner;
