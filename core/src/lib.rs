//! Command orchestration core: runs external operations in sequence and
//! aggregates their outcome for the cleanup, install and update workflows.

pub mod api;
pub mod backend;
pub mod config;
pub mod context;
pub mod error;
pub mod runner;
pub mod workflow;
