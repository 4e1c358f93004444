//! CLI orchestration layer
//!
//! Decoupled from clap so the workflow can be driven from tests.

pub mod orchestration;

pub use orchestration::{run_workflow, WorkflowArgs, WorkflowResult};
