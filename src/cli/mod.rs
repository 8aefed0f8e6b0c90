//! Command-line workflow

pub mod orchestration;

pub use orchestration::{run_tag_workflow, run_with_repository, TagWorkflowArgs, WorkflowOutcome};
