//! Mass content generation simulation.
//!
//! Loads a session descriptor and a task list, renders each task's prompt template,
//! synthesizes one artifact per task with a deterministic identifier, and reports
//! the batch as a human-readable trace closed by a summary table.

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod errors;
pub mod utils;

pub use config::{load_session, load_tasks, GenerationParams, Guardrails, Session, Task};
pub use crate::core::{
    artifact_id_for, missing_variables, render_prompt, run_simulation, synthesize_artifact,
    template_placeholders, Artifact, ArtifactStatus, Content, Provenance, Reviewer, RunReport,
    Summary, SummaryStatus,
};
pub use errors::{Error, Result};
