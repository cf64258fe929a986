//! Core of the mass generation simulation
//!
//! This module contains:
//! - Prompt template rendering
//! - Artifact synthesis and identifier derivation
//! - The fixed-shape batch summary
//! - The run pipeline tying them together

mod artifact;
mod simulation;
mod summary;
mod template;

pub use artifact::*;
pub use simulation::*;
pub use summary::*;
pub use template::*;
