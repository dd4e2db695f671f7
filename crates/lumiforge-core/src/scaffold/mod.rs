//! The template-driven scaffolding engine.
//!
//! Layout mirrors the run itself: the [`ProjectScaffolder`] sequences
//! the directory planner, the artifact generators, and the tree copy,
//! all through the [`Filesystem`] port, and records the outcome of each
//! step in a [`ScaffoldReport`].

pub mod error;
mod generators;
mod orchestrator;
mod planner;
pub mod ports;
mod report;
pub mod template;

pub use error::{ErrorCategory, ScaffoldError, ScaffoldResult};
pub use generators::{
    generate_build_config, generate_launcher_script, generate_module_header,
    generate_module_source, generate_project_descriptor,
};
pub use orchestrator::ProjectScaffolder;
pub use planner::ensure_project_tree;
pub use ports::Filesystem;
pub use report::{ScaffoldReport, ScaffoldStep, StepOutcome, StepRecord, StepStatus, StepSummary};
