//! Lumiforge Core - scaffolding engine for Lumina projects.
//!
//! This crate contains the domain model and the template-driven
//! scaffolding engine for the `lumiforge` tool, following a ports and
//! adapters split.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          lumiforge-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          ProjectScaffolder              │
//! │  (planner → generators → tree copy)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Filesystem port (trait)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   lumiforge-adapters (Infrastructure)   │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lumiforge_core::prelude::*;
//!
//! # fn demo(filesystem: Box<dyn Filesystem>) -> Result<(), ScaffoldError> {
//! let engine = EngineContext::from_env()?;
//! let scaffolder = ProjectScaffolder::new(filesystem);
//! let report = scaffolder.create_project(&engine, "/projects/demo".as_ref(), "My Game")?;
//! assert!(report.is_success());
//! # Ok(())
//! # }
//! ```

// Domain layer (project identity, engine context, artifacts)
pub mod domain;

// Scaffolding engine (planner, renderer, generators, orchestrator)
pub mod scaffold;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::domain::{
        ArtifactKind, EngineContext, GeneratedArtifact, ProjectSpec, sanitize_project_name,
    };
    pub use crate::scaffold::{
        Filesystem, ProjectScaffolder, ScaffoldError, ScaffoldReport, ScaffoldResult, ScaffoldStep,
        StepOutcome,
    };
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
