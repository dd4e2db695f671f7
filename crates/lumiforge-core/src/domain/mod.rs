//! Domain layer: project identity, engine context, and artifact model.
//!
//! Pure data and total functions only. Filesystem access happens behind
//! the [`crate::scaffold::Filesystem`] port; nothing here performs I/O
//! beyond reading the process environment once in
//! [`EngineContext::from_env`].

mod artifact;
mod name;
mod project;

pub use artifact::{ArtifactKind, GeneratedArtifact};
pub use name::sanitize_project_name;
pub use project::{ENGINE_DIR_ENV, EngineContext, ProjectSpec, engine_layout};
