//! Artifacts produced by a scaffolding run.

use std::path::PathBuf;

use serde::Serialize;

/// What kind of thing a generator produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Directory,
    ProjectFile,
    BuildFile,
    SourceFile,
    HeaderFile,
    Script,
    CopiedTree,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Directory => "directory",
            Self::ProjectFile => "project file",
            Self::BuildFile => "build file",
            Self::SourceFile => "source file",
            Self::HeaderFile => "header file",
            Self::Script => "script",
            Self::CopiedTree => "copied tree",
        };
        write!(f, "{s}")
    }
}

/// Record of a single artifact written by a generator.
///
/// Artifacts are written exactly once and never read back; the record
/// carries the target path for reporting, not the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

impl GeneratedArtifact {
    pub fn new(kind: ArtifactKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}
