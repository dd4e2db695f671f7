//! Scaffolding errors.
//!
//! One variant per failure class in the engine. Step-level failures
//! (`DirectoryCreationFailed`, `ArtifactWriteFailed`, `CopyFailed`,
//! `TemplateNotFound`) are recorded per step in the report; the
//! precondition variants abort a run before any mutation.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ENGINE_DIR_ENV;

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Root error type for scaffolding operations.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The engine installation is not configured or does not exist.
    /// Fatal: reported before anything is written.
    #[error("engine installation not found: {detail}")]
    PreconditionMissing { detail: String },

    /// Sanitizing the project name left nothing usable.
    /// Fatal: a project needs a non-empty identity.
    #[error("invalid project name {raw:?}: sanitizes to an empty string")]
    InvalidProjectName { raw: String },

    /// A template resource is missing or unreadable.
    #[error("template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    /// A directory could not be created.
    #[error("failed to create directory {path}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be written.
    #[error("failed to write {path}")]
    ArtifactWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The auxiliary tool tree could not be copied.
    #[error("failed to copy {src} to {dst}")]
    CopyFailed {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PreconditionMissing { .. } => vec![
                format!("Set {ENGINE_DIR_ENV} to your Lumina installation directory"),
                "Run 'lumiforge doctor' to verify the installation".into(),
            ],
            Self::InvalidProjectName { raw } => vec![
                format!("'{raw}' contains no usable characters"),
                "Use letters, digits, and underscores".into(),
            ],
            Self::TemplateNotFound { path } => vec![
                format!("Expected template at: {}", path.display()),
                "Your engine installation may be incomplete or outdated".into(),
                "Run 'lumiforge doctor' to verify the installation".into(),
            ],
            Self::DirectoryCreationFailed { path, .. }
            | Self::ArtifactWriteFailed { path, .. } => vec![
                format!("Failed path: {}", path.display()),
                "Check write permissions and available disk space".into(),
            ],
            Self::CopyFailed { dst, .. } => vec![
                format!("Destination: {}", dst.display()),
                "The destination must not already exist (no merging)".into(),
                "Check that the engine's Tools/ directory is readable".into(),
            ],
        }
    }

    /// Error category for display styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PreconditionMissing { .. } => ErrorCategory::Configuration,
            Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::DirectoryCreationFailed { .. }
            | Self::ArtifactWriteFailed { .. }
            | Self::CopyFailed { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precondition_suggestions_name_the_env_var() {
        let err = ScaffoldError::PreconditionMissing {
            detail: "unset".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("LUMINA_DIR")));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn template_not_found_is_not_found() {
        let err = ScaffoldError::TemplateNotFound {
            path: PathBuf::from("/e/t.txt"),
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.to_string().contains("/e/t.txt"));
    }

    #[test]
    fn write_failure_carries_path_and_cause() {
        let err = ScaffoldError::ArtifactWriteFailed {
            path: PathBuf::from("/p/x.h"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/p/x.h"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
