//! Project and engine identity.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::name::sanitize_project_name;
use crate::scaffold::ScaffoldError;

/// Environment variable naming the Lumina engine installation root.
pub const ENGINE_DIR_ENV: &str = "LUMINA_DIR";

/// Well-known paths inside an engine installation, relative to the
/// install root.
pub mod engine_layout {
    /// Solution template consumed by the build-config generator.
    pub const SOLUTION_TEMPLATE: &str = "Templates/Project/premake_solution_template.txt";

    /// Auxiliary tooling copied verbatim into every new project.
    pub const TOOLS_DIR: &str = "Tools";
}

/// Identity of the project being scaffolded.
///
/// Built once at the start of a run and immutable thereafter. The
/// sanitized name is derived deterministically from the raw name and is
/// guaranteed non-empty and whitespace-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSpec {
    raw_name: String,
    sanitized_name: String,
    root: PathBuf,
}

impl ProjectSpec {
    /// Create a project spec from user input.
    ///
    /// Fails with [`ScaffoldError::InvalidProjectName`] when sanitizing
    /// leaves nothing usable (empty or whitespace-only input).
    pub fn new(raw_name: impl Into<String>, root: impl Into<PathBuf>) -> Result<Self, ScaffoldError> {
        let raw_name = raw_name.into();
        let sanitized_name = sanitize_project_name(&raw_name);

        if sanitized_name.is_empty() {
            return Err(ScaffoldError::InvalidProjectName { raw: raw_name });
        }

        Ok(Self {
            raw_name,
            sanitized_name,
            root: root.into(),
        })
    }

    /// The name exactly as the user typed it.
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// Filesystem-safe project identifier.
    pub fn sanitized_name(&self) -> &str {
        &self.sanitized_name
    }

    /// Directory the project is scaffolded into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/Source/<name>`, home of the generated module files.
    pub fn module_source_dir(&self) -> PathBuf {
        self.root.join("Source").join(&self.sanitized_name)
    }

    /// `<root>/Game/Content`, the (initially empty) runtime asset tree.
    pub fn content_dir(&self) -> PathBuf {
        self.root.join("Game").join("Content")
    }
}

/// Resolved engine installation, passed explicitly to every component
/// that needs it. There is deliberately no ambient lookup after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineContext {
    install_dir: PathBuf,
}

impl EngineContext {
    /// Wrap an explicitly supplied engine install directory.
    ///
    /// Rejects empty paths; existence on disk is checked by the
    /// orchestrator before any mutation, via its filesystem port.
    pub fn new(install_dir: impl Into<PathBuf>) -> Result<Self, ScaffoldError> {
        let install_dir = install_dir.into();
        if install_dir.as_os_str().is_empty() {
            return Err(ScaffoldError::PreconditionMissing {
                detail: format!("engine directory is empty (set {ENGINE_DIR_ENV})"),
            });
        }
        Ok(Self { install_dir })
    }

    /// Resolve the engine root from the `LUMINA_DIR` environment
    /// variable. Absence is a fatal precondition for the whole run.
    pub fn from_env() -> Result<Self, ScaffoldError> {
        match std::env::var_os(ENGINE_DIR_ENV) {
            Some(value) if !value.is_empty() => Self::new(PathBuf::from(value)),
            _ => Err(ScaffoldError::PreconditionMissing {
                detail: format!("{ENGINE_DIR_ENV} is not set"),
            }),
        }
    }

    /// The engine installation root.
    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    /// Absolute path of the solution template inside this installation.
    pub fn solution_template_path(&self) -> PathBuf {
        self.install_dir.join(engine_layout::SOLUTION_TEMPLATE)
    }

    /// Absolute path of the `Tools/` directory inside this installation.
    pub fn tools_dir(&self) -> PathBuf {
        self.install_dir.join(engine_layout::TOOLS_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_sanitizes_and_keeps_raw() {
        let spec = ProjectSpec::new("My Game", "/projects").unwrap();
        assert_eq!(spec.raw_name(), "My Game");
        assert_eq!(spec.sanitized_name(), "My_Game");
        assert_eq!(spec.root(), Path::new("/projects"));
    }

    #[test]
    fn spec_rejects_whitespace_only_names() {
        assert!(matches!(
            ProjectSpec::new("   ", "/projects"),
            Err(ScaffoldError::InvalidProjectName { .. })
        ));
        assert!(ProjectSpec::new("", "/projects").is_err());
    }

    #[test]
    fn derived_directories() {
        let spec = ProjectSpec::new("Demo", "/p").unwrap();
        assert_eq!(spec.module_source_dir(), PathBuf::from("/p/Source/Demo"));
        assert_eq!(spec.content_dir(), PathBuf::from("/p/Game/Content"));
    }

    #[test]
    fn engine_context_rejects_empty_path() {
        assert!(matches!(
            EngineContext::new(""),
            Err(ScaffoldError::PreconditionMissing { .. })
        ));
    }

    #[test]
    fn engine_context_paths() {
        let engine = EngineContext::new("/opt/lumina").unwrap();
        assert_eq!(
            engine.solution_template_path(),
            PathBuf::from("/opt/lumina/Templates/Project/premake_solution_template.txt")
        );
        assert_eq!(engine.tools_dir(), PathBuf::from("/opt/lumina/Tools"));
    }
}
