//! Directory planning for a new project.

use tracing::debug;

use crate::domain::ProjectSpec;
use crate::scaffold::{Filesystem, ScaffoldError, ScaffoldResult};

/// Ensure the full directory tree a project needs exists:
/// the project root, `Source/<name>/`, and `Game/Content/`.
///
/// Idempotent: directories that already exist are not an error, and
/// parents are created as needed (the root does not have to pre-exist).
pub fn ensure_project_tree(fs: &dyn Filesystem, spec: &ProjectSpec) -> ScaffoldResult<()> {
    for dir in [
        spec.root().to_path_buf(),
        spec.module_source_dir(),
        spec.content_dir(),
    ] {
        debug!(dir = %dir.display(), "ensuring directory");
        fs.create_dir_all(&dir)
            .map_err(|source| ScaffoldError::DirectoryCreationFailed { path: dir, source })?;
    }
    Ok(())
}
