//! Artifact generators.
//!
//! Each generator produces exactly one output file for the new project.
//! Generators are independent of each other; they only assume the
//! directory planner has run. The module-file generators also create
//! their own parent directory so they survive a partial tree.
//!
//! Boilerplate that embeds the project name is kept as embedded
//! templates and rendered through [`template::substitute`], the same
//! mechanism used for the engine-supplied solution template.

use std::path::Path;

use tracing::info;

use crate::domain::{ArtifactKind, EngineContext, GeneratedArtifact, ProjectSpec};
use crate::scaffold::template;
use crate::scaffold::{Filesystem, ScaffoldError, ScaffoldResult};

/// Extension of the project descriptor marker file.
pub const PROJECT_FILE_EXTENSION: &str = "lproject";

/// Descriptor content. The engine currently only checks that the file
/// exists; no schema is defined yet.
const PROJECT_DESCRIPTOR_CONTENT: &str = "Testing";

/// C++ module header boilerplate, parameterized on the project name.
const MODULE_HEADER_TEMPLATE: &str = r#"#pragma once
#include "Core/Module/ModuleInterface.h"

// This is your core game module that the engine loads.
class F$PROJECT_NAME : public Lumina::IModuleInterface
{
    //...
};
"#;

/// C++ module source boilerplate, parameterized on the project name.
const MODULE_SOURCE_TEMPLATE: &str = r#"#include "$PROJECT_NAME.h"
#include "Core/Module/ModuleManager.h"

// Boilerplate module discovery and implementation.
IMPLEMENT_MODULE(F$PROJECT_NAME, "$PROJECT_NAME")
"#;

/// Helper script dropped at the project root. Runs the engine-shipped
/// premake binary and waits for acknowledgement, nothing more.
const LAUNCHER_SCRIPT_CONTENT: &str = r#"import subprocess


def generate_project():
    # Call premake5 to generate Visual Studio solution
    subprocess.call(["Tools/premake5.exe", "vs2022"])

    input("Press Enter to continue...")


if __name__ == "__main__":
    generate_project()
"#;

/// Write the `<name>.lproject` marker at the project root.
pub fn generate_project_descriptor(
    fs: &dyn Filesystem,
    spec: &ProjectSpec,
) -> ScaffoldResult<GeneratedArtifact> {
    let path = spec
        .root()
        .join(format!("{}.{PROJECT_FILE_EXTENSION}", spec.sanitized_name()));
    write_artifact(fs, ArtifactKind::ProjectFile, &path, PROJECT_DESCRIPTOR_CONTENT)
}

/// Render the engine's solution template and write `premake5.lua` at
/// the project root.
///
/// A missing template is fatal for this step: downstream build-file
/// generation cannot work without the descriptor.
pub fn generate_build_config(
    fs: &dyn Filesystem,
    spec: &ProjectSpec,
    engine: &EngineContext,
) -> ScaffoldResult<GeneratedArtifact> {
    let template_path = engine.solution_template_path();
    let body = template::load(fs, &template_path)?;

    let rendered = template::substitute(
        &body,
        &template::project_name_placeholders(spec.sanitized_name()),
    );

    let path = spec.root().join("premake5.lua");
    write_artifact(fs, ArtifactKind::BuildFile, &path, &rendered)
}

/// Write `Source/<name>/<name>.h` declaring the game module class.
pub fn generate_module_header(
    fs: &dyn Filesystem,
    spec: &ProjectSpec,
) -> ScaffoldResult<GeneratedArtifact> {
    let path = spec
        .module_source_dir()
        .join(format!("{}.h", spec.sanitized_name()));
    let content = template::substitute(
        MODULE_HEADER_TEMPLATE,
        &template::project_name_placeholders(spec.sanitized_name()),
    );
    ensure_parent(fs, &path)?;
    write_artifact(fs, ArtifactKind::HeaderFile, &path, &content)
}

/// Write `Source/<name>/<name>.cpp` implementing module registration.
pub fn generate_module_source(
    fs: &dyn Filesystem,
    spec: &ProjectSpec,
) -> ScaffoldResult<GeneratedArtifact> {
    let path = spec
        .module_source_dir()
        .join(format!("{}.cpp", spec.sanitized_name()));
    let content = template::substitute(
        MODULE_SOURCE_TEMPLATE,
        &template::project_name_placeholders(spec.sanitized_name()),
    );
    ensure_parent(fs, &path)?;
    write_artifact(fs, ArtifactKind::SourceFile, &path, &content)
}

/// Write `GenerateProject.py` at the project root.
pub fn generate_launcher_script(
    fs: &dyn Filesystem,
    spec: &ProjectSpec,
) -> ScaffoldResult<GeneratedArtifact> {
    let path = spec.root().join("GenerateProject.py");
    write_artifact(fs, ArtifactKind::Script, &path, LAUNCHER_SCRIPT_CONTENT)
}

fn ensure_parent(fs: &dyn Filesystem, path: &Path) -> ScaffoldResult<()> {
    if let Some(parent) = path.parent() {
        fs.create_dir_all(parent)
            .map_err(|source| ScaffoldError::DirectoryCreationFailed {
                path: parent.to_path_buf(),
                source,
            })?;
    }
    Ok(())
}

fn write_artifact(
    fs: &dyn Filesystem,
    kind: ArtifactKind,
    path: &Path,
    content: &str,
) -> ScaffoldResult<GeneratedArtifact> {
    fs.write_file(path, content)
        .map_err(|source| ScaffoldError::ArtifactWriteFailed {
            path: path.to_path_buf(),
            source,
        })?;
    info!(kind = %kind, path = %path.display(), "artifact written");
    Ok(GeneratedArtifact::new(kind, path))
}
