//! The scaffold orchestrator - sequences one project-creation run.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::domain::{ArtifactKind, EngineContext, GeneratedArtifact, ProjectSpec};
use crate::scaffold::report::{ScaffoldReport, ScaffoldStep, StepOutcome};
use crate::scaffold::{Filesystem, ScaffoldError, ScaffoldResult, generators, planner};

/// Runs the complete project-creation sequence through an injected
/// filesystem.
///
/// The sequence is a straight-line pipeline: directories, then each
/// artifact generator, then the engine tools copy. A failed step is
/// recorded and the run continues with the remaining independent steps;
/// nothing already written is rolled back.
pub struct ProjectScaffolder {
    filesystem: Box<dyn Filesystem>,
}

impl ProjectScaffolder {
    /// Create a scaffolder with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Create a new project at `root` named `raw_name`.
    ///
    /// Returns `Err` only for fatal preconditions, before anything is
    /// written: a missing engine installation or an unusable project
    /// name. Every other failure is per-step and lands in the
    /// [`ScaffoldReport`].
    #[instrument(skip_all, fields(root = %root.display(), name = raw_name))]
    pub fn create_project(
        &self,
        engine: &EngineContext,
        root: &Path,
        raw_name: &str,
    ) -> ScaffoldResult<ScaffoldReport> {
        self.check_engine(engine)?;
        let spec = ProjectSpec::new(raw_name, root)?;

        info!(
            project = spec.sanitized_name(),
            engine = %engine.install_dir().display(),
            "scaffold started"
        );

        let mut report = ScaffoldReport::new();
        let fs = self.filesystem.as_ref();

        // Directories first; generators write into this tree.
        let tree_ok = match planner::ensure_project_tree(fs, &spec) {
            Ok(()) => {
                report.record(
                    ScaffoldStep::ProjectTree,
                    StepOutcome::Completed(vec![
                        GeneratedArtifact::new(ArtifactKind::Directory, spec.root()),
                        GeneratedArtifact::new(ArtifactKind::Directory, spec.module_source_dir()),
                        GeneratedArtifact::new(ArtifactKind::Directory, spec.content_dir()),
                    ]),
                );
                true
            }
            Err(e) => {
                warn!(error = %e, "project tree creation failed");
                report.record(ScaffoldStep::ProjectTree, StepOutcome::Failed(e));
                false
            }
        };

        type Generator<'a> = (
            ScaffoldStep,
            Box<dyn Fn() -> ScaffoldResult<GeneratedArtifact> + 'a>,
        );

        let generators: Vec<Generator<'_>> = vec![
            (
                ScaffoldStep::ProjectDescriptor,
                Box::new(|| generators::generate_project_descriptor(fs, &spec)),
            ),
            (
                ScaffoldStep::BuildConfig,
                Box::new(|| generators::generate_build_config(fs, &spec, engine)),
            ),
            (
                ScaffoldStep::ModuleHeader,
                Box::new(|| generators::generate_module_header(fs, &spec)),
            ),
            (
                ScaffoldStep::ModuleSource,
                Box::new(|| generators::generate_module_source(fs, &spec)),
            ),
            (
                ScaffoldStep::LauncherScript,
                Box::new(|| generators::generate_launcher_script(fs, &spec)),
            ),
        ];

        for (step, generate) in generators {
            if !tree_ok {
                // Without the directory tree every write would fail on
                // the same missing directories.
                report.record(step, StepOutcome::Skipped);
                continue;
            }
            match generate() {
                Ok(artifact) => report.record(step, StepOutcome::Completed(vec![artifact])),
                Err(e) => {
                    warn!(step = %step, error = %e, "step failed, continuing");
                    report.record(step, StepOutcome::Failed(e));
                }
            }
        }

        // Last step: copy the engine's Tools/ directory. Its failure
        // never invalidates earlier artifacts.
        if tree_ok {
            report.record(ScaffoldStep::ToolsCopy, self.copy_tools(engine, &spec));
        } else {
            report.record(ScaffoldStep::ToolsCopy, StepOutcome::Skipped);
        }

        if report.is_success() {
            info!(project = spec.sanitized_name(), "scaffold completed");
        } else {
            warn!(
                failed = report.failure_count(),
                "scaffold finished with failures; artifacts already written were kept"
            );
        }

        Ok(report)
    }

    fn check_engine(&self, engine: &EngineContext) -> ScaffoldResult<()> {
        if !self.filesystem.exists(engine.install_dir()) {
            return Err(ScaffoldError::PreconditionMissing {
                detail: format!(
                    "engine directory {} does not exist",
                    engine.install_dir().display()
                ),
            });
        }
        Ok(())
    }

    fn copy_tools(&self, engine: &EngineContext, spec: &ProjectSpec) -> StepOutcome {
        let src = engine.tools_dir();
        let dst = spec.root().join(crate::domain::engine_layout::TOOLS_DIR);

        match self.filesystem.copy_tree(&src, &dst) {
            Ok(files) => {
                info!(files, src = %src.display(), dst = %dst.display(), "tools copied");
                StepOutcome::Completed(vec![GeneratedArtifact::new(ArtifactKind::CopiedTree, dst)])
            }
            Err(source) => {
                warn!(error = %source, "tools copy failed");
                StepOutcome::Failed(ScaffoldError::CopyFailed { src, dst, source })
            }
        }
    }
}
