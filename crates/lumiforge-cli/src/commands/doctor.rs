//! Implementation of the `lumiforge doctor` command.
//!
//! Verifies that the engine installation this tool scaffolds from is
//! usable: directory present, solution template present, tools present.

use tracing::instrument;

use lumiforge_core::domain::EngineContext;

use crate::{
    cli::{DoctorArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `lumiforge doctor` command.
#[instrument(skip_all)]
pub fn execute(
    _args: DoctorArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    output.header("Engine installation check")?;

    let engine = match super::resolve_engine(&global, &config) {
        Ok(engine) => {
            output.step(
                true,
                "Engine directory",
                &engine.install_dir().display().to_string(),
            )?;
            engine
        }
        Err(e) => {
            output.step(false, "Engine directory", &e.to_string())?;
            return Err(CliError::DoctorFailed { failed: 1 });
        }
    };

    let checks = [
        ("Install directory", engine.install_dir().to_path_buf()),
        ("Solution template", engine.solution_template_path()),
        ("Tools directory", engine.tools_dir()),
    ];

    let mut failed = 0usize;
    for (label, path) in checks {
        if path.exists() {
            output.step(true, label, &path.display().to_string())?;
        } else {
            output.step(false, label, &format!("missing: {}", path.display()))?;
            failed += 1;
        }
    }

    if failed == 0 {
        output.print("")?;
        output.success("Engine installation looks complete")?;
        Ok(())
    } else {
        Err(CliError::DoctorFailed { failed })
    }
}
