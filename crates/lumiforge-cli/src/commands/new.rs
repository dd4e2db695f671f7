//! Implementation of the `lumiforge new` command.
//!
//! Responsibility: resolve the engine and target directory, call the
//! core scaffolder, and display the per-step report. No scaffolding
//! logic lives here.

use std::path::PathBuf;

use tracing::{info, instrument};

use lumiforge_adapters::LocalFilesystem;
use lumiforge_core::prelude::*;

use crate::{
    cli::{GlobalArgs, NewArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `lumiforge new` command.
///
/// Dispatch sequence:
/// 1. Resolve the engine installation (flag → env → config)
/// 2. Resolve the target directory (flag, or interactive prompt)
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Run the scaffolder
/// 5. Print the itemized step report (human or JSON)
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let engine = super::resolve_engine(&global, &config)?;
    let project_dir = resolve_project_dir(&args)?;

    output.header("\u{26a1} Lumina Project Creator")?;
    output.print(&format!("  Engine:   {}", engine.install_dir().display()))?;
    output.print(&format!("  Project:  {}", args.name))?;
    output.print(&format!("  Location: {}", project_dir.display()))?;
    output.print("")?;

    if !global.quiet && !args.yes && !confirm()? {
        return Err(CliError::Cancelled);
    }

    info!(project = %args.name, path = %project_dir.display(), "scaffold started");

    let scaffolder = ProjectScaffolder::new(Box::new(LocalFilesystem::new()));
    let report = scaffolder.create_project(&engine, &project_dir, &args.name)?;

    render_report(&report, &output)?;

    if report.is_success() {
        output.print("")?;
        output.success(&format!("Project created at {}", project_dir.display()))?;
        if !global.quiet {
            output.print("")?;
            output.print("Next steps:")?;
            output.print(&format!("  cd {}", project_dir.display()))?;
            output.print("  python GenerateProject.py")?;
        }
        Ok(())
    } else {
        Err(CliError::ScaffoldIncomplete {
            failed: report.failure_count(),
            path: project_dir,
        })
    }
}

/// Resolve the directory the project is created in.
///
/// With `--dir` it is taken verbatim. Without it, a terminal prompt asks
/// for one (the `interactive` feature); in non-interactive builds or
/// with no TTY the flag is required.
fn resolve_project_dir(args: &NewArgs) -> CliResult<PathBuf> {
    if let Some(dir) = &args.dir {
        return Ok(dir.clone());
    }

    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal as _;
        if std::io::stdin().is_terminal() {
            let dir: String = dialoguer::Input::new()
                .with_prompt("Project directory")
                .interact_text()
                .map_err(|e| CliError::InvalidInput {
                    message: format!("failed to read project directory: {e}"),
                })?;
            if !dir.trim().is_empty() {
                return Ok(PathBuf::from(dir.trim()));
            }
        }
    }

    Err(CliError::MissingDirectory)
}

/// Print one line per scaffolding step.
fn render_report(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&report.summary())
            .map_err(|e| CliError::IoError {
                message: "failed to encode report as JSON".into(),
                source: std::io::Error::other(e),
            })?;
        println!("{json}");
        return Ok(());
    }

    for record in report.records() {
        match &record.outcome {
            StepOutcome::Completed(artifacts) => {
                let detail = artifacts
                    .iter()
                    .map(|a| a.path.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                output.step(true, record.step.label(), &detail)?;
            }
            StepOutcome::Failed(e) => {
                output.step(false, record.step.label(), &e.to_string())?;
            }
            StepOutcome::Skipped => {
                output.warning(&format!("{:<22} skipped", record.step.label()))?;
            }
        }
    }
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
