//! Per-step outcome reporting for a scaffolding run.
//!
//! The orchestrator never rolls back; what the user gets instead is an
//! itemized account of which artifacts were produced and which steps
//! failed, detailed enough to repair a partially-scaffolded project by
//! hand.

use serde::Serialize;

use crate::domain::GeneratedArtifact;
use crate::scaffold::ScaffoldError;

/// The steps of one project-creation run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaffoldStep {
    ProjectTree,
    ProjectDescriptor,
    BuildConfig,
    ModuleHeader,
    ModuleSource,
    LauncherScript,
    ToolsCopy,
}

impl ScaffoldStep {
    /// Human-readable step label for report lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ProjectTree => "Project directories",
            Self::ProjectDescriptor => "Project descriptor",
            Self::BuildConfig => "Build configuration",
            Self::ModuleHeader => "Module header",
            Self::ModuleSource => "Module source",
            Self::LauncherScript => "Launcher script",
            Self::ToolsCopy => "Engine tools copy",
        }
    }
}

impl std::fmt::Display for ScaffoldStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How a single step ended.
#[derive(Debug)]
pub enum StepOutcome {
    /// The step ran to completion, producing the listed artifacts.
    Completed(Vec<GeneratedArtifact>),
    /// The step failed; earlier steps' side effects stay on disk.
    Failed(ScaffoldError),
    /// The step was not attempted because a prerequisite step failed.
    Skipped,
}

/// One step and its outcome.
#[derive(Debug)]
pub struct StepRecord {
    pub step: ScaffoldStep,
    pub outcome: StepOutcome,
}

/// Full account of a scaffolding run.
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    records: Vec<StepRecord>,
}

impl ScaffoldReport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, step: ScaffoldStep, outcome: StepOutcome) {
        self.records.push(StepRecord { step, outcome });
    }

    /// All step records, in execution order.
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// `true` when every step completed.
    pub fn is_success(&self) -> bool {
        self.records
            .iter()
            .all(|r| matches!(r.outcome, StepOutcome::Completed(_)))
    }

    /// The steps that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (ScaffoldStep, &ScaffoldError)> {
        self.records.iter().filter_map(|r| match &r.outcome {
            StepOutcome::Failed(e) => Some((r.step, e)),
            _ => None,
        })
    }

    /// Number of failed steps.
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Serializable view of the run, for machine-readable output.
    pub fn summary(&self) -> Vec<StepSummary> {
        self.records
            .iter()
            .map(|r| match &r.outcome {
                StepOutcome::Completed(artifacts) => StepSummary {
                    step: r.step,
                    status: StepStatus::Completed,
                    artifacts: artifacts.clone(),
                    error: None,
                },
                StepOutcome::Failed(e) => StepSummary {
                    step: r.step,
                    status: StepStatus::Failed,
                    artifacts: Vec::new(),
                    error: Some(e.to_string()),
                },
                StepOutcome::Skipped => StepSummary {
                    step: r.step,
                    status: StepStatus::Skipped,
                    artifacts: Vec::new(),
                    error: None,
                },
            })
            .collect()
    }
}

/// Flattened, serializable step result.
#[derive(Debug, Clone, Serialize)]
pub struct StepSummary {
    pub step: ScaffoldStep,
    pub status: StepStatus,
    pub artifacts: Vec<GeneratedArtifact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Failed,
    Skipped,
}
