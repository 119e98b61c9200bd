//! Update orchestrator for coordinating the entire update workflow
//!
//! This module provides:
//! - Workflow coordination: load reports → merge → parse → apply → write
//! - Dry-run mode support
//! - Identifier filter application
//! - Markdown change log output

use crate::cli::CliArgs;
use crate::domain::{UpdateReport, Warning};
use crate::error::{AppError, ConfigError};
use crate::output::append_markdown;
use crate::props::VersionsProps;
use crate::report::{discover_reports, load_reports};
use crate::update::{apply_updates, merge_recommendations, ApplyOutcome, UpdateFilter};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Orchestrator for coordinating the update workflow
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
}

/// Result of running the orchestrator
#[derive(Debug, Clone)]
pub struct OrchestratorResult {
    /// Versions file that was processed
    pub props_path: PathBuf,
    /// Report files that were read
    pub reports: Vec<PathBuf>,
    /// Number of recommendations left after merging and filtering
    pub recommendations: usize,
    /// Records and unresolved identifiers from applying the updates
    pub outcome: ApplyOutcome,
    /// Merge conflicts followed by unresolved identifiers
    pub warnings: Vec<Warning>,
    /// Whether the versions file was rewritten
    pub written: bool,
    /// Change log the records were appended to
    pub changelog: Option<PathBuf>,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl OrchestratorResult {
    /// Returns the total number of rewritten lines
    pub fn total_updates(&self) -> usize {
        self.outcome.changes().count()
    }

    /// Returns true if anything was skipped with a warning
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Merge, filter, and apply reports to an in-memory versions file
///
/// Returns the number of recommendations applied, the outcome, and all
/// warnings (merge conflicts first).
pub fn plan_updates(
    props: &mut VersionsProps,
    reports: &[UpdateReport],
    filter: &UpdateFilter,
) -> (usize, ApplyOutcome, Vec<Warning>) {
    let mut merged = merge_recommendations(reports);
    filter.apply(&mut merged);
    debug!("{} recommendation(s) after merge", merged.len());

    let outcome = apply_updates(props, &merged);

    let mut warnings = merged.warnings().to_vec();
    warnings.extend(outcome.warnings.iter().cloned());
    for warning in &outcome.warnings {
        warn!("{}", warning);
    }

    (merged.len(), outcome, warnings)
}

impl Orchestrator {
    /// Create a new orchestrator with the given CLI arguments
    pub fn new(args: CliArgs) -> Result<Self, ConfigError> {
        args.validate()?;
        Ok(Self { args })
    }

    /// Build the identifier filter from CLI args
    fn build_filter(&self) -> UpdateFilter {
        UpdateFilter::new()
            .with_exclude(self.args.exclude.clone())
            .with_only(self.args.only.clone())
    }

    /// Report files given on the command line, or discovered under the root
    fn report_paths(&self) -> Vec<PathBuf> {
        if self.args.report.is_empty() {
            discover_reports(&self.args.path)
        } else {
            self.args.report.clone()
        }
    }

    /// Run the update workflow
    pub fn run(&self) -> Result<OrchestratorResult, AppError> {
        let props_path = self.args.props_path();

        // Step 1: Load recommendation reports
        let report_paths = self.report_paths();
        let reports = load_reports(&report_paths)?;
        info!("Loaded {} report(s)", reports.len());

        // Step 2: Parse the versions file
        let mut props = VersionsProps::read(&props_path)?;

        // Step 3: Merge and apply
        let (recommendations, outcome, warnings) =
            plan_updates(&mut props, &reports, &self.build_filter());

        // Step 4: Write back
        let mut written = false;
        let mut changelog = None;
        if outcome.has_changes() && !self.args.dry_run {
            props.write(&props_path)?;
            written = true;

            if let Some(path) = &self.args.markdown {
                let records: Vec<_> = outcome.changes().cloned().collect();
                append_markdown(path, &records)?;
                changelog = Some(path.clone());
            }
        }

        Ok(OrchestratorResult {
            props_path,
            reports: report_paths,
            recommendations,
            outcome,
            warnings,
            written,
            changelog,
            dry_run: self.args.dry_run,
        })
    }
}
