//! JSON rendering for scripts and CI jobs
//!
//! Field names are camelCase, matching the report files. Warnings carry a
//! `kind` tag so consumers can tell conflicts from unresolved identifiers.

use crate::domain::{UpdateRecord, Warning};
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// Writes the run as a single pretty-printed JSON object
pub struct JsonFormatter {
    /// `Verbose` adds the list of report files
    verbosity: Verbosity,
}

impl JsonFormatter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    dry_run: bool,
    /// Versions file that was processed
    path: String,
    /// Whether the versions file was rewritten
    written: bool,
    summary: JsonSummary,
    /// Rewritten lines
    updates: Vec<&'a UpdateRecord>,
    /// Skipped recommendations
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<&'a Warning>,
    /// Reports that were read (verbose only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    reports: Vec<String>,
}

/// Counts of the run
#[derive(Serialize)]
struct JsonSummary {
    /// Recommendations after merging
    recommendations: usize,
    /// Lines rewritten
    updates: usize,
    /// Recommendations already satisfied
    unchanged: usize,
    /// Recommendations skipped with a warning
    warnings: usize,
}

impl JsonFormatter {
    fn to_json<'a>(&self, result: &'a OrchestratorResult) -> JsonOutput<'a> {
        let reports = if self.verbosity == Verbosity::Verbose {
            result
                .reports
                .iter()
                .map(|p| p.display().to_string())
                .collect()
        } else {
            Vec::new()
        };

        JsonOutput {
            dry_run: result.dry_run,
            path: result.props_path.display().to_string(),
            written: result.written,
            summary: JsonSummary {
                recommendations: result.recommendations,
                updates: result.total_updates(),
                unchanged: result.outcome.unchanged,
                warnings: result.warnings.len(),
            },
            updates: result.outcome.changes().collect(),
            warnings: result.warnings.iter().collect(),
            reports,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = self.to_json(result);
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}
