//! Diff output formatter for showing changes
//!
//! This module provides:
//! - Unified diff style display of rewritten version lines
//! - Before/after version comparison

use crate::orchestrator::OrchestratorResult;
use crate::output::OutputFormatter;
use std::io::Write;

/// Diff formatter for showing version changes
pub struct DiffFormatter {
    /// Whether this is a dry-run
    dry_run: bool,
}

impl DiffFormatter {
    /// Create a new diff formatter
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self) -> &'static str {
        if self.dry_run {
            "(dry-run) "
        } else {
            ""
        }
    }
}

impl OutputFormatter for DiffFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let prefix = self.dry_run_prefix();
        let updates = result.total_updates();

        if updates > 0 {
            writeln!(writer, "{}--- a/{}", prefix, result.props_path.display())?;
            writeln!(writer, "{}+++ b/{}", prefix, result.props_path.display())?;

            for record in result.outcome.changes() {
                writeln!(writer, "@@ {} @@", record.dependency)?;
                writeln!(writer, "-{} = {}", record.dependency, record.old_version)?;
                writeln!(writer, "+{} = {}", record.dependency, record.new_version)?;
            }

            writeln!(writer)?;
        }

        writeln!(writer, "{}# {} line(s) updated", prefix, updates)?;
        for warning in &result.warnings {
            writeln!(writer, "# warning: {}", warning)?;
        }

        Ok(())
    }
}
