//! Human-readable report of an update run
//!
//! Rewritten lines are listed with the size of the version bump, followed by
//! the recommendations that were skipped and a one-line summary.

use crate::domain::UpdateRecord;
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::cmp::Ordering;
use std::io::Write;

/// Minimum width of the identifier column
const MIN_NAME_WIDTH: usize = 20;

/// How far a version moved, judged on its leading numeric components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// First component changed
    Major,
    /// Second component changed
    Minor,
    /// Any later component changed
    Patch,
    /// Same numbers, different qualifier (`31.0-jre` to `31.0-android`)
    Qualifier,
    /// Either side has no leading number
    Unknown,
}

/// Leading numeric components of a Maven-style version
///
/// `2.0.0-M1` yields `[2, 0, 0]`, `1.0.0.Final` yields `[1, 0, 0]`.
fn numeric_components(version: &str) -> Option<Vec<u64>> {
    let release = version.split(['-', '+']).next().unwrap_or(version);
    let parts: Vec<u64> = release
        .split('.')
        .map_while(|part| part.parse().ok())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts)
    }
}

impl ChangeKind {
    /// Classify the move from `old` to `new`
    pub fn classify(old: &str, new: &str) -> Self {
        let (Some(old_parts), Some(new_parts)) = (numeric_components(old), numeric_components(new))
        else {
            return ChangeKind::Unknown;
        };

        let width = old_parts.len().max(new_parts.len());
        let at = |parts: &[u64], idx: usize| parts.get(idx).copied().unwrap_or(0);
        let first_diff = (0..width).find(|&idx| {
            at(&old_parts, idx).cmp(&at(&new_parts, idx)) != Ordering::Equal
        });

        match first_diff {
            Some(0) => ChangeKind::Major,
            Some(1) => ChangeKind::Minor,
            Some(_) => ChangeKind::Patch,
            None => ChangeKind::Qualifier,
        }
    }

    /// Plain tag for the change
    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Major => "major",
            ChangeKind::Minor => "minor",
            ChangeKind::Patch => "patch",
            ChangeKind::Qualifier => "qualifier",
            ChangeKind::Unknown => "?",
        }
    }

    /// Tag colored by risk
    pub fn colored_label(&self) -> String {
        let label = self.label();
        match self {
            ChangeKind::Major => label.red().bold().to_string(),
            ChangeKind::Minor => label.yellow().to_string(),
            ChangeKind::Patch => label.green().to_string(),
            ChangeKind::Qualifier => label.cyan().to_string(),
            ChangeKind::Unknown => label.dimmed().to_string(),
        }
    }
}

/// Text formatter for terminals
pub struct TextFormatter {
    verbosity: Verbosity,
    dry_run: bool,
    color: bool,
}

impl TextFormatter {
    /// Create a colored text formatter
    pub fn new(verbosity: Verbosity, dry_run: bool) -> Self {
        Self::with_color(verbosity, dry_run, true)
    }

    /// Create a text formatter, optionally without ANSI colors
    pub fn with_color(verbosity: Verbosity, dry_run: bool, color: bool) -> Self {
        Self {
            verbosity,
            dry_run,
            color,
        }
    }

    fn dry_run_prefix(&self) -> String {
        match (self.dry_run, self.color) {
            (false, _) => String::new(),
            (true, true) => format!("{} ", "(dry-run)".cyan()),
            (true, false) => "(dry-run) ".to_string(),
        }
    }

    fn paint(&self, text: &str, style: fn(&str) -> colored::ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// One rewritten line: `identifier old -> new [kind]`
    fn render_record(&self, record: &UpdateRecord, width: usize) -> String {
        let kind = ChangeKind::classify(&record.old_version, &record.new_version);
        if self.color {
            format!(
                "  {:width$} {} {} {} [{}]",
                record.dependency,
                record.old_version.dimmed(),
                "→".dimmed(),
                record.new_version.bright_white().bold(),
                kind.colored_label(),
            )
        } else {
            format!(
                "  {:width$} {} -> {} [{}]",
                record.dependency,
                record.old_version,
                record.new_version,
                kind.label(),
            )
        }
    }

    fn render_summary(&self, result: &OrchestratorResult) -> Option<String> {
        let updates = result.total_updates();
        let warnings = result.warnings.len();

        if updates == 0 && warnings == 0 {
            return (self.verbosity != Verbosity::Quiet)
                .then(|| format!("{}All versions are up to date.", self.dry_run_prefix()));
        }

        let verb = if self.dry_run { "would be updated" } else { "updated" };
        let updates = updates.to_string();
        let warnings = warnings.to_string();
        Some(format!(
            "{}{} line(s) {}, {} unchanged, {} warning(s)",
            self.dry_run_prefix(),
            self.paint(&updates, |s| s.green().bold()),
            verb,
            result.outcome.unchanged,
            if result.has_warnings() {
                self.paint(&warnings, |s| s.yellow())
            } else {
                warnings
            },
        ))
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity != Verbosity::Quiet {
            if self.verbosity == Verbosity::Verbose {
                writeln!(writer, "Reports ({}):", result.reports.len())?;
                for report in &result.reports {
                    writeln!(writer, "  {}", report.display())?;
                }
                writeln!(writer)?;
            }

            let changes: Vec<&UpdateRecord> = result.outcome.changes().collect();
            if !changes.is_empty() {
                let path = result.props_path.display().to_string();
                writeln!(
                    writer,
                    "{}{}",
                    self.dry_run_prefix(),
                    self.paint(&path, |s| s.bold())
                )?;

                let width = changes
                    .iter()
                    .map(|record| record.dependency.len())
                    .fold(MIN_NAME_WIDTH, usize::max);
                for record in changes {
                    writeln!(writer, "{}", self.render_record(record, width))?;
                }
                writeln!(writer)?;
            }

            if result.has_warnings() {
                writeln!(writer, "{}", self.paint("Skipped:", |s| s.yellow()))?;
                for warning in &result.warnings {
                    writeln!(writer, "  - {}", warning)?;
                }
                writeln!(writer)?;
            }

            if let Some(changelog) = &result.changelog {
                writeln!(writer, "Change log appended to {}", changelog.display())?;
            }
        }

        match self.render_summary(result) {
            Some(summary) => writeln!(writer, "{}", summary),
            None => Ok(()),
        }
    }
}
