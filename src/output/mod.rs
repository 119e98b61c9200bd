//! Rendering an update run for the terminal or other tools
//!
//! Three renderings of an [`OrchestratorResult`] are available: colored text,
//! JSON for scripts, and a diff of the rewritten lines. The markdown change
//! log is written separately, next to the versions file.

mod diff;
mod json;
mod markdown;
mod text;

pub use diff::DiffFormatter;
pub use json::JsonFormatter;
pub use markdown::{append_markdown, render_markdown};
pub use text::{ChangeKind, TextFormatter};

use crate::cli::CliArgs;
use crate::orchestrator::OrchestratorResult;
use std::io::Write;

/// Rendering selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Diff,
}

/// How much the text rendering prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Summary line only
    Quiet,
    #[default]
    Normal,
    /// Also lists the reports that were read
    Verbose,
}

/// Output settings derived from [`CliArgs`]
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub verbosity: Verbosity,
    pub dry_run: bool,
}

impl From<&CliArgs> for OutputConfig {
    fn from(args: &CliArgs) -> Self {
        let format = match (args.json, args.diff) {
            (true, _) => OutputFormat::Json,
            (false, true) => OutputFormat::Diff,
            (false, false) => OutputFormat::Text,
        };
        let verbosity = match (args.quiet, args.verbose) {
            (true, _) => Verbosity::Quiet,
            (false, true) => Verbosity::Verbose,
            (false, false) => Verbosity::Normal,
        };

        Self {
            format,
            verbosity,
            dry_run: args.dry_run,
        }
    }
}

/// Writes an [`OrchestratorResult`] in one rendering
pub trait OutputFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Pick the formatter for `config`
pub fn create_formatter(config: &OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::new(config.verbosity, config.dry_run)),
        OutputFormat::Json => Box::new(JsonFormatter::new(config.verbosity)),
        OutputFormat::Diff => Box::new(DiffFormatter::new(config.dry_run)),
    }
}
