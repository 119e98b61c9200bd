//! CLI argument parsing module for vprops

use crate::error::ConfigError;
use crate::props::VERSIONS_PROPS;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Apply dependency update recommendations to versions.props
#[derive(Parser, Debug, Clone)]
#[command(
    name = "vprops",
    version,
    about = "Apply dependency update recommendations to versions.props"
)]
pub struct CliArgs {
    /// Root project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Versions file, relative to the root project unless absolute
    #[arg(long, default_value = VERSIONS_PROPS)]
    pub props: PathBuf,

    /// Report file to read (can be specified multiple times; default: discover under root)
    #[arg(long, action = ArgAction::Append)]
    pub report: Vec<PathBuf>,

    // Run mode
    /// Report what would change without rewriting versions.props
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// List the reports read and enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Print the summary line only
    #[arg(short, long)]
    pub quiet: bool,

    // Identifier filters
    /// Skip recommendations for this `group:name` (repeatable)
    #[arg(long, action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Apply recommendations for this `group:name` only (repeatable)
    #[arg(long, action = ArgAction::Append)]
    pub only: Vec<String>,

    // Rendering
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Print rewritten lines as a diff
    #[arg(long)]
    pub diff: bool,

    /// Append a markdown change log of applied updates to this file
    #[arg(long)]
    pub markdown: Option<PathBuf>,
}

impl CliArgs {
    /// Resolve the versions file path against the root project
    pub fn props_path(&self) -> PathBuf {
        if self.props.is_absolute() {
            self.props.clone()
        } else {
            self.path.join(&self.props)
        }
    }

    /// Reject option combinations that cannot be honoured
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quiet && self.verbose {
            return Err(ConfigError::conflicting_options(
                "--quiet and --verbose cannot be used together",
            ));
        }
        if self.json && self.diff {
            return Err(ConfigError::conflicting_options(
                "--json and --diff cannot be used together",
            ));
        }
        if !self.path.is_dir() {
            return Err(ConfigError::invalid_path(
                &self.path,
                "not a directory",
            ));
        }
        Ok(())
    }
}
