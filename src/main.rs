//! vprops - versions.props dependency updater CLI tool
//!
//! Reads dependency update reports produced by the version checker and
//! pins the recommended versions in the root project's `versions.props`.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use vprops::cli::CliArgs;
use vprops::orchestrator::Orchestrator;
use vprops::output::{create_formatter, OutputConfig};

/// Environment variable overriding the log filter
const LOG_ENV: &str = "VPROPS_LOG";

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Send diagnostics to stderr so stdout stays parseable
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("vprops v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", args.props_path().display());
        if args.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    // Create and run the orchestrator
    let orchestrator = Orchestrator::new(args.clone())?;
    let result = orchestrator.run()?;

    // Create output formatter based on CLI options
    let formatter = create_formatter(&OutputConfig::from(&args));

    // Output results
    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    if result.has_warnings() {
        // Partial success - some recommendations were skipped
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
