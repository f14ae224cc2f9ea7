//! job-form CLI
//!
//! Fill in a job application interactively, or validate a snapshot file.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::info;

use job_form::application::{JobApplication, validate};
use job_form::config::{default_snapshot_path, load_snapshot, resolve_snapshot};
use job_form::error::AppResult;
use job_form::logger;
use job_form::report::{ValidationReport, format_report};
use job_form::tui;
use job_form::types::OutputFormat;

#[derive(Parser)]
#[command(name = "job-form")]
#[command(about = "Fill in and validate a job application")]
#[command(version)]
struct Cli {
    /// Append log records to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log debug details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive form
    Fill {
        /// JSON snapshot to prefill from (default: config dir defaults.json)
        #[arg(long)]
        defaults: Option<PathBuf>,
    },

    /// Validate a JSON snapshot and report every error
    Check {
        /// Snapshot file
        path: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Print an empty snapshot to start from
    Template,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.log_file.as_deref(), cli.verbose) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Commands::Fill { defaults } => cmd_fill(defaults.as_deref()),
        Commands::Check { path, format } => cmd_check(&path, format.into()),
        Commands::Template => cmd_template(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_fill(defaults: Option<&Path>) -> AppResult<ExitCode> {
    let fallback = default_snapshot_path();
    let initial = resolve_snapshot(defaults, fallback.as_deref())?;

    info!("starting form");
    tui::run(initial)?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(path: &Path, format: OutputFormat) -> AppResult<ExitCode> {
    let values = load_snapshot(path)?;
    let report = ValidationReport::from_errors(&validate(&values));

    println!("{}", format_report(&report, format)?.trim_end());

    if report.valid {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn cmd_template() -> AppResult<ExitCode> {
    let template = serde_json::to_string_pretty(&JobApplication::default())?;
    println!("{}", template);
    Ok(ExitCode::SUCCESS)
}
