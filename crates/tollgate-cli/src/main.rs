//! `tollgate` binary: runs the rate-limit audit over a Solidity project.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tollgate_analysis::audit;
use tollgate_analysis::reporters::{available_formats, create_reporter};
use tollgate_core::config::{CliOverrides, TollgateConfig};
use tollgate_core::errors::TollgateErrorCode;

#[derive(Parser)]
#[command(name = "tollgate")]
#[command(about = "Audits rate-limit wiring in controller contracts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Verify observed wiring against the expected tables
    Check {
        /// Project root
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Report format (console, json)
        #[arg(long)]
        format: Option<String>,

        /// Disable ANSI colour in console output
        #[arg(long)]
        no_color: bool,

        /// Source directories to scan, relative to the root
        #[arg(long = "source-dir")]
        source_dirs: Vec<String>,

        /// Parser threads
        #[arg(long)]
        threads: Option<usize>,
    },

    /// Print the observed wiring per role as JSON
    Observe {
        /// Project root
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Source directories to scan, relative to the root
        #[arg(long = "source-dir")]
        source_dirs: Vec<String>,
    },
}

fn main() -> ExitCode {
    tollgate_core::tracing::init_tracing();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(diagnostic) => {
            eprintln!("{diagnostic}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the project is compliant, or a diagnostic line.
fn run(command: Command) -> Result<bool, String> {
    match command {
        Command::Check {
            root,
            format,
            no_color,
            source_dirs,
            threads,
        } => {
            let overrides = CliOverrides {
                source_dirs,
                report_format: format,
                report_color: no_color.then_some(false),
                scan_threads: threads,
            };
            let config = TollgateConfig::load(&root, Some(&overrides)).map_err(|e| e.diagnostic())?;
            tracing::debug!(?config, "resolved configuration");
            let format = config.report.effective_format();
            let reporter = create_reporter(&format, config.report.effective_color())
                .ok_or_else(|| {
                    format!(
                        "unknown report format '{format}' (available: {})",
                        available_formats().join(", ")
                    )
                })?;

            let report = audit::run(&root, &config).map_err(|e| e.diagnostic())?;
            let output = reporter.generate(&report)?;
            println!("{output}");
            Ok(report.passed)
        }
        Command::Observe { root, source_dirs } => {
            let overrides = CliOverrides {
                source_dirs,
                ..CliOverrides::default()
            };
            let config = TollgateConfig::load(&root, Some(&overrides)).map_err(|e| e.diagnostic())?;
            let observations = audit::observe(&root, &config).map_err(|e| e.diagnostic())?;
            let output = serde_json::to_string_pretty(&observations).map_err(|e| e.to_string())?;
            println!("{output}");
            Ok(true)
        }
    }
}
