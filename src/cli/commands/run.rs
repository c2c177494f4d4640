//! Run command implementation
//!
//! Splits one enrollment file into per-company files and prints the error
//! log once everything has been written.

use crate::adapters::filesystem::{DirectorySink, DryRunSink};
use crate::adapters::traits::OutputSink;
use crate::config::EnrollmentConfig;
use crate::core::ingest::IngestOptions;
use crate::core::pipeline::{self, RunReport};
use anyhow::Context;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

/// Positional paths and run flags
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Input enrollment file (must have a .csv extension)
    pub input: PathBuf,

    /// Directory that receives one {company}.csv per company
    pub output_dir: PathBuf,

    /// Dry run mode - report what would be written without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Reject lines with an empty user id, name or company
    #[arg(long)]
    pub strict: bool,
}

impl RunArgs {
    /// Execute the run, returning the process exit code
    pub fn execute(&self, config: &EnrollmentConfig) -> anyhow::Result<i32> {
        let dry_run = self.dry_run || config.application.dry_run;
        let options = IngestOptions {
            strict: self.strict || config.validation.strict,
        };

        crate::log_run_start!(self.input.display(), self.output_dir.display(), dry_run);

        let sink: Box<dyn OutputSink> = if dry_run {
            Box::new(DryRunSink::new(&self.output_dir))
        } else {
            Box::new(DirectorySink::new(
                &self.output_dir,
                config.output.create_missing_dir,
            ))
        };

        let mut stdout = std::io::stdout().lock();
        match pipeline::run(&self.input, sink.as_ref(), options) {
            Ok(report) => {
                print_report(&mut stdout, &report).context("Failed to print error log")?;
                report.summary.log_summary();
                Ok(report.summary.exit_code())
            }
            Err(e) => {
                tracing::error!(error = %e, "Run aborted");
                writeln!(stdout, "{e}").context("Failed to print error")?;
                Ok(e.exit_code())
            }
        }
    }
}

/// Prints every rejected-line message, then any output failures
pub fn print_report(out: &mut impl Write, report: &RunReport) -> std::io::Result<()> {
    for error in report.errors.entries() {
        writeln!(out, "{error}")?;
    }
    for error in &report.output_errors {
        writeln!(out, "{error}")?;
    }
    out.flush()
}
