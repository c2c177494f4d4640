//! Run orchestration
//!
//! Wires the collaborators around the core: check the input, read it,
//! ingest, render each company, hand the files to an [`OutputSink`].

use crate::adapters::filesystem::{check_input_extension, read_lines};
use crate::adapters::traits::OutputSink;
use crate::core::ingest::{ingest_with, IngestOptions};
use crate::core::summary::RunSummary;
use crate::core::writer;
use crate::domain::{EnrollmentError, ErrorLog, Result};
use std::path::Path;
use std::time::Instant;

/// Outcome of a completed run
#[derive(Debug)]
pub struct RunReport {
    pub summary: RunSummary,
    /// Rejected-line messages, in line order
    pub errors: ErrorLog,
    /// Company files that could not be written
    pub output_errors: Vec<EnrollmentError>,
}

/// Runs the whole pipeline for one input file
///
/// # Errors
///
/// Returns an error, before any file is written, when the input has the
/// wrong extension or cannot be read, or when the sink cannot be prepared.
/// Problems with individual lines or company files are reported in the
/// [`RunReport`] instead.
pub fn run(input: &Path, sink: &dyn OutputSink, options: IngestOptions) -> Result<RunReport> {
    let start_time = Instant::now();
    let mut summary = RunSummary::new(sink.is_dry_run());

    check_input_extension(input)?;
    let lines = read_lines(input)?;
    tracing::debug!(path = %input.display(), lines = lines.len(), "Read input file");

    sink.prepare()?;

    let outcome = ingest_with(&lines, options);
    summary.ingest = outcome.stats;
    summary.companies = outcome.partition.company_count();

    let mut output_errors = Vec::new();
    for output in writer::partition(outcome.partition) {
        match sink.write(&output) {
            Ok(path) => {
                if !sink.is_dry_run() {
                    summary.files_written += 1;
                    crate::log_company_written!(output.company, output.record_count, path.display());
                }
            }
            Err(e) => {
                tracing::error!(company = %output.company, error = %e, "Failed to write company file");
                summary.add_output_failure(output.company.clone());
                output_errors.push(e);
            }
        }
    }

    Ok(RunReport {
        summary: summary.with_duration(start_time.elapsed()),
        errors: outcome.errors,
        output_errors,
    })
}
