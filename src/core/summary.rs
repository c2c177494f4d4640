//! Run summary and reporting

use crate::core::ingest::IngestStats;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Summary of one run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Duration of the run
    pub duration: Duration,

    /// Ingestion counters
    pub ingest: IngestStats,

    /// Number of distinct companies with at least one record
    pub companies: usize,

    /// Number of company files written
    pub files_written: usize,

    /// Companies whose file could not be written
    pub output_failures: Vec<String>,

    /// Whether this was a dry run (no files written)
    pub dry_run: bool,
}

impl RunSummary {
    /// Create a new empty summary starting now
    pub fn new(dry_run: bool) -> Self {
        Self {
            started_at: Utc::now(),
            duration: Duration::from_secs(0),
            ingest: IngestStats::default(),
            companies: 0,
            files_written: 0,
            output_failures: Vec::new(),
            dry_run,
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a company whose file could not be written
    pub fn add_output_failure(&mut self, company: impl Into<String>) {
        self.output_failures.push(company.into());
    }

    /// True when every company file was written (or would have been)
    pub fn is_successful(&self) -> bool {
        self.output_failures.is_empty()
    }

    /// Process exit code for a completed run
    ///
    /// Rejected lines do not affect it; only failed company writes do.
    pub fn exit_code(&self) -> i32 {
        if self.is_successful() {
            0
        } else {
            4
        }
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            started_at = %self.started_at.to_rfc3339(),
            lines_read = self.ingest.lines_read,
            records_accepted = self.ingest.records_accepted,
            lines_rejected = self.ingest.lines_rejected,
            records_replaced = self.ingest.records_replaced,
            duplicates_ignored = self.ingest.duplicates_ignored,
            companies = self.companies,
            files_written = self.files_written,
            duration_ms = self.duration.as_millis() as u64,
            dry_run = self.dry_run,
            "Run completed"
        );

        if !self.output_failures.is_empty() {
            tracing::warn!(
                failure_count = self.output_failures.len(),
                companies = ?self.output_failures,
                "Run completed with output failures"
            );
        }
    }
}
