//! Ingestion and deduplication engine
//!
//! Turns raw input lines into a [`CompanyPartition`] and an [`ErrorLog`].
//! Malformed lines never stop ingestion: their errors are collected and the
//! line is dropped as a whole, even when some of its fields were valid.
//!
//! ```
//! use enrollment::core::ingest::ingest;
//!
//! let outcome = ingest(["1,John Doe,1,Acme", "1,John Doe,2,Acme", "bad,line"]);
//!
//! assert_eq!(outcome.partition.get("Acme", "1").unwrap().version, 2);
//! assert_eq!(
//!     outcome.errors.messages(),
//!     vec!["Line 3: Error - Invalid Format. Four items expected but 2 found."]
//! );
//! ```

pub mod fields;
pub mod partition;

pub use fields::{split_fields, validate_fields, EXPECTED_FIELDS};
pub use partition::{CompanyPartition, UpsertOutcome};

use crate::domain::{ErrorLog, LineError, LineErrorKind};

/// Options controlling field validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestOptions {
    /// Treat empty user id, name and company values as line errors
    pub strict: bool,
}

/// Counters gathered while ingesting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub lines_read: usize,
    pub records_accepted: usize,
    pub lines_rejected: usize,
    pub records_replaced: usize,
    pub duplicates_ignored: usize,
}

/// Everything ingestion produces
#[derive(Debug, Clone, Default)]
pub struct IngestOutcome {
    pub partition: CompanyPartition,
    pub errors: ErrorLog,
    pub stats: IngestStats,
}

/// Line-at-a-time ingestion state
#[derive(Debug, Default)]
pub struct Ingestor {
    options: IngestOptions,
    outcome: IngestOutcome,
}

impl Ingestor {
    pub fn new(options: IngestOptions) -> Self {
        Self {
            options,
            outcome: IngestOutcome::default(),
        }
    }

    /// Processes the next line of input
    pub fn push_line(&mut self, line: &str) {
        self.outcome.stats.lines_read += 1;
        let line_no = self.outcome.stats.lines_read;

        let raw_fields = split_fields(line);
        let fields: [&str; EXPECTED_FIELDS] = match raw_fields.as_slice().try_into() {
            Ok(fields) => fields,
            Err(_) => {
                self.reject(vec![LineError::new(
                    line_no,
                    LineErrorKind::FieldCount {
                        found: raw_fields.len(),
                    },
                )]);
                return;
            }
        };

        let record = match validate_fields(line_no, fields, self.options.strict) {
            Ok(record) => record,
            Err(errors) => {
                self.reject(errors);
                return;
            }
        };

        let company = record.company.clone();
        let user_id = record.user_id.clone();
        match self.outcome.partition.upsert(record) {
            UpsertOutcome::Inserted => {
                self.outcome.stats.records_accepted += 1;
            }
            UpsertOutcome::Replaced { previous_version } => {
                self.outcome.stats.records_accepted += 1;
                self.outcome.stats.records_replaced += 1;
                tracing::trace!(
                    line = line_no,
                    company = %company,
                    user_id = %user_id,
                    previous_version,
                    "Replaced older record"
                );
            }
            UpsertOutcome::Ignored { stored_version } => {
                self.outcome.stats.duplicates_ignored += 1;
                tracing::debug!(
                    line = line_no,
                    company = %company,
                    user_id = %user_id,
                    stored_version,
                    "Ignored record not newer than stored version"
                );
            }
        }
    }

    fn reject(&mut self, errors: Vec<LineError>) {
        self.outcome.stats.lines_rejected += 1;
        if let Some(first) = errors.first() {
            tracing::debug!(
                line = first.line,
                error_count = errors.len(),
                reason = %first.kind,
                "Rejected line"
            );
        }
        self.outcome.errors.extend_line(errors);
    }

    /// Finishes ingestion and hands back the results
    pub fn finish(self) -> IngestOutcome {
        self.outcome
    }
}

/// Ingests lines with default options
pub fn ingest<I, S>(lines: I) -> IngestOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ingest_with(lines, IngestOptions::default())
}

/// Ingests lines with the given options
pub fn ingest_with<I, S>(lines: I, options: IngestOptions) -> IngestOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ingestor = Ingestor::new(options);
    for line in lines {
        ingestor.push_line(line.as_ref());
    }
    ingestor.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;

    #[test]
    fn test_ingest_scenario() {
        let outcome = ingest([
            "1,John Doe,1,Acme",
            "1,John Doe,2,Acme",
            "2,Jane Roe,1,Acme",
            "bad,line",
        ]);

        assert_eq!(
            outcome.errors.messages(),
            vec!["Line 4: Error - Invalid Format. Four items expected but 2 found."]
        );
        assert_eq!(outcome.partition.record_count(), 2);
        assert_eq!(outcome.partition.get("Acme", "1").unwrap().version, 2);
        assert_eq!(outcome.stats.lines_read, 4);
        assert_eq!(outcome.stats.records_accepted, 3);
        assert_eq!(outcome.stats.records_replaced, 1);
        assert_eq!(outcome.stats.lines_rejected, 1);
    }

    #[test]
    fn test_non_numeric_version_rejects_whole_line() {
        let outcome = ingest(["1,John Doe,abc,Acme"]);

        assert!(outcome.partition.is_empty());
        assert_eq!(
            outcome.errors.messages(),
            vec!["Line 1: Error - Version is required and must be numeric."]
        );
    }

    #[test]
    fn test_empty_version_rejected() {
        let outcome = ingest(["1,John Doe,,Acme"]);
        assert!(outcome.partition.is_empty());
        assert_eq!(outcome.errors.len(), 1);
    }

    #[test]
    fn test_identical_line_twice_is_idempotent() {
        let once = ingest(["1,John Doe,3,Acme"]);
        let twice = ingest(["1,John Doe,3,Acme", "1,John Doe,3,Acme"]);

        assert_eq!(once.partition, twice.partition);
        assert!(twice.errors.is_empty());
        assert_eq!(twice.stats.duplicates_ignored, 1);
    }

    #[test]
    fn test_higher_version_wins_in_either_order() {
        let forward = ingest(["1,John Doe,1,Acme", "1,Johnny Doe,2,Acme"]);
        let backward = ingest(["1,Johnny Doe,2,Acme", "1,John Doe,1,Acme"]);

        let expected = Record::new("1", "Johnny", "Doe", 2, "Acme");
        assert_eq!(forward.partition.get("Acme", "1"), Some(&expected));
        assert_eq!(backward.partition.get("Acme", "1"), Some(&expected));
    }

    #[test]
    fn test_field_count_mismatch_adds_single_error() {
        let outcome = ingest(["1,John Doe,1,Acme,extra", "", "1,John Doe,1,"]);

        assert!(outcome.partition.is_empty());
        assert_eq!(
            outcome.errors.messages(),
            vec![
                "Line 1: Error - Invalid Format. Four items expected but 5 found.",
                "Line 2: Error - Invalid Format. Four items expected but 1 found.",
                "Line 3: Error - Invalid Format. Four items expected but 3 found.",
            ]
        );
    }

    #[test]
    fn test_multiple_errors_on_one_line_stay_together() {
        let outcome = ingest(["1,John Doe,1,Acme", "2,Prince,v2,Acme", "3,Jane Roe,x,Acme"]);

        let lines: Vec<usize> = outcome.errors.entries().iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![2, 2, 3]);
        assert_eq!(outcome.stats.lines_rejected, 2);
        assert_eq!(outcome.partition.record_count(), 1);
    }

    #[test]
    fn test_strict_option_rejects_empty_user_id() {
        let lenient = ingest([",John Doe,1,Acme"]);
        assert!(lenient.errors.is_empty());
        assert!(lenient.partition.get("Acme", "").is_some());

        let strict = ingest_with([",John Doe,1,Acme"], IngestOptions { strict: true });
        assert!(strict.partition.is_empty());
        assert_eq!(
            strict.errors.messages(),
            vec!["Line 1: Error - User Id is required."]
        );
    }

    #[test]
    fn test_empty_trailing_company_is_a_field_count_error() {
        let outcome = ingest_with(["1,John Doe,1,"], IngestOptions { strict: true });
        assert_eq!(
            outcome.errors.messages(),
            vec!["Line 1: Error - Invalid Format. Four items expected but 3 found."]
        );
    }

    #[test]
    fn test_trailing_space_after_last_name_is_accepted() {
        let outcome = ingest(["1,John Doe ,1,Acme"]);
        assert!(outcome.errors.is_empty());
        assert_eq!(
            outcome.partition.get("Acme", "1"),
            Some(&Record::new("1", "John", "Doe", 1, "Acme"))
        );
    }

    #[test]
    fn test_ingestor_push_line() {
        let mut ingestor = Ingestor::new(IngestOptions::default());
        ingestor.push_line("1,John Doe,1,Acme");
        ingestor.push_line("2,Jane Roe,1,Globex");

        let outcome = ingestor.finish();
        assert_eq!(outcome.partition.company_count(), 2);
        assert_eq!(outcome.stats.records_accepted, 2);
    }
}
