//! Output sink abstraction
//!
//! The pipeline hands each rendered company file to an [`OutputSink`]. The
//! directory sink writes real files; the dry-run sink only reports where the
//! file would have gone.

use crate::core::writer::CompanyOutput;
use crate::domain::Result;
use std::path::PathBuf;

/// Destination for rendered company files
pub trait OutputSink {
    /// Make the destination ready before anything is written
    ///
    /// # Errors
    ///
    /// Returns an error if the destination is unusable. The run aborts
    /// before ingestion in that case.
    fn prepare(&self) -> Result<()>;

    /// Write one company's file, returning its final path
    ///
    /// # Errors
    ///
    /// Returns [`EnrollmentError::Output`](crate::domain::EnrollmentError::Output)
    /// if this company could not be written. Other companies are still
    /// attempted.
    fn write(&self, output: &CompanyOutput) -> Result<PathBuf>;

    /// Whether this sink skips writing
    fn is_dry_run(&self) -> bool {
        false
    }
}
