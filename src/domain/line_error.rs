//! Per-line validation failures and the error log
//!
//! A rejected line never aborts ingestion. Each problem becomes a
//! [`LineError`] carrying the 1-based line number, and the rendered messages
//! are printed once the run has finished.

use std::fmt;
use thiserror::Error;

/// Reason a line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineErrorKind {
    #[error("Invalid Format. Four items expected but {found} found.")]
    FieldCount { found: usize },

    #[error("User Id is required.")]
    MissingUserId,

    #[error("First and Last Name are required.")]
    MissingName,

    #[error("Name must be a first and last name separated by a single space.")]
    MalformedName,

    #[error("Version is required and must be numeric.")]
    InvalidVersion,

    #[error("Insurance Company is required.")]
    MissingCompany,
}

/// A validation failure tied to its source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based line number
    pub line: usize,
    pub kind: LineErrorKind,
}

impl LineError {
    pub fn new(line: usize, kind: LineErrorKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: Error - {}", self.line, self.kind)
    }
}

/// Ordered log of every rejected line's errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorLog {
    entries: Vec<LineError>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends all errors found on one line
    ///
    /// Lines are merged whole so entries stay in line order.
    pub fn extend_line(&mut self, errors: Vec<LineError>) {
        self.entries.extend(errors);
    }

    pub fn entries(&self) -> &[LineError] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Rendered messages, one per entry
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl IntoIterator for ErrorLog {
    type Item = LineError;
    type IntoIter = std::vec::IntoIter<LineError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
