//! Domain error types
//!
//! Fatal and collaborator errors live in [`EnrollmentError`]. Problems with a
//! single input line are not errors in this sense; they are recorded as
//! [`LineError`](crate::domain::LineError) entries in the error log.

use thiserror::Error;

/// Main error type
///
/// Every variant halts the run (or, for [`EnrollmentError::Output`], the
/// write of one company file).
#[derive(Debug, Error)]
pub enum EnrollmentError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The input file name does not end in `.csv`
    #[error("ERROR: File type must be CSV.")]
    InvalidFileType {
        /// Extension that was found (empty if none)
        extension: String,
    },

    /// The input file could not be opened or read
    #[error("An error has occurred. Unable to read input file {path}: {message}")]
    InputUnreadable { path: String, message: String },

    /// The output directory is missing or unusable
    #[error("An error has occurred. Output directory {path} is not usable: {message}")]
    OutputDirectory { path: String, message: String },

    /// A company file could not be written
    #[error("Failed to write output for company '{company}': {message}")]
    Output { company: String, message: String },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl EnrollmentError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            EnrollmentError::Configuration(_) => 2,
            EnrollmentError::InvalidFileType { .. }
            | EnrollmentError::InputUnreadable { .. }
            | EnrollmentError::OutputDirectory { .. } => 3,
            EnrollmentError::Output { .. } => 4,
            EnrollmentError::Io(_) => 5,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for EnrollmentError {
    fn from(err: std::io::Error) -> Self {
        EnrollmentError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for EnrollmentError {
    fn from(err: toml::de::Error) -> Self {
        EnrollmentError::Configuration(format!("TOML parse error: {err}"))
    }
}
