//! Domain models and types
//!
//! - [`Record`] - one accepted enrollment entry
//! - [`LineError`] / [`ErrorLog`] - per-line validation failures
//! - [`EnrollmentError`] - fatal and collaborator errors
//! - [`Result`] - result alias over [`EnrollmentError`]

pub mod errors;
pub mod line_error;
pub mod record;
pub mod result;

pub use errors::EnrollmentError;
pub use line_error::{ErrorLog, LineError, LineErrorKind};
pub use record::Record;
pub use result::Result;
