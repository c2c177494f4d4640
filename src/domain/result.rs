//! Result type alias
//!
//! Uses [`EnrollmentError`] as the error type for every fallible operation
//! outside the per-line validation path.

use super::errors::EnrollmentError;

/// Result type alias for enrollment operations
///
/// # Examples
///
/// ```
/// use enrollment::domain::result::Result;
/// use enrollment::domain::errors::EnrollmentError;
///
/// fn failing_function() -> Result<()> {
///     Err(EnrollmentError::Configuration("bad".to_string()))
/// }
///
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, EnrollmentError>;
