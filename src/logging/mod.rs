//! Logging and observability
//!
//! Structured logging through `tracing`, with:
//! - Console output on stderr (stdout carries the error log)
//! - Configurable log levels
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use enrollment::logging::init_logging;
//! use enrollment::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a run
///
/// # Example
///
/// ```no_run
/// use enrollment::log_run_start;
///
/// log_run_start!("enrollment.csv", "out/", false);
/// ```
#[macro_export]
macro_rules! log_run_start {
    ($input:expr, $output_dir:expr, $dry_run:expr) => {
        tracing::info!(
            input = %$input,
            output_dir = %$output_dir,
            dry_run = $dry_run,
            "Starting run"
        );
    };
}

/// Log a company file written to disk
///
/// # Example
///
/// ```no_run
/// use enrollment::log_company_written;
///
/// log_company_written!("Acme", 12, "out/Acme.csv");
/// ```
#[macro_export]
macro_rules! log_company_written {
    ($company:expr, $records:expr, $path:expr) => {
        tracing::info!(
            company = %$company,
            records = $records,
            path = %$path,
            "Wrote company file"
        );
    };
}
