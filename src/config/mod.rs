//! Configuration management
//!
//! An optional TOML file tunes logging, dry runs, validation strictness and
//! output directory handling. Every value has a default; `${VAR_NAME}`
//! placeholders are substituted from the environment and `ENROLLMENT_*`
//! variables override individual keys.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//! dry_run = false
//!
//! [validation]
//! strict = false
//!
//! [output]
//! create_missing_dir = true
//!
//! [logging]
//! local_enabled = true
//! local_path = "${ENROLLMENT_LOG_DIR}"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, EnrollmentConfig, LoggingConfig, OutputConfig, ValidationConfig};
