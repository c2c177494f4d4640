//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::EnrollmentConfig;
use crate::domain::errors::EnrollmentError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// 1. Reads the TOML file
/// 2. Substitutes `${VAR}` placeholders from the environment
/// 3. Parses the TOML
/// 4. Applies `ENROLLMENT_*` environment overrides
/// 5. Validates the result
///
/// # Errors
///
/// Returns a configuration error if the file is missing or unreadable, a
/// referenced variable is unset, parsing fails, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use enrollment::config::loader::load_config;
///
/// let config = load_config("enrollment.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<EnrollmentConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(EnrollmentError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        EnrollmentError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: EnrollmentConfig = toml::from_str(&contents)
        .map_err(|e| EnrollmentError::Configuration(format!("Failed to parse TOML: {e}")))?;

    finalize(config)
}

/// Loads the file when a path is given, otherwise starts from defaults
///
/// Environment overrides and validation apply in both cases.
pub fn load_config_or_default(path: Option<&str>) -> Result<EnrollmentConfig> {
    match path {
        Some(path) => load_config(path),
        None => finalize(EnrollmentConfig::default()),
    }
}

fn finalize(mut config: EnrollmentConfig) -> Result<EnrollmentConfig> {
    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        EnrollmentError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| EnrollmentError::Configuration(format!("Invalid placeholder pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(EnrollmentError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the ENROLLMENT_* prefix
///
/// Variables follow `ENROLLMENT_<SECTION>_<KEY>`, for example
/// `ENROLLMENT_VALIDATION_STRICT`. Unparseable booleans are ignored.
fn apply_env_overrides(config: &mut EnrollmentConfig) {
    if let Ok(val) = std::env::var("ENROLLMENT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Some(val) = env_bool("ENROLLMENT_APPLICATION_DRY_RUN") {
        config.application.dry_run = val;
    }

    if let Some(val) = env_bool("ENROLLMENT_VALIDATION_STRICT") {
        config.validation.strict = val;
    }

    if let Some(val) = env_bool("ENROLLMENT_OUTPUT_CREATE_MISSING_DIR") {
        config.output.create_missing_dir = val;
    }

    if let Some(val) = env_bool("ENROLLMENT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val;
    }
    if let Ok(val) = std::env::var("ENROLLMENT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("ENROLLMENT_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}

fn env_bool(name: &str) -> Option<bool> {
    std::env::var(name).ok()?.trim().parse().ok()
}
