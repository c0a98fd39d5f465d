//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::MedrosterConfig;
use crate::domain::errors::MedrosterError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("valid placeholder pattern")
});

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into MedrosterConfig
/// 4. Applies environment variable overrides (MEDROSTER_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, a referenced
/// environment variable is not set, TOML parsing fails, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use medroster::config::loader::load_config;
///
/// let config = load_config("medroster.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<MedrosterConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MedrosterError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        MedrosterError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: MedrosterConfig = toml::from_str(&contents)
        .map_err(|e| MedrosterError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finalize(&mut config)?;
    Ok(config)
}

/// Like [`load_config`], but a missing file yields the defaults
///
/// Environment overrides and validation still apply to the defaults.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<MedrosterConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "No configuration file, using defaults");
    let mut config = MedrosterConfig::default();
    finalize(&mut config)?;
    Ok(config)
}

fn finalize(config: &mut MedrosterConfig) -> Result<()> {
    apply_env_overrides(config)?;
    config.validate().map_err(|e| {
        MedrosterError::Configuration(format!("Configuration validation failed: {}", e))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in ENV_PLACEHOLDER.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(MedrosterError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using MEDROSTER_* prefix
///
/// Environment variables follow the pattern: MEDROSTER_<SECTION>_<KEY>,
/// for example MEDROSTER_SOURCES_DOCTORS or MEDROSTER_LOADER_DELIMITER.
fn apply_env_overrides(config: &mut MedrosterConfig) -> Result<()> {
    if let Ok(val) = std::env::var("MEDROSTER_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("MEDROSTER_SOURCES_DOCTORS") {
        config.sources.doctors = Some(val);
    }
    if let Ok(val) = std::env::var("MEDROSTER_SOURCES_NURSES") {
        config.sources.nurses = Some(val);
    }
    if let Ok(val) = std::env::var("MEDROSTER_SOURCES_AMBULATORY_PATIENTS") {
        config.sources.ambulatory_patients = Some(val);
    }
    if let Ok(val) = std::env::var("MEDROSTER_SOURCES_HOSPITAL_PATIENTS") {
        config.sources.hospital_patients = Some(val);
    }

    if let Ok(val) = std::env::var("MEDROSTER_LOADER_DELIMITER") {
        config.loader.delimiter = val;
    }
    if let Ok(val) = std::env::var("MEDROSTER_LOADER_FIRST_ID") {
        config.loader.first_id = val.parse().map_err(|_| {
            MedrosterError::Configuration(format!(
                "MEDROSTER_LOADER_FIRST_ID must be a non-negative integer, got '{val}'"
            ))
        })?;
    }
    if let Ok(val) = std::env::var("MEDROSTER_LOADER_FULL_NAME_MAX_CHARS") {
        config.loader.full_name_max_chars = val.parse().map_err(|_| {
            MedrosterError::Configuration(format!(
                "MEDROSTER_LOADER_FULL_NAME_MAX_CHARS must be a non-negative integer, got '{val}'"
            ))
        })?;
    }

    if let Ok(val) = std::env::var("MEDROSTER_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().map_err(|_| {
            MedrosterError::Configuration(format!(
                "MEDROSTER_LOGGING_LOCAL_ENABLED must be true or false, got '{val}'"
            ))
        })?;
    }
    if let Ok(val) = std::env::var("MEDROSTER_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("MEDROSTER_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
