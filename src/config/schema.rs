//! Configuration schema types

use crate::domain::record::{RecordKind, DEFAULT_FULL_NAME_MAX_CHARS};
use serde::{Deserialize, Serialize};

/// Main Medroster configuration
///
/// Every section is optional; a missing section takes its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedrosterConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Input files, one per record kind
    #[serde(default)]
    pub sources: SourcesConfig,

    /// Line parsing settings
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MedrosterConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.sources.validate()?;
        self.loader.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Input file paths
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctors: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nurses: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambulatory_patients: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_patients: Option<String>,
}

impl SourcesConfig {
    /// The configured path for `kind`, if any
    pub fn path_for(&self, kind: RecordKind) -> Option<&str> {
        match kind {
            RecordKind::Doctor => self.doctors.as_deref(),
            RecordKind::Nurse => self.nurses.as_deref(),
            RecordKind::AmbulatoryPatient => self.ambulatory_patients.as_deref(),
            RecordKind::HospitalPatient => self.hospital_patients.as_deref(),
        }
    }

    /// True when no source is configured
    pub fn is_empty(&self) -> bool {
        RecordKind::ALL
            .iter()
            .all(|kind| self.path_for(*kind).is_none())
    }

    /// Returns `self` with every path set in `overrides` replaced
    pub fn merged_with(&self, overrides: &SourcesConfig) -> SourcesConfig {
        SourcesConfig {
            doctors: overrides.doctors.clone().or_else(|| self.doctors.clone()),
            nurses: overrides.nurses.clone().or_else(|| self.nurses.clone()),
            ambulatory_patients: overrides
                .ambulatory_patients
                .clone()
                .or_else(|| self.ambulatory_patients.clone()),
            hospital_patients: overrides
                .hospital_patients
                .clone()
                .or_else(|| self.hospital_patients.clone()),
        }
    }

    fn validate(&self) -> Result<(), String> {
        for kind in RecordKind::ALL {
            if let Some(path) = self.path_for(kind) {
                if path.trim().is_empty() {
                    return Err(format!("sources: path for {kind} records cannot be empty"));
                }
            }
        }
        Ok(())
    }
}

/// Line parsing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Identifier given to the first loaded record
    #[serde(default = "default_first_id")]
    pub first_id: u64,

    /// Full names are cut to this many characters
    #[serde(default = "default_full_name_max_chars")]
    pub full_name_max_chars: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            first_id: default_first_id(),
            full_name_max_chars: default_full_name_max_chars(),
        }
    }
}

impl LoaderConfig {
    fn validate(&self) -> Result<(), String> {
        if self.delimiter.is_empty() {
            return Err("loader.delimiter cannot be empty".to_string());
        }
        if self.full_name_max_chars == 0 {
            return Err("loader.full_name_max_chars must be > 0".to_string());
        }
        if self.first_id == u64::MAX {
            return Err(format!("loader.first_id must be < {}", u64::MAX));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_delimiter() -> String {
    ";".to_string()
}

fn default_first_id() -> u64 {
    1
}

fn default_full_name_max_chars() -> usize {
    DEFAULT_FULL_NAME_MAX_CHARS
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
