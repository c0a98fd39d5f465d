//! CLI command implementations
//!
//! Exit codes: 0 success, 2 configuration error, 3 input data error,
//! 5 fatal error.

pub mod audit;
pub mod init;
pub mod list;
pub mod report;
pub mod validate;

use crate::config::{load_config_or_default, SourcesConfig};
use crate::domain::MedrosterError;
use crate::loader::LoaderContext;
use clap::Args;

/// Input file options shared by the record commands
///
/// Paths given here replace the matching `[sources]` entries.
#[derive(Args, Debug, Default, Clone)]
pub struct SourceArgs {
    /// Doctors file
    #[arg(long)]
    pub doctors: Option<String>,

    /// Nurses file
    #[arg(long)]
    pub nurses: Option<String>,

    /// Ambulatory patients file
    #[arg(long)]
    pub ambulatory: Option<String>,

    /// Hospital patients file
    #[arg(long)]
    pub hospital: Option<String>,
}

impl SourceArgs {
    fn to_sources(&self) -> SourcesConfig {
        SourcesConfig {
            doctors: self.doctors.clone(),
            nurses: self.nurses.clone(),
            ambulatory_patients: self.ambulatory.clone(),
            hospital_patients: self.hospital.clone(),
        }
    }
}

/// Loads configuration and every source into a fresh context
///
/// Problems are reported on stderr; the `Err` value is the exit code.
pub(crate) fn load_records(config_path: &str, args: &SourceArgs) -> Result<LoaderContext, i32> {
    let config = match load_config_or_default(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ Failed to load configuration file");
            eprintln!("   Error: {e}");
            return Err(2); // Configuration error exit code
        }
    };

    let sources = config.sources.merged_with(&args.to_sources());
    if sources.is_empty() {
        eprintln!("❌ No input files configured");
        eprintln!(
            "   Pass --doctors, --nurses, --ambulatory or --hospital, or set [sources] in {config_path}"
        );
        return Err(2); // Configuration error exit code
    }

    let mut context = LoaderContext::from_config(&config.loader);
    match context.load_sources(&sources) {
        Ok(total) => {
            tracing::info!(total, next_id = %context.next_id(), "All sources loaded");
            Ok(context)
        }
        Err(e) => {
            tracing::error!(error = %e, "Loading records failed");
            eprintln!("❌ Failed to load records");
            eprintln!("   Error: {e}");
            match e {
                MedrosterError::Record { .. } | MedrosterError::Io(_) => Err(3), // Input data error exit code
                _ => Err(5), // Fatal error exit code
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_args_mapping() {
        let args = SourceArgs {
            ambulatory: Some("a.txt".to_string()),
            ..SourceArgs::default()
        };
        let sources = args.to_sources();
        assert_eq!(sources.ambulatory_patients.as_deref(), Some("a.txt"));
        assert_eq!(sources.doctors, None);
    }

    #[test]
    fn test_load_records_without_sources() {
        let result = load_records("/nonexistent/medroster.toml", &SourceArgs::default());
        assert_eq!(result.unwrap_err(), 2);
    }

    #[test]
    fn test_load_records_missing_input_file() {
        let args = SourceArgs {
            nurses: Some("/nonexistent/nurses.txt".to_string()),
            ..SourceArgs::default()
        };
        let result = load_records("/nonexistent/medroster.toml", &args);
        assert_eq!(result.unwrap_err(), 3);
    }
}
