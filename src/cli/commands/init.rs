//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "medroster.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Medroster configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Point [sources] at your data files in {}", self.output);
                println!("  2. Validate configuration: medroster validate-config");
                println!("  3. Print reports: medroster report");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the sample configuration
    fn generate_config() -> String {
        r#"# Medroster Configuration File
# Hospital personnel and patient records reporter

[application]
log_level = "warn"  # trace | debug | info | warn | error

# One semicolon-delimited file per record kind; omit the ones you don't have.
# ${VAR} placeholders are replaced with environment variables.
[sources]
doctors = "data/doctors.txt"
nurses = "data/nurses.txt"
ambulatory_patients = "data/ambulatory_patients.txt"
hospital_patients = "data/hospital_patients.txt"

[loader]
delimiter = ";"
first_id = 1
full_name_max_chars = 25

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"  # daily | hourly
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MedrosterConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generated_config_parses_and_validates() {
        let config: MedrosterConfig = toml::from_str(&InitArgs::generate_config()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.sources.doctors.as_deref(),
            Some("data/doctors.txt")
        );
    }

    #[test]
    fn test_init_writes_file_and_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("medroster.toml").to_string_lossy().to_string();

        let args = InitArgs {
            output: output.clone(),
            force: false,
        };
        assert_eq!(args.execute().unwrap(), 0);
        assert!(Path::new(&output).exists());
        assert_eq!(args.execute().unwrap(), 2);

        let forced = InitArgs {
            output,
            force: true,
        };
        assert_eq!(forced.execute().unwrap(), 0);
    }
}
