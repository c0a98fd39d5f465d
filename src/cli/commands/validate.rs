//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Medroster configuration file.

use crate::config::load_config;
use crate::domain::RecordKind;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates as part of loading
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Delimiter: {:?}", config.loader.delimiter);
        println!("  First ID: {}", config.loader.first_id);
        println!("  Full Name Limit: {}", config.loader.full_name_max_chars);
        for kind in RecordKind::ALL {
            println!(
                "  {}: {}",
                kind.title(),
                config.sources.path_for(kind).unwrap_or("(not set)")
            );
        }
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        }
        println!();
        Ok(0)
    }
}
