//! Configuration management for Medroster.
//!
//! Medroster reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `MEDROSTER_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [sources]
//! doctors = "${MEDROSTER_DATA}/doctors.txt"
//! nurses = "data/nurses.txt"
//! ambulatory_patients = "data/ambulatory_patients.txt"
//! hospital_patients = "data/hospital_patients.txt"
//!
//! [loader]
//! delimiter = ";"
//! first_id = 1
//! full_name_max_chars = 25
//!
//! [logging]
//! local_enabled = false
//! local_path = "logs"
//! local_rotation = "daily"
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use medroster::config::load_config;
//!
//! # fn example() {
//! match load_config("medroster.toml") {
//!     Ok(config) => println!("Delimiter: {}", config.loader.delimiter),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, LoaderConfig, LoggingConfig, MedrosterConfig, SourcesConfig};
