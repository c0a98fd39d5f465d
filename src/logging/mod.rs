//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - Human-readable console output on stderr
//! - Configurable log levels, `RUST_LOG` aware
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use medroster::logging::init_logging;
//! use medroster::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(path = "data/nurses.txt", "Loading nurses");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
