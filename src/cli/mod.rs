//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Medroster using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Medroster - hospital personnel and patient records reporter
#[derive(Parser, Debug)]
#[command(name = "medroster")]
#[command(version, about, long_about = None)]
#[command(author = "Medroster Contributors")]
pub struct Cli {
    /// Path to configuration file (optional; defaults apply when missing)
    #[arg(short, long, default_value = "medroster.toml", env = "MEDROSTER_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MEDROSTER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load records and print their reports
    Report(commands::report::ReportArgs),

    /// Print a one-line summary per record and the hospital roster
    List(commands::list::ListArgs),

    /// Show the fields that failed validation, per record
    Audit(commands::audit::AuditArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
