// Medroster - Hospital personnel and patient records reporter
// Copyright (c) 2025 Medroster Contributors
// Licensed under the MIT License

//! # Medroster - hospital personnel and patient records
//!
//! Medroster loads doctors, nurses, ambulatory patients and hospital
//! patients from semicolon-delimited text files, validates every field on
//! its own and prints labelled reports that leave out whatever failed
//! validation.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`domain`] - Record types, field validators and errors
//! - [`loader`] - Line ingestion and identifier assignment
//! - [`report`] - Text and JSON rendering
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use medroster::loader::LoaderContext;
//! use medroster::domain::Personal;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut context = LoaderContext::new();
//! context.load_doctors("data/doctors.txt")?;
//! context.load_nurses("data/nurses.txt")?;
//!
//! for nurse in context.nurses() {
//!     println!("{}", nurse.summary());
//!     println!("{nurse}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Input format
//!
//! One record per line, fields in fixed positional order, each followed by
//! the delimiter. The segment after the last delimiter is ignored. A field
//! that fails validation is stored as `None`; only a wrong field count or
//! non-numeric text in a strict integer field rejects the line.
//!
//! ## Error Handling
//!
//! Library functions return [`domain::Result`], whose error type is
//! [`domain::MedrosterError`]. The CLI wraps command failures in `anyhow`.

pub mod cli;
pub mod config;
pub mod domain;
pub mod loader;
pub mod logging;
pub mod report;
