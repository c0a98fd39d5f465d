//! Domain error types
//!
//! Field-level validation failures never surface as errors: they are stored
//! as absent values. The types here cover the hard failures only, a line
//! with the wrong number of fields or a non-numeric value in one of the
//! strict integer fields, plus the usual I/O and configuration problems.

use super::ids::RecordId;
use super::record::RecordKind;
use thiserror::Error;

/// Main Medroster error type
#[derive(Debug, Error)]
pub enum MedrosterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A line of an input file could not be turned into a record
    #[error("{path}:{line}: {source}")]
    Record {
        /// Input file path
        path: String,
        /// 1-based line number
        line: usize,
        /// What went wrong with the line
        #[source]
        source: RecordError,
    },

    /// A record built from in-memory input was rejected
    #[error("Record error: {0}")]
    InvalidRecord(#[from] RecordError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Errors raised while constructing a single record
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The line does not carry the positional fields the record kind needs
    #[error("{kind} record expects {expected} fields, found {found}")]
    FieldCount {
        kind: RecordKind,
        expected: usize,
        found: usize,
    },

    /// A strict integer field holds something that is not a number
    #[error("Field '{field}' is not an integer: {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    /// The identifier counter reached the end of its range
    #[error("No identifiers left after {last}")]
    IdsExhausted { last: RecordId },
}

impl From<std::io::Error> for MedrosterError {
    fn from(err: std::io::Error) -> Self {
        MedrosterError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MedrosterError {
    fn from(err: serde_json::Error) -> Self {
        MedrosterError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for MedrosterError {
    fn from(err: toml::de::Error) -> Self {
        MedrosterError::Configuration(format!("TOML parse error: {err}"))
    }
}
