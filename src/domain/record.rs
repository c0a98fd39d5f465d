//! Record kinds and the common record contract

use super::errors::RecordError;
use super::fields::RejectedField;
use super::ids::RecordId;
use super::person::Personal;
use serde::Serialize;
use std::fmt;

/// Default limit for the stored full name, in characters
pub const DEFAULT_FULL_NAME_MAX_CHARS: usize = 25;

/// The four loadable record kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Doctor,
    Nurse,
    AmbulatoryPatient,
    HospitalPatient,
}

impl RecordKind {
    /// Every kind, in the order sources are loaded
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Doctor,
        RecordKind::Nurse,
        RecordKind::AmbulatoryPatient,
        RecordKind::HospitalPatient,
    ];

    /// Number of positional fields a line of this kind carries
    pub const fn field_count(self) -> usize {
        match self {
            RecordKind::Doctor => 24,
            RecordKind::Nurse => 19,
            RecordKind::AmbulatoryPatient => 19,
            RecordKind::HospitalPatient => 18,
        }
    }

    /// Plural heading used in listings
    pub const fn title(self) -> &'static str {
        match self {
            RecordKind::Doctor => "Doctors",
            RecordKind::Nurse => "Nurses",
            RecordKind::AmbulatoryPatient => "Ambulatory patients",
            RecordKind::HospitalPatient => "Hospital patients",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Doctor => "doctor",
            RecordKind::Nurse => "nurse",
            RecordKind::AmbulatoryPatient => "ambulatory patient",
            RecordKind::HospitalPatient => "hospital patient",
        };
        f.write_str(name)
    }
}

/// Tunables applied while building records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRules {
    /// Full names are cut to this many characters
    pub full_name_max_chars: usize,
}

impl Default for RecordRules {
    fn default() -> Self {
        Self {
            full_name_max_chars: DEFAULT_FULL_NAME_MAX_CHARS,
        }
    }
}

/// A loadable record
///
/// Implemented by [`Doctor`](super::Doctor), [`Nurse`](super::Nurse),
/// [`AmbulatoryPatient`](super::AmbulatoryPatient) and
/// [`HospitalPatient`](super::HospitalPatient).
pub trait Record: Personal + Serialize + fmt::Display + Sized {
    /// Kind tag for this record type
    const KIND: RecordKind;

    /// Builds a record from the positional fields of one line
    ///
    /// `fields` must already have the trailing segment removed.
    ///
    /// # Errors
    ///
    /// Fails on a field count mismatch or on non-numeric text in a strict
    /// integer field. Any other invalid field is stored as absent.
    fn from_fields(id: RecordId, fields: &[&str], rules: &RecordRules)
        -> Result<Self, RecordError>;

    /// Renders the labelled multi-line report, skipping absent values
    fn render(&self) -> String;

    /// Fields that failed validation while this record was built
    fn rejected_fields(&self) -> &[RejectedField];
}
