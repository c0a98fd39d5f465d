//! Record loading from delimited text files
//!
//! A [`LoaderContext`] owns everything that lives across loads: the next
//! identifier to issue, the per-kind record collections and the hospital
//! roster. Identifiers come from one counter shared by every kind, so
//! loading doctors and then nurses through the same context numbers the
//! nurses after the doctors.
//!
//! # Example
//!
//! ```rust,no_run
//! use medroster::loader::LoaderContext;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut context = LoaderContext::new();
//! context.load_doctors("data/doctors.txt")?;
//! context.load_hospital_patients("data/hospital_patients.txt")?;
//!
//! for doctor in context.doctors() {
//!     println!("{doctor}");
//! }
//! # Ok(())
//! # }
//! ```

use crate::config::{LoaderConfig, SourcesConfig};
use crate::domain::{
    AmbulatoryPatient, Doctor, HospitalPatient, MedrosterError, Nurse, Personal, Record,
    RecordError, RecordId, RecordKind, RecordRules, Result,
};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Loaded records and the identifier counter
#[derive(Debug, Clone)]
pub struct LoaderContext {
    next_id: RecordId,
    delimiter: String,
    rules: RecordRules,
    doctors: Vec<Doctor>,
    nurses: Vec<Nurse>,
    ambulatory_patients: Vec<AmbulatoryPatient>,
    hospital_patients: Vec<HospitalPatient>,
    hospital_roster: Vec<String>,
}

/// Records a [`LoaderContext`] can keep
pub trait Stored: Record {
    /// Moves the record into its collection
    fn store(self, context: &mut LoaderContext);
}

impl Stored for Doctor {
    fn store(self, context: &mut LoaderContext) {
        context.doctors.push(self);
    }
}

impl Stored for Nurse {
    fn store(self, context: &mut LoaderContext) {
        context.nurses.push(self);
    }
}

impl Stored for AmbulatoryPatient {
    fn store(self, context: &mut LoaderContext) {
        context.ambulatory_patients.push(self);
    }
}

impl Stored for HospitalPatient {
    fn store(self, context: &mut LoaderContext) {
        context.hospital_roster.push(self.summary());
        context.hospital_patients.push(self);
    }
}

impl Default for LoaderContext {
    fn default() -> Self {
        Self::from_config(&LoaderConfig::default())
    }
}

impl LoaderContext {
    /// Creates a context with the default delimiter, first id and rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context from the `[loader]` configuration section
    pub fn from_config(config: &LoaderConfig) -> Self {
        Self {
            next_id: RecordId::new(config.first_id),
            delimiter: config.delimiter.clone(),
            rules: RecordRules {
                full_name_max_chars: config.full_name_max_chars,
            },
            doctors: Vec::new(),
            nurses: Vec::new(),
            ambulatory_patients: Vec::new(),
            hospital_patients: Vec::new(),
            hospital_roster: Vec::new(),
        }
    }

    /// The identifier the next record will receive
    pub fn next_id(&self) -> RecordId {
        self.next_id
    }

    /// Builds a record from one line without storing it
    ///
    /// The line is split on the delimiter and the trailing segment is
    /// dropped. An identifier is consumed only if the record is built.
    ///
    /// # Errors
    ///
    /// Returns the [`RecordError`] raised by the record constructor, or
    /// [`RecordError::IdsExhausted`] once the counter has no successor.
    pub fn parse_line<R: Record>(&mut self, line: &str) -> std::result::Result<R, RecordError> {
        let following = self
            .next_id
            .next()
            .ok_or(RecordError::IdsExhausted { last: self.next_id })?;
        let mut fields: Vec<&str> = line.split(self.delimiter.as_str()).collect();
        fields.pop();
        let record = R::from_fields(self.next_id, &fields, &self.rules)?;
        self.next_id = following;
        Ok(record)
    }

    /// Builds and stores one record per non-empty line of `content`
    ///
    /// `origin` names the input in error messages.
    ///
    /// # Errors
    ///
    /// Stops at the first line that cannot be turned into a record. Records
    /// from earlier lines stay loaded.
    pub fn load_str<R: Stored>(&mut self, content: &str, origin: &str) -> Result<usize> {
        let mut loaded = 0;
        for (index, line) in content.lines().enumerate() {
            if self.ingest_line::<R>(line, origin, index + 1)? {
                loaded += 1;
            }
        }
        Ok(loaded)
    }

    /// Loads every line of the file at `path` as a record of kind `R`
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened or read, or on the first line
    /// that cannot be turned into a record.
    pub fn load<R: Stored>(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let file = File::open(path)
            .map_err(|e| MedrosterError::Io(format!("Failed to open {origin}: {e}")))?;

        let mut loaded = 0;
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                MedrosterError::Io(format!("Failed to read {origin} line {}: {e}", index + 1))
            })?;
            if self.ingest_line::<R>(&line, &origin, index + 1)? {
                loaded += 1;
            }
        }

        tracing::info!(kind = %R::KIND, path = %origin, loaded, "Loaded records");
        Ok(loaded)
    }

    fn ingest_line<R: Stored>(&mut self, line: &str, origin: &str, number: usize) -> Result<bool> {
        if line.trim().is_empty() {
            tracing::debug!(path = %origin, line = number, "Skipping empty line");
            return Ok(false);
        }
        let record = self
            .parse_line::<R>(line)
            .map_err(|source| MedrosterError::Record {
                path: origin.to_string(),
                line: number,
                source,
            })?;
        if !record.rejected_fields().is_empty() {
            tracing::debug!(
                kind = %R::KIND,
                id = %record.id(),
                rejected = record.rejected_fields().len(),
                "Record loaded with absent fields"
            );
        }
        record.store(self);
        Ok(true)
    }

    pub fn load_doctors(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        self.load::<Doctor>(path)
    }

    pub fn load_nurses(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        self.load::<Nurse>(path)
    }

    pub fn load_ambulatory_patients(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        self.load::<AmbulatoryPatient>(path)
    }

    pub fn load_hospital_patients(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        self.load::<HospitalPatient>(path)
    }

    /// Loads every configured source, in the order of [`RecordKind::ALL`]
    ///
    /// Returns the total number of records loaded.
    pub fn load_sources(&mut self, sources: &SourcesConfig) -> Result<usize> {
        let mut total = 0;
        for kind in RecordKind::ALL {
            let Some(path) = sources.path_for(kind) else {
                continue;
            };
            total += match kind {
                RecordKind::Doctor => self.load_doctors(path)?,
                RecordKind::Nurse => self.load_nurses(path)?,
                RecordKind::AmbulatoryPatient => self.load_ambulatory_patients(path)?,
                RecordKind::HospitalPatient => self.load_hospital_patients(path)?,
            };
        }
        Ok(total)
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn nurses(&self) -> &[Nurse] {
        &self.nurses
    }

    pub fn ambulatory_patients(&self) -> &[AmbulatoryPatient] {
        &self.ambulatory_patients
    }

    pub fn hospital_patients(&self) -> &[HospitalPatient] {
        &self.hospital_patients
    }

    /// `"<id>. <full_name>"` for every hospital patient, in load order
    pub fn hospital_roster(&self) -> &[String] {
        &self.hospital_roster
    }

    /// Number of records of the given kind
    pub fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Doctor => self.doctors.len(),
            RecordKind::Nurse => self.nurses.len(),
            RecordKind::AmbulatoryPatient => self.ambulatory_patients.len(),
            RecordKind::HospitalPatient => self.hospital_patients.len(),
        }
    }

    /// Total number of records held
    pub fn len(&self) -> usize {
        RecordKind::ALL.iter().map(|kind| self.count(*kind)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
