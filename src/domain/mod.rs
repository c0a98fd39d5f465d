//! Domain models and types for Medroster.
//!
//! # Overview
//!
//! Records are composed from field groups rather than built through a
//! class hierarchy:
//!
//! | record | groups |
//! |--------|--------|
//! | [`Doctor`] | [`PersonalDetails`] + [`Employment`] + [`DoctorPractice`] |
//! | [`Nurse`] | [`PersonalDetails`] + [`Employment`] + [`NurseDuties`] |
//! | [`AmbulatoryPatient`] | [`PersonalDetails`] + [`MedicalCard`] + [`AmbulatoryCard`] |
//! | [`HospitalPatient`] | [`PersonalDetails`] + [`MedicalCard`] + [`HospitalStay`] |
//!
//! The capability traits [`Personal`], [`Employed`] and [`Patient`] give
//! uniform access to the shared groups, and [`Record`] is the contract the
//! loader relies on.
//!
//! # Validation
//!
//! Every field is validated on its own. An invalid value is stored as
//! `None` and the record is still built:
//!
//! ```rust
//! use medroster::domain::{HospitalPatient, Personal, Record, RecordId, RecordRules};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let line = "Сидорова Анна Сергеевна;female;23.11.1975;Самара;True;\
//!     3601 112233 10.10.2000;пр. Победы, 10;ср.спец;+7(846)222-33-44;\
//!     9876543210987654;служащий;Школа №5;3;-;пенициллин;Терапевтическое;12;Пневмония;";
//! let mut fields: Vec<&str> = line.split(';').collect();
//! fields.pop();
//!
//! let patient = HospitalPatient::from_fields(RecordId::new(1), &fields, &RecordRules::default())?;
//! assert_eq!(patient.person.gender(), None);
//! assert!(!patient.render().contains("Пол:"));
//! # Ok(())
//! # }
//! ```

pub mod ambulatory;
pub mod codes;
pub mod doctor;
pub mod employee;
pub mod errors;
pub mod fields;
pub mod hospital;
pub mod ids;
pub mod nurse;
pub mod patient;
pub mod person;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use ambulatory::{AmbulatoryCard, AmbulatoryPatient};
pub use codes::{DoctorCategory, EducationLevel, Gender, HealthGroup, PatientStatus, Profession, Rhesus};
pub use doctor::{Doctor, DoctorPractice};
pub use employee::{Employed, Employment};
pub use errors::{MedrosterError, RecordError};
pub use fields::{FieldReader, RejectedField};
pub use hospital::{HospitalPatient, HospitalStay};
pub use ids::RecordId;
pub use nurse::{Nurse, NurseDuties};
pub use patient::{MedicalCard, Patient};
pub use person::{Personal, PersonalDetails};
pub use record::{Record, RecordKind, RecordRules};
pub use result::Result;
