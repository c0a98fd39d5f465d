//! JSON export of loaded records

use crate::domain::{AmbulatoryPatient, Doctor, HospitalPatient, Nurse, Result};
use crate::loader::LoaderContext;
use serde::Serialize;

#[derive(Serialize)]
struct RecordsExport<'a> {
    doctors: &'a [Doctor],
    nurses: &'a [Nurse],
    ambulatory_patients: &'a [AmbulatoryPatient],
    hospital_patients: &'a [HospitalPatient],
    hospital_roster: &'a [String],
}

/// Serializes every record held by `context` as pretty-printed JSON
///
/// Absent fields are written as `null`.
pub fn to_json(context: &LoaderContext) -> Result<String> {
    let export = RecordsExport {
        doctors: context.doctors(),
        nurses: context.nurses(),
        ambulatory_patients: context.ambulatory_patients(),
        hospital_patients: context.hospital_patients(),
        hospital_roster: context.hospital_roster(),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}
