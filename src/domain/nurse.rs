//! Nurse records

use super::employee::{Employed, Employment};
use super::errors::RecordError;
use super::fields::{FieldReader, RejectedField};
use super::ids::RecordId;
use super::person::{Personal, PersonalDetails};
use super::record::{Record, RecordKind, RecordRules};
use crate::report::{yes_no, Report};
use serde::Serialize;
use std::fmt;

/// Ward duties of a nurse, positions 17 to 19
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NurseDuties {
    pub sanitary_service: Option<bool>,
    pub patient_care: Option<bool>,
    pub medical_procedures: Option<bool>,
}

impl NurseDuties {
    fn read(fields: &mut FieldReader<'_>) -> Self {
        Self {
            sanitary_service: fields.flag("sanitary_service"),
            patient_care: fields.flag("patient_care"),
            medical_procedures: fields.flag("medical_procedures"),
        }
    }

    fn render(&self, report: &mut Report) {
        report
            .line("Санитарная обработка помещений", yes_no(self.sanitary_service))
            .line("Уход за больными", yes_no(self.patient_care))
            .line("Выполнение медицинских процедур", yes_no(self.medical_procedures));
    }
}

/// A nurse: personal details, employment and duties
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Nurse {
    pub person: PersonalDetails,
    pub employment: Employment,
    pub duties: NurseDuties,
    #[serde(rename = "rejected_fields")]
    rejected: Vec<RejectedField>,
}

impl Personal for Nurse {
    fn personal(&self) -> &PersonalDetails {
        &self.person
    }
}

impl Employed for Nurse {
    fn employment(&self) -> &Employment {
        &self.employment
    }
}

impl Record for Nurse {
    const KIND: RecordKind = RecordKind::Nurse;

    fn from_fields(
        id: RecordId,
        fields: &[&str],
        rules: &RecordRules,
    ) -> Result<Self, RecordError> {
        let mut reader = FieldReader::new(Self::KIND, fields)?;
        let person = PersonalDetails::read(id, &mut reader, rules);
        let employment = Employment::read(&mut reader)?;
        let duties = NurseDuties::read(&mut reader);
        Ok(Self {
            person,
            employment,
            duties,
            rejected: reader.finish(),
        })
    }

    fn render(&self) -> String {
        let mut report = Report::new();
        self.person.render(&mut report);
        self.employment.render(&mut report);
        self.duties.render(&mut report);
        report.finish()
    }

    fn rejected_fields(&self) -> &[RejectedField] {
        &self.rejected
    }
}

impl fmt::Display for Nurse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
