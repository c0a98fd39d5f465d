//! Hospital (inpatient) patient records

use super::errors::RecordError;
use super::fields::{FieldReader, RejectedField};
use super::ids::RecordId;
use super::patient::{MedicalCard, Patient};
use super::person::{Personal, PersonalDetails};
use super::record::{Record, RecordKind, RecordRules};
use crate::report::{detected, Report};
use serde::Serialize;
use std::fmt;

/// Ward placement fields, positions 16 to 18
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HospitalStay {
    pub medical_department: String,
    pub room_number: Option<i64>,
    pub clinic_diagnosis: String,
}

impl HospitalStay {
    fn read(fields: &mut FieldReader<'_>) -> Self {
        Self {
            medical_department: fields.text(),
            room_number: fields.int("room_number", None),
            clinic_diagnosis: fields.text(),
        }
    }

    fn render(&self, report: &mut Report) {
        report
            .line("Отделение", Some(&self.medical_department))
            .line("Палата", self.room_number)
            .line("Клинический диагноз", detected(&self.clinic_diagnosis));
    }
}

/// A patient admitted to a ward
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HospitalPatient {
    pub person: PersonalDetails,
    pub card: MedicalCard,
    pub stay: HospitalStay,
    #[serde(rename = "rejected_fields")]
    rejected: Vec<RejectedField>,
}

impl Personal for HospitalPatient {
    fn personal(&self) -> &PersonalDetails {
        &self.person
    }
}

impl Patient for HospitalPatient {
    fn medical_card(&self) -> &MedicalCard {
        &self.card
    }
}

impl Record for HospitalPatient {
    const KIND: RecordKind = RecordKind::HospitalPatient;

    fn from_fields(
        id: RecordId,
        fields: &[&str],
        rules: &RecordRules,
    ) -> Result<Self, RecordError> {
        let mut reader = FieldReader::new(Self::KIND, fields)?;
        let person = PersonalDetails::read(id, &mut reader, rules);
        let card = MedicalCard::read(&mut reader)?;
        let stay = HospitalStay::read(&mut reader);
        Ok(Self {
            person,
            card,
            stay,
            rejected: reader.finish(),
        })
    }

    fn render(&self) -> String {
        let mut report = Report::new();
        self.person.render(&mut report);
        self.card.render(&mut report);
        self.stay.render(&mut report);
        report.finish()
    }

    fn rejected_fields(&self) -> &[RejectedField] {
        &self.rejected
    }
}

impl fmt::Display for HospitalPatient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::patient::tests::CARD;
    use crate::domain::person::tests::PERSON;

    fn build(stay: [&'static str; 3]) -> HospitalPatient {
        let fields: Vec<&str> = PERSON
            .iter()
            .chain(CARD.iter())
            .chain(stay.iter())
            .copied()
            .collect();
        HospitalPatient::from_fields(RecordId::new(9), &fields, &RecordRules::default()).unwrap()
    }

    #[test]
    fn test_hospital_from_fields() {
        let patient = build(["Хирургическое", "14", "Аппендицит"]);
        assert_eq!(patient.stay.room_number, Some(14));
        assert_eq!(patient.summary(), "9. Иванов Иван Иванович");
        assert!(patient.render().ends_with(
            "\nОтделение: Хирургическое\nПалата: 14\nКлинический диагноз: Аппендицит"
        ));
    }

    #[test]
    fn test_room_number_any_integer_or_absent() {
        assert_eq!(build(["", "1204", ""]).stay.room_number, Some(1204));
        let patient = build(["", "14б", "Не выявлено"]);
        assert_eq!(patient.stay.room_number, None);
        assert!(patient.render().ends_with("\nОтделение: "));
        assert_eq!(patient.rejected_fields().len(), 1);
    }
}
