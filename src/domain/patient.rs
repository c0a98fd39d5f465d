//! Medical card block shared by ambulatory and hospital patients

use super::codes::{PatientStatus, Rhesus};
use super::errors::RecordError;
use super::fields::FieldReader;
use super::person::Personal;
use crate::report::{detected, Report};
use serde::Serialize;

/// Accepted ABO blood groups, numbered 1 to 4
pub const BLOOD_TYPES: std::ops::RangeInclusive<i64> = 1..=4;

/// Insurance, occupation and blood fields, positions 10 to 15 of a patient line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicalCard {
    pub medical_policy: String,
    status: Option<PatientStatus>,
    pub place_of_work_or_study: String,
    blood_type: Option<i64>,
    rhesus: Option<Rhesus>,
    pub allergic_reactions: String,
}

impl MedicalCard {
    pub(crate) fn read(fields: &mut FieldReader<'_>) -> Result<Self, RecordError> {
        Ok(Self {
            medical_policy: fields.text(),
            status: fields.choice("status"),
            place_of_work_or_study: fields.text(),
            blood_type: fields.gated_int("blood_type", BLOOD_TYPES)?,
            rhesus: fields.choice("rhesus"),
            allergic_reactions: fields.text(),
        })
    }

    pub fn status(&self) -> Option<PatientStatus> {
        self.status
    }

    pub fn blood_type(&self) -> Option<i64> {
        self.blood_type
    }

    pub fn rhesus(&self) -> Option<Rhesus> {
        self.rhesus
    }

    /// `"<type>(<rhesus>)"`, only when both parts are known
    pub fn blood_group(&self) -> Option<String> {
        match (self.blood_type, self.rhesus) {
            (Some(blood_type), Some(rhesus)) => Some(format!("{blood_type}({rhesus})")),
            _ => None,
        }
    }

    pub(crate) fn render(&self, report: &mut Report) {
        report
            .line("Медицинский полис", Some(&self.medical_policy))
            .line("Статус", self.status)
            .line("Место работы (учебы)", Some(&self.place_of_work_or_study))
            .line("Группа крови", self.blood_group())
            .line("Аллергические реакции", detected(&self.allergic_reactions));
    }
}

/// Capability of records describing patients
pub trait Patient: Personal {
    fn medical_card(&self) -> &MedicalCard;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::record::RecordKind;

    /// Six valid medical card fields
    pub(crate) const CARD: [&str; 6] = [
        "1234567890123456",
        "рабочий",
        "Завод им. Кирова",
        "2",
        "+",
        "Не выявлено",
    ];

    fn read_card(card: &[&str]) -> Result<MedicalCard, RecordError> {
        let values: Vec<&str> = card
            .iter()
            .copied()
            .chain(std::iter::repeat("").take(12))
            .collect();
        let mut reader = FieldReader::new(RecordKind::HospitalPatient, &values).unwrap();
        MedicalCard::read(&mut reader)
    }

    #[test]
    fn test_valid_card() {
        let card = read_card(&CARD).unwrap();
        assert_eq!(card.status(), Some(PatientStatus::Worker));
        assert_eq!(card.blood_type(), Some(2));
        assert_eq!(card.rhesus(), Some(Rhesus::Positive));
        assert_eq!(card.blood_group().as_deref(), Some("2(+)"));
    }

    #[test]
    fn test_blood_group_needs_both_parts() {
        let mut fields = CARD;
        fields[4] = "±";
        let card = read_card(&fields).unwrap();
        assert_eq!(card.blood_type(), Some(2));
        assert_eq!(card.blood_group(), None);

        fields = CARD;
        fields[3] = "7";
        let card = read_card(&fields).unwrap();
        assert_eq!(card.blood_group(), None);
    }

    #[test]
    fn test_non_numeric_blood_type_inside_gate_is_an_error() {
        let mut fields = CARD;
        fields[3] = "2a";
        assert!(read_card(&fields).is_err());

        fields[3] = "AB";
        assert_eq!(read_card(&fields).unwrap().blood_type(), None);
    }

    #[test]
    fn test_render_hides_undetected_allergies() {
        let card = read_card(&CARD).unwrap();
        let mut report = Report::new();
        card.render(&mut report);
        let text = report.finish();
        assert!(!text.contains("Аллергические реакции"));
        assert!(text.ends_with("\nГруппа крови: 2(+)"));
    }
}
