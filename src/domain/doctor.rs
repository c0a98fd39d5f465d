//! Doctor records

use super::codes::DoctorCategory;
use super::employee::{Employed, Employment};
use super::errors::RecordError;
use super::fields::{FieldReader, RejectedField};
use super::ids::RecordId;
use super::person::{Personal, PersonalDetails};
use super::record::{Record, RecordKind, RecordRules};
use crate::report::{yes_no, Report};
use serde::Serialize;
use std::fmt;

/// Academic standing and clinical duties of a doctor, positions 17 to 24
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorPractice {
    pub academic_degree: Option<bool>,
    pub academic_rank: Option<bool>,
    category: Option<DoctorCategory>,
    pub trainings: Option<bool>,
    pub medical_errors: String,
    pub performs_diagnosis: Option<bool>,
    pub performs_treatment: Option<bool>,
    pub performs_rehabilitation: Option<bool>,
}

impl DoctorPractice {
    fn read(fields: &mut FieldReader<'_>) -> Self {
        Self {
            academic_degree: fields.flag("academic_degree"),
            academic_rank: fields.flag("academic_rank"),
            category: fields.choice("category"),
            trainings: fields.flag("trainings"),
            medical_errors: fields.text(),
            performs_diagnosis: fields.flag("performs_diagnosis"),
            performs_treatment: fields.flag("performs_treatment"),
            performs_rehabilitation: fields.flag("performs_rehabilitation"),
        }
    }

    pub fn category(&self) -> Option<DoctorCategory> {
        self.category
    }

    fn render(&self, report: &mut Report) {
        report
            .line("Ученая степень", yes_no(self.academic_degree))
            .line("Ученое звание", yes_no(self.academic_rank))
            .line("Категория", self.category)
            .line("Повышение квалификации", yes_no(self.trainings))
            .line("Врачебные ошибки", Some(&self.medical_errors))
            .line(
                "Выполнение диагностики заболеваний",
                yes_no(self.performs_diagnosis),
            )
            .line("Лечебная практика", yes_no(self.performs_treatment))
            .line("Реабилитация больных", yes_no(self.performs_rehabilitation));
    }
}

/// A doctor: personal details, employment and practice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Doctor {
    pub person: PersonalDetails,
    pub employment: Employment,
    pub practice: DoctorPractice,
    #[serde(rename = "rejected_fields")]
    rejected: Vec<RejectedField>,
}

impl Personal for Doctor {
    fn personal(&self) -> &PersonalDetails {
        &self.person
    }
}

impl Employed for Doctor {
    fn employment(&self) -> &Employment {
        &self.employment
    }
}

impl Record for Doctor {
    const KIND: RecordKind = RecordKind::Doctor;

    fn from_fields(
        id: RecordId,
        fields: &[&str],
        rules: &RecordRules,
    ) -> Result<Self, RecordError> {
        let mut reader = FieldReader::new(Self::KIND, fields)?;
        let person = PersonalDetails::read(id, &mut reader, rules);
        let employment = Employment::read(&mut reader)?;
        let practice = DoctorPractice::read(&mut reader);
        Ok(Self {
            person,
            employment,
            practice,
            rejected: reader.finish(),
        })
    }

    fn render(&self) -> String {
        let mut report = Report::new();
        self.person.render(&mut report);
        self.employment.render(&mut report);
        self.practice.render(&mut report);
        report.finish()
    }

    fn rejected_fields(&self) -> &[RejectedField] {
        &self.rejected
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::tests::EMPLOYMENT;
    use crate::domain::person::tests::PERSON;

    const PRACTICE: [&str; 8] = [
        "True", "False", "высшая", "True", "нет", "True", "True", "False",
    ];

    fn doctor_fields() -> Vec<&'static str> {
        PERSON
            .iter()
            .chain(EMPLOYMENT.iter())
            .chain(PRACTICE.iter())
            .copied()
            .collect()
    }

    #[test]
    fn test_doctor_from_fields() {
        let doctor =
            Doctor::from_fields(RecordId::new(3), &doctor_fields(), &RecordRules::default())
                .unwrap();
        assert_eq!(doctor.id(), RecordId::new(3));
        assert_eq!(doctor.summary(), "3. Иванов Иван Иванович");
        assert_eq!(doctor.practice.category(), Some(DoctorCategory::Highest));
        assert_eq!(doctor.practice.academic_rank, Some(false));
        assert_eq!(doctor.employment().work_experience(), Some(20));
        assert!(doctor.rejected_fields().is_empty());
    }

    #[test]
    fn test_doctor_wrong_arity() {
        let mut fields = doctor_fields();
        fields.pop();
        let err = Doctor::from_fields(RecordId::new(1), &fields, &RecordRules::default())
            .unwrap_err();
        assert_eq!(
            err,
            RecordError::FieldCount {
                kind: RecordKind::Doctor,
                expected: 24,
                found: 23
            }
        );
    }

    #[test]
    fn test_doctor_render_sections_in_order() {
        let doctor =
            Doctor::from_fields(RecordId::new(1), &doctor_fields(), &RecordRules::default())
                .unwrap();
        let text = doctor.render();
        let phone = text.find("Телефон").unwrap();
        let language = text.find("Знание иностранного языка").unwrap();
        let degree = text.find("Ученая степень").unwrap();
        assert!(phone < language && language < degree);
        assert!(text.ends_with("\nЛечебная практика: да\nРеабилитация больных: нет"));
        assert_eq!(doctor.to_string(), text);
    }

    #[test]
    fn test_doctor_invalid_category_is_not_rendered() {
        let mut fields = doctor_fields();
        fields[18] = "третья";
        fields[19] = "sometimes";
        let doctor =
            Doctor::from_fields(RecordId::new(1), &fields, &RecordRules::default()).unwrap();
        let text = doctor.render();
        assert!(!text.contains("Категория"));
        assert!(!text.contains("Повышение квалификации"));
        let names: Vec<_> = doctor.rejected_fields().iter().map(|r| r.field).collect();
        assert_eq!(names, vec!["category", "trainings"]);
    }
}
