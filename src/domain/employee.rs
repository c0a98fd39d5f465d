//! Employment block shared by doctors and nurses

use super::codes::Profession;
use super::errors::RecordError;
use super::fields::FieldReader;
use super::person::Personal;
use crate::report::Report;
use serde::Serialize;

/// Accepted graduation years
pub const GRADUATION_YEARS: std::ops::RangeInclusive<i64> = 1950..=2030;

/// Accepted work experience, in years
pub const WORK_EXPERIENCE_YEARS: std::ops::RangeInclusive<i64> = 0..=60;

/// Education and career fields, positions 10 to 16 of an employee line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employment {
    pub knows_foreign_language: Option<bool>,
    pub education_document: String,
    graduation_year: Option<i64>,
    pub qualification: String,
    pub specialty: String,
    profession: Option<Profession>,
    work_experience: Option<i64>,
}

impl Employment {
    pub(crate) fn read(fields: &mut FieldReader<'_>) -> Result<Self, RecordError> {
        Ok(Self {
            knows_foreign_language: fields.flag("knows_foreign_language"),
            education_document: fields.text(),
            graduation_year: fields.gated_int("graduation_year", GRADUATION_YEARS)?,
            qualification: fields.text(),
            specialty: fields.text(),
            profession: fields.choice("profession"),
            work_experience: fields.strict_int("work_experience", WORK_EXPERIENCE_YEARS)?,
        })
    }

    pub fn graduation_year(&self) -> Option<i64> {
        self.graduation_year
    }

    pub fn profession(&self) -> Option<Profession> {
        self.profession
    }

    pub fn work_experience(&self) -> Option<i64> {
        self.work_experience
    }

    pub(crate) fn render(&self, report: &mut Report) {
        // an unknown language flag is reported as "нет"
        let language = if self.knows_foreign_language == Some(true) {
            "да"
        } else {
            "нет"
        };
        report
            .line("Знание иностранного языка", Some(language))
            .line("Документ об образовании", Some(&self.education_document))
            .line("Год окончания", self.graduation_year)
            .line("Квалификация", Some(&self.qualification))
            .line("Специализация", Some(&self.specialty))
            .line("Профессия", self.profession)
            .line("Стаж", self.work_experience);
    }
}

/// Capability of records describing hospital staff
pub trait Employed: Personal {
    fn employment(&self) -> &Employment;
}
