//! Personal details shared by every record kind

use super::codes::{EducationLevel, Gender};
use super::fields::FieldReader;
use super::ids::RecordId;
use super::record::RecordRules;
use crate::report::{yes_no, Report};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// `DD.MM.YYYY`
pub static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid date pattern"));

/// Series, number and issue date: `NNNN NNNNNN DD.MM.YYYY`
pub static PASSPORT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4} [0-9]{6} [0-9]{2}\.[0-9]{2}\.[0-9]{4}$")
        .expect("valid passport pattern")
});

/// `+D(DDD)DDD-DD-DD`
pub static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+[0-9]\([0-9]{3}\)[0-9]{3}-[0-9]{2}-[0-9]{2}$").expect("valid phone pattern")
});

/// Identity and contact block common to employees and patients
///
/// Occupies the first nine positional fields of every input line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalDetails {
    id: RecordId,
    full_name: String,
    gender: Option<Gender>,
    birthday: Option<String>,
    pub place_of_birth: String,
    pub married: Option<bool>,
    passport: Option<String>,
    pub residence_address: String,
    education_level: Option<EducationLevel>,
    phone_number: Option<String>,
}

impl PersonalDetails {
    pub(crate) fn read(id: RecordId, fields: &mut FieldReader<'_>, rules: &RecordRules) -> Self {
        Self {
            id,
            full_name: fields.truncated_text(rules.full_name_max_chars),
            gender: fields.choice("gender"),
            birthday: fields.pattern("birthday", &DATE_PATTERN),
            place_of_birth: fields.text(),
            married: fields.flag("married"),
            passport: fields.pattern("passport", &PASSPORT_PATTERN),
            residence_address: fields.text(),
            education_level: fields.choice("education_level"),
            phone_number: fields.pattern("phone_number", &PHONE_PATTERN),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn birthday(&self) -> Option<&str> {
        self.birthday.as_deref()
    }

    pub fn passport(&self) -> Option<&str> {
        self.passport.as_deref()
    }

    pub fn education_level(&self) -> Option<EducationLevel> {
        self.education_level
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub(crate) fn render(&self, report: &mut Report) {
        report
            .line("Номер", Some(self.id))
            .line("ФИО", Some(&self.full_name))
            .line("Пол", self.gender)
            .line("Дата рождения", self.birthday.as_deref())
            .line("Место рождения", Some(&self.place_of_birth))
            .line("В браке", yes_no(self.married))
            .line("Паспорт", self.passport.as_deref())
            .line("Адрес регистрации", Some(&self.residence_address))
            .line("Уровень образования", self.education_level)
            .line("Телефон", self.phone_number.as_deref());
    }
}

/// Capability of every record: it describes a person
pub trait Personal {
    /// The personal details block
    fn personal(&self) -> &PersonalDetails;

    fn id(&self) -> RecordId {
        self.personal().id()
    }

    fn full_name(&self) -> &str {
        self.personal().full_name()
    }

    /// Short `"<id>. <full_name>"` form used in listings
    fn summary(&self) -> String {
        format!("{}. {}", self.id(), self.full_name())
    }
}
