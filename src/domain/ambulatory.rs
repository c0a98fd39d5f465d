//! Ambulatory (outpatient) patient records

use super::codes::HealthGroup;
use super::errors::RecordError;
use super::fields::{FieldReader, RejectedField};
use super::ids::RecordId;
use super::patient::{MedicalCard, Patient};
use super::person::{Personal, PersonalDetails};
use super::record::{Record, RecordKind, RecordRules};
use crate::report::{detected, Report};
use serde::Serialize;
use std::fmt;

/// Accepted territorial (catchment area) numbers
pub const TERRITORIAL_NUMBERS: std::ops::RangeInclusive<i64> = 1..=20;

/// Accepted disability groups; 0 means no disability
pub const DISABILITY_GROUPS: std::ops::RangeInclusive<i64> = 0..=3;

/// Outpatient follow-up fields, positions 16 to 19
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmbulatoryCard {
    territorial_number: Option<i64>,
    disability_group: Option<i64>,
    health_group: Option<HealthGroup>,
    pub chronic_diagnosis: String,
}

impl AmbulatoryCard {
    fn read(fields: &mut FieldReader<'_>) -> Result<Self, RecordError> {
        Ok(Self {
            territorial_number: fields.int("territorial_number", Some(TERRITORIAL_NUMBERS)),
            disability_group: fields.gated_int("disability_group", DISABILITY_GROUPS)?,
            health_group: fields.choice("health_group"),
            chronic_diagnosis: fields.text(),
        })
    }

    pub fn territorial_number(&self) -> Option<i64> {
        self.territorial_number
    }

    pub fn disability_group(&self) -> Option<i64> {
        self.disability_group
    }

    pub fn health_group(&self) -> Option<HealthGroup> {
        self.health_group
    }

    fn render(&self, report: &mut Report) {
        report
            .line("Участок", self.territorial_number)
            .line(
                "Группа инвалидности",
                self.disability_group.filter(|group| *group != 0),
            )
            .line("Группа здоровья", self.health_group)
            .line("Хронический диагноз", detected(&self.chronic_diagnosis));
    }
}

/// A patient treated on an outpatient basis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmbulatoryPatient {
    pub person: PersonalDetails,
    pub card: MedicalCard,
    pub ambulatory: AmbulatoryCard,
    #[serde(rename = "rejected_fields")]
    rejected: Vec<RejectedField>,
}

impl Personal for AmbulatoryPatient {
    fn personal(&self) -> &PersonalDetails {
        &self.person
    }
}

impl Patient for AmbulatoryPatient {
    fn medical_card(&self) -> &MedicalCard {
        &self.card
    }
}

impl Record for AmbulatoryPatient {
    const KIND: RecordKind = RecordKind::AmbulatoryPatient;

    fn from_fields(
        id: RecordId,
        fields: &[&str],
        rules: &RecordRules,
    ) -> Result<Self, RecordError> {
        let mut reader = FieldReader::new(Self::KIND, fields)?;
        let person = PersonalDetails::read(id, &mut reader, rules);
        let card = MedicalCard::read(&mut reader)?;
        let ambulatory = AmbulatoryCard::read(&mut reader)?;
        Ok(Self {
            person,
            card,
            ambulatory,
            rejected: reader.finish(),
        })
    }

    fn render(&self) -> String {
        let mut report = Report::new();
        self.person.render(&mut report);
        self.card.render(&mut report);
        self.ambulatory.render(&mut report);
        report.finish()
    }

    fn rejected_fields(&self) -> &[RejectedField] {
        &self.rejected
    }
}

impl fmt::Display for AmbulatoryPatient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
