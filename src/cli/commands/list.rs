//! List command implementation
//!
//! Prints `"<id>. <full_name>"` per record, grouped by kind, then the
//! hospital roster.

use super::{load_records, SourceArgs};
use crate::domain::Record;
use crate::loader::LoaderContext;
use clap::Args;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub sources: SourceArgs,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let context = match load_records(config_path, &self.sources) {
            Ok(context) => context,
            Err(code) => return Ok(code),
        };

        print!("{}", listing(&context));
        Ok(0)
    }
}

/// Summaries followed by the hospital roster
pub fn listing(context: &LoaderContext) -> String {
    let mut out = summaries(context);
    out.push_str(&roster(context));
    out
}

/// The hospital roster under its own heading
pub fn roster(context: &LoaderContext) -> String {
    let mut out = String::from("Hospital roster:\n");
    for entry in context.hospital_roster() {
        out.push_str("  ");
        out.push_str(entry);
        out.push('\n');
    }
    out
}

/// One heading per non-empty kind followed by record summaries
pub fn summaries(context: &LoaderContext) -> String {
    let mut out = String::new();
    section(&mut out, context.doctors());
    section(&mut out, context.nurses());
    section(&mut out, context.ambulatory_patients());
    section(&mut out, context.hospital_patients());
    out
}

fn section<R: Record>(out: &mut String, records: &[R]) {
    if records.is_empty() {
        return;
    }
    out.push_str(R::KIND.title());
    out.push_str(":\n");
    for record in records {
        out.push_str("  ");
        out.push_str(&record.summary());
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AmbulatoryPatient, HospitalPatient};

    const HOSPITAL_LINE: &str = "Сидорова Анна Сергеевна;жен.;23.11.1975;Самара;True;\
        3601 112233 10.10.2000;пр. Победы, 10;ср.спец;+7(846)222-33-44;\
        9876543210987654;служащий;Школа №5;3;-;пенициллин;Терапевтическое;12;Пневмония;";

    #[test]
    fn test_summaries() {
        let line = "Петров Петр Петрович;муж.;01.01.1990;Казань;False;\
            9204 654321 15.03.2010;ул. Мира, 5;среднее;+7(843)111-22-33;\
            1234567890123456;рабочий;Завод;2;+;Не выявлено;7;0;II;Не выявлено;";
        let mut context = LoaderContext::new();
        context
            .load_str::<AmbulatoryPatient>(&format!("{line}\n{line}"), "a")
            .unwrap();
        assert_eq!(
            summaries(&context),
            "Ambulatory patients:\n  1. Петров Петр Петрович\n  2. Петров Петр Петрович\n"
        );
    }

    #[test]
    fn test_listing_puts_roster_after_summaries() {
        let mut context = LoaderContext::new();
        context
            .load_str::<HospitalPatient>(&format!("{HOSPITAL_LINE}\n{HOSPITAL_LINE}"), "h")
            .unwrap();

        assert_eq!(
            listing(&context),
            "Hospital patients:\n  1. Сидорова Анна Сергеевна\n  2. Сидорова Анна Сергеевна\n\
             Hospital roster:\n  1. Сидорова Анна Сергеевна\n  2. Сидорова Анна Сергеевна\n"
        );
    }

    #[test]
    fn test_roster_heading_without_hospital_patients() {
        let context = LoaderContext::new();
        assert_eq!(listing(&context), "Hospital roster:\n");
    }
}
