//! Report command implementation
//!
//! Loads every configured source and prints each record's report.

use super::{load_records, SourceArgs};
use crate::domain::Record;
use crate::loader::LoaderContext;
use crate::report::to_json;
use clap::{Args, ValueEnum};

/// Output format of the report command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Labelled multi-line text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Arguments for the report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ReportArgs {
    /// Execute the report command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let context = match load_records(config_path, &self.sources) {
            Ok(context) => context,
            Err(code) => return Ok(code),
        };

        match self.format {
            OutputFormat::Json => println!("{}", to_json(&context)?),
            OutputFormat::Text => print!("{}", render_text(&context)),
        }
        Ok(0)
    }
}

/// Renders every record, grouped by kind under a heading
pub fn render_text(context: &LoaderContext) -> String {
    let mut out = String::new();
    render_section(&mut out, context.doctors());
    render_section(&mut out, context.nurses());
    render_section(&mut out, context.ambulatory_patients());
    render_section(&mut out, context.hospital_patients());
    out
}

fn render_section<R: Record>(out: &mut String, records: &[R]) {
    if records.is_empty() {
        return;
    }
    out.push_str(&format!("=== {} ({}) ===\n", R::KIND.title(), records.len()));
    for record in records {
        out.push_str(&record.render());
        out.push('\n');
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HospitalPatient;

    const HOSPITAL_LINE: &str = "Сидорова Анна Сергеевна;жен.;23.11.1975;Самара;True;\
        3601 112233 10.10.2000;пр. Победы, 10;ср.спец;+7(846)222-33-44;\
        9876543210987654;служащий;Школа №5;3;-;пенициллин;Терапевтическое;12;Пневмония;";

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&LoaderContext::new()), "");
    }

    #[test]
    fn test_render_text_heading_and_records() {
        let mut context = LoaderContext::new();
        context
            .load_str::<HospitalPatient>(&format!("{HOSPITAL_LINE}\n{HOSPITAL_LINE}"), "h")
            .unwrap();
        let text = render_text(&context);
        assert!(text.starts_with("=== Hospital patients (2) ===\n\nНомер: 1\n"));
        assert!(text.contains("\nНомер: 2\n"));
        assert!(!text.contains("Doctors"));
    }
}
