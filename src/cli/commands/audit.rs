//! Audit command implementation
//!
//! Lists the fields that failed validation and were stored as absent.

use super::{load_records, SourceArgs};
use crate::domain::Record;
use crate::loader::LoaderContext;
use clap::Args;

/// Arguments for the audit command
#[derive(Args, Debug)]
pub struct AuditArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Exit with code 3 when any field was rejected
    #[arg(long)]
    pub strict: bool,
}

impl AuditArgs {
    /// Execute the audit command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let context = match load_records(config_path, &self.sources) {
            Ok(context) => context,
            Err(code) => return Ok(code),
        };

        let audit = audit(&context);
        print!("{}", audit.text);
        println!(
            "{} of {} records have rejected fields ({} fields in total)",
            audit.records_with_issues,
            context.len(),
            audit.rejected_fields
        );

        if self.strict && audit.rejected_fields > 0 {
            return Ok(3); // Input data error exit code
        }
        Ok(0)
    }
}

/// Result of auditing a context
#[derive(Debug, Default)]
pub struct Audit {
    pub text: String,
    pub records_with_issues: usize,
    pub rejected_fields: usize,
}

/// Collects the rejected fields of every record held by `context`
pub fn audit(context: &LoaderContext) -> Audit {
    let mut audit = Audit::default();
    audit_records(&mut audit, context.doctors());
    audit_records(&mut audit, context.nurses());
    audit_records(&mut audit, context.ambulatory_patients());
    audit_records(&mut audit, context.hospital_patients());
    audit
}

fn audit_records<R: Record>(audit: &mut Audit, records: &[R]) {
    for record in records {
        let rejected = record.rejected_fields();
        if rejected.is_empty() {
            continue;
        }
        audit.records_with_issues += 1;
        audit.rejected_fields += rejected.len();
        audit
            .text
            .push_str(&format!("{} ({})\n", record.summary(), R::KIND));
        for field in rejected {
            audit
                .text
                .push_str(&format!("  - {}: {:?}\n", field.field, field.raw));
        }
    }
}
