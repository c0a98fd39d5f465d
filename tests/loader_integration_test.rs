//! Integration tests for loading record files

use medroster::config::SourcesConfig;
use medroster::domain::{
    DoctorCategory, Employed, HealthGroup, MedrosterError, Patient, Personal, Profession,
    Record, RecordError, RecordId, RecordKind,
};
use medroster::loader::LoaderContext;
use std::io::Write;
use tempfile::NamedTempFile;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn all_sources() -> SourcesConfig {
    SourcesConfig {
        doctors: Some(fixture("doctors.txt")),
        nurses: Some(fixture("nurses.txt")),
        ambulatory_patients: Some(fixture("ambulatory_patients.txt")),
        hospital_patients: Some(fixture("hospital_patients.txt")),
    }
}

#[test]
fn test_load_all_fixture_files() {
    let mut context = LoaderContext::new();
    let loaded = context.load_sources(&all_sources()).unwrap();

    assert_eq!(loaded, 6);
    assert_eq!(context.len(), 6);
    assert_eq!(context.count(RecordKind::Doctor), 2);
    assert_eq!(context.count(RecordKind::Nurse), 1);
    assert_eq!(context.count(RecordKind::AmbulatoryPatient), 2);
    assert_eq!(context.count(RecordKind::HospitalPatient), 1);
    assert_eq!(context.next_id(), RecordId::new(7));
}

#[test]
fn test_ids_follow_load_order() {
    let mut context = LoaderContext::new();
    context.load_sources(&all_sources()).unwrap();

    let ids: Vec<u64> = context
        .doctors()
        .iter()
        .map(|d| d.id().get())
        .chain(context.nurses().iter().map(|n| n.id().get()))
        .chain(context.ambulatory_patients().iter().map(|p| p.id().get()))
        .chain(context.hospital_patients().iter().map(|p| p.id().get()))
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

    assert_eq!(context.hospital_roster(), ["6. Сидорова Анна Сергеевна"]);
}

#[test]
fn test_load_order_decides_ids() {
    let mut context = LoaderContext::new();
    context.load_hospital_patients(fixture("hospital_patients.txt")).unwrap();
    context.load_doctors(fixture("doctors.txt")).unwrap();

    assert_eq!(context.hospital_patients()[0].id(), RecordId::new(1));
    assert_eq!(context.doctors()[0].id(), RecordId::new(2));
    assert_eq!(context.doctors()[1].id(), RecordId::new(3));
}

#[test]
fn test_valid_doctor_keeps_every_field() {
    let mut context = LoaderContext::new();
    context.load_doctors(fixture("doctors.txt")).unwrap();

    let doctor = &context.doctors()[0];
    assert!(doctor.rejected_fields().is_empty());
    assert_eq!(doctor.full_name(), "Иванов Иван Иванович");
    assert_eq!(doctor.employment().graduation_year(), Some(2003));
    assert_eq!(doctor.employment().profession(), Some(Profession::Doctor));
    assert_eq!(doctor.employment().work_experience(), Some(20));
    assert_eq!(doctor.practice.category(), Some(DoctorCategory::Highest));
}

#[test]
fn test_invalid_doctor_fields_become_absent() {
    let mut context = LoaderContext::new();
    context.load_doctors(fixture("doctors.txt")).unwrap();

    let doctor = &context.doctors()[1];
    assert_eq!(doctor.personal().phone_number(), None);
    assert_eq!(doctor.employment().graduation_year(), None);
    assert_eq!(doctor.practice.academic_degree, None);
    assert_eq!(doctor.practice.category(), None);

    let names: Vec<&str> = doctor.rejected_fields().iter().map(|f| f.field).collect();
    assert_eq!(
        names,
        vec!["phone_number", "graduation_year", "academic_degree", "category"]
    );
}

#[test]
fn test_out_of_range_patient_fields_become_absent() {
    let mut context = LoaderContext::new();
    context
        .load_ambulatory_patients(fixture("ambulatory_patients.txt"))
        .unwrap();

    let first = &context.ambulatory_patients()[0];
    assert_eq!(first.ambulatory.territorial_number(), Some(7));
    assert_eq!(first.ambulatory.disability_group(), Some(0));
    assert_eq!(first.ambulatory.health_group(), Some(HealthGroup::II));

    let second = &context.ambulatory_patients()[1];
    assert_eq!(second.ambulatory.territorial_number(), None);
    assert_eq!(second.ambulatory.disability_group(), Some(2));
    assert_eq!(second.ambulatory.health_group(), None);
    assert_eq!(second.medical_card().blood_group().as_deref(), Some("4(-)"));
}

#[test]
fn test_bad_line_reports_file_and_line_number() {
    let mut file = NamedTempFile::new().unwrap();
    let line = std::fs::read_to_string(fixture("hospital_patients.txt")).unwrap();
    write!(file, "{}\n{}", line.trim_end(), "Сидорова Анна Сергеевна;жен.;\n").unwrap();

    let mut context = LoaderContext::new();
    let err = context.load_hospital_patients(file.path()).unwrap_err();

    match err {
        MedrosterError::Record { line, source, .. } => {
            assert_eq!(line, 2);
            assert_eq!(
                source,
                RecordError::FieldCount {
                    kind: RecordKind::HospitalPatient,
                    expected: 18,
                    found: 2,
                }
            );
        }
        other => panic!("expected a record error, got {other:?}"),
    }
    // the good line before the failure is kept
    assert_eq!(context.count(RecordKind::HospitalPatient), 1);
    assert_eq!(context.next_id(), RecordId::new(2));
}

#[test]
fn test_non_numeric_work_experience_rejects_line() {
    let doctors = std::fs::read_to_string(fixture("doctors.txt")).unwrap();
    let first = doctors.lines().next().unwrap();
    let broken = first.replacen(";врач;20;", ";врач;двадцать;", 1);

    let mut context = LoaderContext::new();
    let err = context.load_str::<medroster::domain::Doctor>(&broken, "inline").unwrap_err();

    assert!(err.to_string().contains("work_experience"));
    assert!(context.is_empty());
    assert_eq!(context.next_id(), RecordId::new(1));
}

#[test]
fn test_missing_source_file_is_io_error() {
    let mut context = LoaderContext::new();
    let err = context
        .load_nurses(fixture("no_such_file.txt"))
        .unwrap_err();
    assert!(matches!(err, MedrosterError::Io(_)));
}
