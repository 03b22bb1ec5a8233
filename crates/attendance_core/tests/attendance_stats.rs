use attendance_core::{AttendanceService, InMemoryAttendanceRepository, StoreError, Student};
use chrono::NaiveDate;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, d).unwrap()
}

fn service_with(students: &[(&str, &str)]) -> AttendanceService<InMemoryAttendanceRepository> {
    let mut service = AttendanceService::new(InMemoryAttendanceRepository::new());
    for (id, name) in students {
        service
            .register_student(Student::new(*id, *name, "", ""))
            .unwrap();
    }
    service.register_subject("Math");
    service.register_subject("Art");
    service
}

fn mark_all(
    service: &mut AttendanceService<InMemoryAttendanceRepository>,
    id: &str,
    subject: &str,
    marks: &[bool],
) {
    for (idx, present) in marks.iter().enumerate() {
        service
            .mark_attendance(id, day(idx as u32 + 1), *present, subject)
            .unwrap();
    }
}

#[test]
fn overall_percentage_counts_present_share() {
    let mut service = service_with(&[("S", "Sam")]);
    mark_all(&mut service, "S", "Math", &[true, true, false, true]);

    assert_eq!(service.overall_percentage("S").unwrap(), 75.0);
    assert_eq!(service.record_count("S").unwrap(), 4);
}

#[test]
fn no_records_and_all_absent_both_report_zero() {
    let mut service = service_with(&[("EMPTY", "Empty"), ("ABSENT", "Absent")]);
    mark_all(&mut service, "ABSENT", "Math", &[false, false]);

    assert_eq!(service.overall_percentage("EMPTY").unwrap(), 0.0);
    assert_eq!(service.overall_percentage("ABSENT").unwrap(), 0.0);
    assert_eq!(service.record_count("EMPTY").unwrap(), 0);
    assert_eq!(service.record_count("ABSENT").unwrap(), 2);
}

#[test]
fn student_scoped_stats_reject_unknown_ids() {
    let service = service_with(&[]);
    let expected = StoreError::UnknownStudent("ghost".to_string());
    assert_eq!(service.overall_percentage("ghost").unwrap_err(), expected);
    assert_eq!(service.record_count("ghost").unwrap_err(), expected);
    assert_eq!(service.subject_percentages("ghost").unwrap_err(), expected);
}

#[test]
fn subject_percentages_omit_subjects_without_records() {
    let mut service = service_with(&[("S", "Sam")]);
    service.register_subject("History");
    mark_all(&mut service, "S", "Math", &[true, false, true, true]);
    mark_all(&mut service, "S", "Art", &[false, false, true]);

    let per_subject = service.subject_percentages("S").unwrap();
    assert_eq!(per_subject.len(), 2);
    assert_eq!(per_subject["Math"], 75.0);
    assert!((per_subject["Art"] - 100.0 / 3.0).abs() < 1e-9);
    assert!(!per_subject.contains_key("History"));
}

#[test]
fn subject_percentages_are_empty_without_records() {
    let service = service_with(&[("S", "Sam")]);
    assert!(service.subject_percentages("S").unwrap().is_empty());
}

#[test]
fn low_attendance_excludes_zero_and_threshold_edge() {
    let mut service = service_with(&[("A", "Ann"), ("B", "Ben"), ("C", "Cal"), ("D", "Dee")]);
    mark_all(&mut service, "A", "Math", &[true, false]);
    mark_all(&mut service, "C", "Math", &[true, true, true, true, false]);
    mark_all(&mut service, "D", "Math", &[true, true, true, false]);

    let flagged: Vec<String> = service
        .low_attendance_students(75.0)
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(flagged, vec!["A"]);
}

#[test]
fn low_attendance_never_flags_students_without_records() {
    let mut service = service_with(&[("A", "Ann"), ("B", "Ben")]);
    mark_all(&mut service, "A", "Math", &[true, false]);

    for threshold in [0.0, 50.0, 100.0, 1000.0] {
        let flagged = service.low_attendance_students(threshold);
        assert!(flagged.iter().all(|s| s.id != "B"));
    }
    assert_eq!(service.low_attendance_students(100.0).len(), 1);
}
