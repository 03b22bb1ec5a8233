//! Sample data for demos.

use attendance_core::{AttendanceRepository, AttendanceService, StoreResult, Student};
use chrono::{Duration, NaiveDate};
use rand::Rng;

const SAMPLE_DAYS: i64 = 10;
const PRESENT_PROBABILITY: f64 = 0.75;

const STUDENTS: [(&str, &str, &str, &str); 5] = [
    ("S001", "Alice Johnson", "alice@example.com", "Computer Science"),
    ("S002", "Bob Smith", "bob@example.com", "Electronics"),
    ("S003", "Charlie Brown", "charlie@example.com", "Computer Science"),
    ("S004", "Diana Prince", "diana@example.com", "Mechanical"),
    ("S005", "Eve Williams", "eve@example.com", "Computer Science"),
];

const SUBJECTS: [&str; 5] = [
    "Data Structures",
    "Algorithms",
    "Database Systems",
    "Operating Systems",
    "Computer Networks",
];

/// Registers the sample roster and marks the last `SAMPLE_DAYS` days.
///
/// Only the first four subjects get marks; the last one stays empty.
pub fn load_sample_data<R: AttendanceRepository>(
    service: &mut AttendanceService<R>,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> StoreResult<()> {
    for (id, name, email, department) in STUDENTS {
        service.register_student(Student::new(id, name, email, department))?;
    }
    for subject in SUBJECTS {
        service.register_subject(subject);
    }

    for offset in 0..SAMPLE_DAYS {
        let date = today - Duration::days(offset);
        for (id, ..) in STUDENTS {
            for subject in &SUBJECTS[..4] {
                let present = rng.gen_bool(PRESENT_PROBABILITY);
                service.mark_attendance(id, date, present, subject)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::load_sample_data;
    use attendance_core::{AttendanceService, InMemoryAttendanceRepository, StoreError};
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sample_data_fills_roster_and_marks() {
        let mut service = AttendanceService::new(InMemoryAttendanceRepository::new());
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        load_sample_data(&mut service, today, &mut StdRng::seed_from_u64(7)).unwrap();

        assert_eq!(service.list_students().len(), 5);
        assert_eq!(service.list_subjects().len(), 5);
        assert_eq!(service.attendance_by_student("S001").unwrap().len(), 40);
        assert!(service.attendance_by_subject("Computer Networks").is_empty());
        assert_eq!(service.attendance_by_date(today).len(), 20);
    }

    #[test]
    fn loading_twice_reports_duplicate_ids() {
        let mut service = AttendanceService::new(InMemoryAttendanceRepository::new());
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        load_sample_data(&mut service, today, &mut rng).unwrap();

        let err = load_sample_data(&mut service, today, &mut rng).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("S001".to_string()));
    }
}
