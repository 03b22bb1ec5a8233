//! Attendance use-case service.
//!
//! # Responsibility
//! - Provide registration, marking, query and aggregation entry points.
//! - Apply the ordering rules of each query on top of repository reads.
//!
//! # Invariants
//! - Student and subject queries return dates ascending with stable ties.
//! - Date queries return append order.
//! - `overall_percentage` returns `0.0` both for "no records" and for a
//!   genuine 0%; use `record_count` to tell the two apart.

use crate::model::attendance::AttendanceRecord;
use crate::model::student::Student;
use crate::repo::attendance_repo::{AttendanceRepository, StoreError, StoreResult};
use crate::sort::{sort_records_by_date, sort_students_by_name};
use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeMap;

/// Use-case service wrapper over an attendance repository.
pub struct AttendanceService<R: AttendanceRepository> {
    repo: R,
}

impl<R: AttendanceRepository> AttendanceService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read-only access to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Registers a student; fails with `DuplicateId` on a reused id.
    pub fn register_student(&mut self, student: Student) -> StoreResult<()> {
        self.repo.register_student(student)
    }

    /// Registers a subject. Re-registering an existing name is a no-op.
    pub fn register_subject(&mut self, name: &str) {
        self.repo.register_subject(name);
    }

    pub fn get_student(&self, id: &str) -> Option<&Student> {
        self.repo.get_student(id)
    }

    /// Students in registration order.
    pub fn list_students(&self) -> Vec<Student> {
        self.repo.students().to_vec()
    }

    /// Subjects in first-insertion order, suitable for numbered selection.
    pub fn list_subjects(&self) -> Vec<String> {
        self.repo.subjects().to_vec()
    }

    /// Appends one attendance mark.
    ///
    /// # Errors
    /// - `UnknownStudent` when `student_id` is not registered.
    /// - `UnknownSubject` when `subject` is not registered.
    pub fn mark_attendance(
        &mut self,
        student_id: &str,
        date: NaiveDate,
        present: bool,
        subject: &str,
    ) -> StoreResult<()> {
        self.repo
            .append_record(AttendanceRecord::new(student_id, date, subject, present))
    }

    /// All records of one student, dates ascending, ties in append order.
    pub fn attendance_by_student(&self, student_id: &str) -> StoreResult<Vec<AttendanceRecord>> {
        self.ensure_student(student_id)?;
        let mut records = self.filter_records(|record| record.student_id() == student_id);
        sort_records_by_date(&mut records);
        debug!(
            "event=query module=service kind=by_student id={} rows={}",
            student_id,
            records.len()
        );
        Ok(records)
    }

    /// All records on `date`, in append order.
    pub fn attendance_by_date(&self, date: NaiveDate) -> Vec<AttendanceRecord> {
        let records = self.filter_records(|record| record.date() == date);
        debug!(
            "event=query module=service kind=by_date date={} rows={}",
            date,
            records.len()
        );
        records
    }

    /// All records for `subject`, dates ascending, ties in append order.
    ///
    /// An unregistered subject simply has no records.
    pub fn attendance_by_subject(&self, subject: &str) -> Vec<AttendanceRecord> {
        let mut records = self.filter_records(|record| record.subject() == subject);
        sort_records_by_date(&mut records);
        debug!(
            "event=query module=service kind=by_subject subject={} rows={}",
            subject,
            records.len()
        );
        records
    }

    /// Number of records held for one student.
    pub fn record_count(&self, student_id: &str) -> StoreResult<usize> {
        self.ensure_student(student_id)?;
        Ok(self
            .repo
            .records()
            .iter()
            .filter(|record| record.student_id() == student_id)
            .count())
    }

    /// Present share of all records for one student, as a percentage.
    ///
    /// Returns `0.0` when the student has no records.
    pub fn overall_percentage(&self, student_id: &str) -> StoreResult<f64> {
        let records = self.attendance_by_student(student_id)?;
        if records.is_empty() {
            return Ok(0.0);
        }
        let present = records.iter().filter(|record| record.is_present()).count();
        Ok(percentage(present, records.len()))
    }

    /// Present share per subject for one student.
    ///
    /// Subjects without any record for the student are omitted.
    pub fn subject_percentages(&self, student_id: &str) -> StoreResult<BTreeMap<String, f64>> {
        self.ensure_student(student_id)?;

        // subject -> (present, total)
        let mut tallies: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for record in self
            .repo
            .records()
            .iter()
            .filter(|record| record.student_id() == student_id)
        {
            let tally = tallies.entry(record.subject()).or_insert((0, 0));
            if record.is_present() {
                tally.0 += 1;
            }
            tally.1 += 1;
        }

        Ok(tallies
            .into_iter()
            .map(|(subject, (present, total))| (subject.to_string(), percentage(present, total)))
            .collect())
    }

    /// Every student ordered by case-insensitive name.
    pub fn students_sorted_by_name(&self) -> Vec<Student> {
        let mut students = self.list_students();
        sort_students_by_name(&mut students);
        students
    }

    /// Students whose overall percentage is in `(0, threshold)`.
    ///
    /// Students without records report `0.0` and are never included.
    /// Result keeps registration order.
    pub fn low_attendance_students(&self, threshold: f64) -> Vec<Student> {
        let flagged: Vec<Student> = self
            .repo
            .students()
            .iter()
            .filter(|student| {
                self.overall_percentage(&student.id)
                    .map(|pct| pct < threshold && pct > 0.0)
                    .unwrap_or(false)
            })
            .cloned()
            .collect();
        debug!(
            "event=query module=service kind=low_attendance threshold={} rows={}",
            threshold,
            flagged.len()
        );
        flagged
    }

    fn ensure_student(&self, student_id: &str) -> StoreResult<()> {
        if self.repo.contains_student(student_id) {
            Ok(())
        } else {
            Err(StoreError::UnknownStudent(student_id.to_string()))
        }
    }

    fn filter_records(
        &self,
        predicate: impl Fn(&AttendanceRecord) -> bool,
    ) -> Vec<AttendanceRecord> {
        self.repo
            .records()
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }
}

fn percentage(present: usize, total: usize) -> f64 {
    (present as f64 * 100.0) / total as f64
}
