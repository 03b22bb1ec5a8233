//! Attendance repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the student arena, the ordered subject set and the record log.
//! - Enforce id uniqueness and reference checks on writes.
//!
//! # Invariants
//! - Student ids are unique; registration never replaces a student.
//! - Subjects keep first-insertion order and are deduplicated by exact value.
//! - The record log is append-only; no update or delete path exists.

use crate::model::attendance::AttendanceRecord;
use crate::model::student::Student;
use log::{debug, info, warn};
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Validation errors raised by store writes and student-scoped queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A student with this id is already registered.
    DuplicateId(String),
    /// The referenced student id is not registered.
    UnknownStudent(String),
    /// The referenced subject is not registered.
    UnknownSubject(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "student already exists: {id}"),
            Self::UnknownStudent(id) => write!(f, "student not found: {id}"),
            Self::UnknownSubject(name) => write!(f, "subject not found: {name}"),
        }
    }
}

impl Error for StoreError {}

/// Repository interface for attendance data.
pub trait AttendanceRepository {
    /// Inserts a new student; fails on a duplicate id.
    fn register_student(&mut self, student: Student) -> StoreResult<()>;
    fn get_student(&self, id: &str) -> Option<&Student>;
    fn contains_student(&self, id: &str) -> bool;
    /// All students in registration order.
    fn students(&self) -> &[Student];
    /// Adds a subject if absent. Returns whether it was newly inserted.
    fn register_subject(&mut self, name: &str) -> bool;
    fn contains_subject(&self, name: &str) -> bool;
    /// All subjects in first-insertion order.
    fn subjects(&self) -> &[String];
    /// Appends one record after checking both references.
    fn append_record(&mut self, record: AttendanceRecord) -> StoreResult<()>;
    /// Full record log in append order.
    fn records(&self) -> &[AttendanceRecord];
}

/// Process-memory attendance store.
#[derive(Debug, Default)]
pub struct InMemoryAttendanceRepository {
    students: Vec<Student>,
    student_index: HashMap<String, usize>,
    subjects: Vec<String>,
    subject_set: HashSet<String>,
    records: Vec<AttendanceRecord>,
}

impl InMemoryAttendanceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AttendanceRepository for InMemoryAttendanceRepository {
    fn register_student(&mut self, student: Student) -> StoreResult<()> {
        if self.student_index.contains_key(student.id.as_str()) {
            warn!(
                "event=student_register module=repo status=rejected reason=duplicate_id id={}",
                student.id
            );
            return Err(StoreError::DuplicateId(student.id));
        }

        info!(
            "event=student_register module=repo status=ok id={} total={}",
            student.id,
            self.students.len() + 1
        );
        self.student_index
            .insert(student.id.clone(), self.students.len());
        self.students.push(student);
        Ok(())
    }

    fn get_student(&self, id: &str) -> Option<&Student> {
        self.student_index
            .get(id)
            .and_then(|&slot| self.students.get(slot))
    }

    fn contains_student(&self, id: &str) -> bool {
        self.student_index.contains_key(id)
    }

    fn students(&self) -> &[Student] {
        &self.students
    }

    fn register_subject(&mut self, name: &str) -> bool {
        if self.subject_set.contains(name) {
            debug!("event=subject_register module=repo status=noop subject={name}");
            return false;
        }

        self.subject_set.insert(name.to_string());
        self.subjects.push(name.to_string());
        info!(
            "event=subject_register module=repo status=ok subject={} total={}",
            name,
            self.subjects.len()
        );
        true
    }

    fn contains_subject(&self, name: &str) -> bool {
        self.subject_set.contains(name)
    }

    fn subjects(&self) -> &[String] {
        &self.subjects
    }

    fn append_record(&mut self, record: AttendanceRecord) -> StoreResult<()> {
        if !self.contains_student(record.student_id()) {
            warn!(
                "event=attendance_mark module=repo status=rejected reason=unknown_student id={}",
                record.student_id()
            );
            return Err(StoreError::UnknownStudent(record.student_id().to_string()));
        }
        if !self.contains_subject(record.subject()) {
            warn!(
                "event=attendance_mark module=repo status=rejected reason=unknown_subject subject={}",
                record.subject()
            );
            return Err(StoreError::UnknownSubject(record.subject().to_string()));
        }

        debug!(
            "event=attendance_mark module=repo status=ok id={} date={} subject={} present={}",
            record.student_id(),
            record.date(),
            record.subject(),
            record.is_present()
        );
        self.records.push(record);
        Ok(())
    }

    fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }
}
