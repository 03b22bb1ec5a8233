//! Attendance record model.
//!
//! # Responsibility
//! - Define the single (student, date, subject, presence) fact.
//!
//! # Invariants
//! - A record has no mutation API; fields are read through accessors.
//! - `student_id` and `subject` referenced a registered student/subject at
//!   the time the record was appended.

use crate::model::date::format_date;
use crate::model::student::StudentId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One attendance mark for a student in a subject on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    student_id: StudentId,
    date: NaiveDate,
    subject: String,
    present: bool,
}

impl AttendanceRecord {
    pub fn new(
        student_id: impl Into<StudentId>,
        date: NaiveDate,
        subject: impl Into<String>,
        present: bool,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            date,
            subject: subject.into(),
            present,
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Human-readable presence label.
    pub fn status_label(&self) -> &'static str {
        if self.present {
            "Present"
        } else {
            "Absent"
        }
    }
}

impl Display for AttendanceRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Student: {:<10} | Date: {} | Subject: {:<15} | Status: {}",
            self.student_id,
            format_date(self.date),
            self.subject,
            self.status_label()
        )
    }
}
