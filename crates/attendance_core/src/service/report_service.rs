//! Attendance status bands and the per-student summary report.
//!
//! # Responsibility
//! - Classify a percentage into good/warning/critical bands.
//! - Assemble one summary row per student for presentation callers.
//!
//! # Invariants
//! - Bands only read service values; they never feed back into the store.
//! - A student with no records has no status.

use crate::model::student::Student;
use crate::repo::attendance_repo::{AttendanceRepository, StoreResult};
use crate::service::attendance_service::AttendanceService;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attendance health band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Good,
    Warning,
    Critical,
}

impl AttendanceStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "GOOD ATTENDANCE",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }

    /// One-char marker for compact tables.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Good => "✓",
            Self::Warning => "⚠",
            Self::Critical => "✗",
        }
    }
}

/// Lower bounds (inclusive) of the good and warning bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusBands {
    pub good_min: f64,
    pub warning_min: f64,
}

impl Default for StatusBands {
    fn default() -> Self {
        Self {
            good_min: 75.0,
            warning_min: 65.0,
        }
    }
}

impl StatusBands {
    pub fn classify(&self, percentage: f64) -> AttendanceStatus {
        if percentage >= self.good_min {
            AttendanceStatus::Good
        } else if percentage >= self.warning_min {
            AttendanceStatus::Warning
        } else {
            AttendanceStatus::Critical
        }
    }
}

/// Summary row for one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentReport {
    pub student: Student,
    pub record_count: usize,
    pub overall_percentage: f64,
    pub subject_percentages: BTreeMap<String, f64>,
    /// `None` when the student has no records.
    pub status: Option<AttendanceStatus>,
}

/// Builds the complete report, ordered by case-insensitive student name.
pub fn build_report<R: AttendanceRepository>(
    service: &AttendanceService<R>,
    bands: &StatusBands,
) -> StoreResult<Vec<StudentReport>> {
    service
        .students_sorted_by_name()
        .into_iter()
        .map(|student| {
            let record_count = service.record_count(&student.id)?;
            let overall_percentage = service.overall_percentage(&student.id)?;
            let subject_percentages = service.subject_percentages(&student.id)?;
            let status = (record_count > 0).then(|| bands.classify(overall_percentage));
            Ok(StudentReport {
                student,
                record_count,
                overall_percentage,
                subject_percentages,
                status,
            })
        })
        .collect()
}
