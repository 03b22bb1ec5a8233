//! Core domain logic for attendance tracking.
//! This crate owns the record store and every derived statistic.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod sort;

pub use config::{AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::attendance::AttendanceRecord;
pub use model::date::{format_date, parse_date, DateParseError, DATE_FORMAT};
pub use model::student::{Student, StudentId};
pub use repo::attendance_repo::{
    AttendanceRepository, InMemoryAttendanceRepository, StoreError, StoreResult,
};
pub use service::attendance_service::AttendanceService;
pub use service::report_service::{build_report, AttendanceStatus, StatusBands, StudentReport};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
