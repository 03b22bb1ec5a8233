//! Attendance domain model.
//!
//! # Responsibility
//! - Define the student identity record and the attendance fact record.
//! - Own the `dd-MM-yyyy` date text format shared by core callers.
//!
//! # Invariants
//! - Every student is identified by a caller-assigned, unique `id`.
//! - Attendance records are immutable facts; correction means appending.

pub mod attendance;
pub mod date;
pub mod student;
