//! Ordering algorithms used by attendance queries.
//!
//! # Invariants
//! - `by_date` is stable: records with equal dates keep their input order.
//! - `by_name` is not stable: case-insensitive name ties may reorder.

pub mod by_date;
pub mod by_name;

pub use by_date::sort_records_by_date;
pub use by_name::{compare_ignore_case, sort_students_by_name};
