//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the storage contract for students, subjects and records.
//! - Keep collection layout details away from service orchestration.
//!
//! # Invariants
//! - Write paths validate every reference before mutating any collection.
//! - Repository APIs return semantic errors (`DuplicateId`,
//!   `UnknownStudent`, `UnknownSubject`) instead of panicking.

pub mod attendance_repo;
