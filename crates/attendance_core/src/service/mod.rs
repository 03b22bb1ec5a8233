//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository reads into query and aggregation APIs.
//! - Keep presentation callers decoupled from storage layout.

pub mod attendance_service;
pub mod report_service;
