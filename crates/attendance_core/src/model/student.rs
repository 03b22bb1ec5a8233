//! Student domain model.
//!
//! # Invariants
//! - `id` is stable and unique within one store.
//! - A stored student is never mutated by the core.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Caller-assigned student identifier (for example `S001`).
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type StudentId = String;

/// Identity record for one registered student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identity key; assigned by the caller, never generated.
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub department: String,
}

impl Student {
    /// Creates a student from free-text fields.
    ///
    /// No field is validated here; uniqueness of `id` is enforced by the
    /// store at registration time.
    pub fn new(
        id: impl Into<StudentId>,
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            department: department.into(),
        }
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Email: {} | Dept: {}",
            self.id, self.name, self.email, self.department
        )
    }
}
