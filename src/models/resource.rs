//! Teaching resources.
//!
//! Professors and classrooms are the two resources a lesson occupies.
//! Each can hold at most one lesson per weekly grid cell. Both are
//! append-only: once registered they are never edited or removed.

use serde::{Deserialize, Serialize};

/// A professor who teaches lessons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    /// Professor identifier.
    pub id: u32,
    /// Display name (e.g., "Dr. Smith").
    pub name: String,
    /// Owning department.
    pub department: String,
}

/// A classroom lessons are held in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    /// Room number, used as the identity (e.g., "101").
    pub number: String,
    /// Seat count.
    pub capacity: u32,
    /// Whether a projector is installed.
    #[serde(default)]
    pub has_projector: bool,
}

impl Professor {
    /// Creates a professor with an empty department.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            department: String::new(),
        }
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }
}

impl Classroom {
    /// Creates a classroom without a projector.
    pub fn new(number: impl Into<String>, capacity: u32) -> Self {
        Self {
            number: number.into(),
            capacity,
            has_projector: false,
        }
    }

    /// Marks the room as equipped with a projector.
    pub fn with_projector(mut self) -> Self {
        self.has_projector = true;
        self
    }
}
