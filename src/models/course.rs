//! Course model.
//!
//! A course is the subject a lesson teaches. Its type (lecture, seminar,
//! lab, practice) is what the course-type popularity query tallies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A course offered in the timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course identifier. Lessons reference courses by this id.
    pub id: u32,
    /// Course title.
    pub name: String,
    /// Teaching format.
    #[serde(rename = "type")]
    pub course_type: CourseType,
}

/// Teaching format of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseType {
    Lecture,
    Seminar,
    Lab,
    Practice,
}

impl Course {
    /// Creates a new course.
    pub fn new(id: u32, name: impl Into<String>, course_type: CourseType) -> Self {
        Self {
            id,
            name: name.into(),
            course_type,
        }
    }

    /// Creates a lecture course.
    pub fn lecture(id: u32, name: impl Into<String>) -> Self {
        Self::new(id, name, CourseType::Lecture)
    }

    /// Creates a lab course.
    pub fn lab(id: u32, name: impl Into<String>) -> Self {
        Self::new(id, name, CourseType::Lab)
    }
}

impl CourseType {
    /// All course types.
    pub const ALL: [CourseType; 4] = [
        CourseType::Lecture,
        CourseType::Seminar,
        CourseType::Lab,
        CourseType::Practice,
    ];

    /// Human label.
    pub fn label(self) -> &'static str {
        match self {
            CourseType::Lecture => "Lecture",
            CourseType::Seminar => "Seminar",
            CourseType::Lab => "Lab",
            CourseType::Practice => "Practice",
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CourseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown course type: '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_factories() {
        let c = Course::lecture(1, "Algebra");
        assert_eq!(c.course_type, CourseType::Lecture);
        assert_eq!(c.name, "Algebra");

        let l = Course::lab(3, "Data Structures");
        assert_eq!(l.course_type, CourseType::Lab);
        assert_eq!(l.id, 3);
    }

    #[test]
    fn test_course_type_parse() {
        assert_eq!("seminar".parse::<CourseType>(), Ok(CourseType::Seminar));
        assert_eq!(CourseType::Practice.to_string(), "Practice");
        assert!("Workshop".parse::<CourseType>().is_err());
    }

    #[test]
    fn test_course_wire_type_field() {
        let json = serde_json::to_value(Course::lab(3, "Data Structures")).unwrap();
        assert_eq!(json["type"], "Lab");
    }
}
