//! Entity registry.
//!
//! Owns the four timetable collections in insertion order. Professors,
//! classrooms and courses are append-only and never checked for duplicate
//! identities; keeping them unique is the caller's job (see
//! [`audit_registry`](crate::validation::audit_registry) for a report).
//!
//! Lessons can be read by anyone but only mutated through
//! [`Timetable`](crate::scheduler::Timetable), which gates every change on
//! the conflict validator.

use serde::{Deserialize, Serialize};

use crate::models::{Classroom, Course, Lesson, Professor};

/// The timetable's entity collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    professors: Vec<Professor>,
    classrooms: Vec<Classroom>,
    courses: Vec<Course>,
    lessons: Vec<Lesson>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a professor.
    pub fn add_professor(&mut self, professor: Professor) {
        self.professors.push(professor);
    }

    /// Registers a classroom.
    pub fn add_classroom(&mut self, classroom: Classroom) {
        self.classrooms.push(classroom);
    }

    /// Registers a course.
    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    pub fn professors(&self) -> &[Professor] {
        &self.professors
    }

    pub fn classrooms(&self) -> &[Classroom] {
        &self.classrooms
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Placed lessons in insertion order.
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// First professor with the given id.
    pub fn professor(&self, id: u32) -> Option<&Professor> {
        self.professors.iter().find(|p| p.id == id)
    }

    /// First classroom with the given number.
    pub fn classroom(&self, number: &str) -> Option<&Classroom> {
        self.classrooms.iter().find(|c| c.number == number)
    }

    /// First course with the given id.
    pub fn course(&self, id: u32) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub(crate) fn lessons_mut(&mut self) -> &mut Vec<Lesson> {
        &mut self.lessons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let mut r = Registry::new();
        r.add_professor(Professor::new(1, "Dr. Smith"));
        r.add_professor(Professor::new(1, "Dr. Smith (again)"));
        r.add_classroom(Classroom::new("101", 30));
        r.add_classroom(Classroom::new("102", 20));

        assert_eq!(r.professors().len(), 2);
        assert_eq!(r.professor(1).map(|p| p.name.as_str()), Some("Dr. Smith"));
        let numbers: Vec<_> = r.classrooms().iter().map(|c| c.number.as_str()).collect();
        assert_eq!(numbers, ["101", "102"]);
    }

    #[test]
    fn test_lookups() {
        let mut r = Registry::new();
        r.add_course(Course::lecture(1, "Algebra"));
        r.add_classroom(Classroom::new("103", 40).with_projector());

        assert_eq!(r.course(1).map(|c| c.name.as_str()), Some("Algebra"));
        assert!(r.course(2).is_none());
        assert!(r.classroom("103").is_some_and(|c| c.has_projector));
        assert!(r.classroom("999").is_none());
        assert!(r.professor(1).is_none());
        assert!(r.lessons().is_empty());
    }
}
