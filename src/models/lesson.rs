//! Lesson and conflict models.
//!
//! A lesson binds a course, a professor and a classroom to one cell of the
//! weekly grid. Lessons carry no identifier of their own: mutating
//! operations address them by course id, so every lesson of a course is
//! treated as the same lesson.
//!
//! A [`ScheduleConflict`] is the transient result of validating a candidate
//! lesson against the lessons already placed. It is never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DayOfWeek, TimeSlot};

/// A course taught by a professor in a classroom at one weekly grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Referenced course id.
    pub course_id: u32,
    /// Referenced professor id.
    pub professor_id: u32,
    /// Referenced classroom number.
    pub classroom_number: String,
    /// Teaching day.
    pub day_of_week: DayOfWeek,
    /// Time slot within the day.
    pub time_slot: TimeSlot,
}

/// Which resource a conflict collides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictType {
    /// The professor already teaches at that day and slot.
    ProfessorConflict,
    /// The classroom is already booked at that day and slot.
    ClassroomConflict,
}

/// A scheduling collision between a candidate and an existing lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConflict {
    /// Collision kind.
    #[serde(rename = "type")]
    pub conflict_type: ConflictType,
    /// The existing lesson the candidate collides with.
    #[serde(rename = "lessonDetails")]
    pub lesson: Lesson,
}

impl Lesson {
    /// Creates a new lesson.
    pub fn new(
        course_id: u32,
        professor_id: u32,
        classroom_number: impl Into<String>,
        day_of_week: DayOfWeek,
        time_slot: TimeSlot,
    ) -> Self {
        Self {
            course_id,
            professor_id,
            classroom_number: classroom_number.into(),
            day_of_week,
            time_slot,
        }
    }

    /// Copy of this lesson moved to another classroom.
    pub fn with_classroom(&self, classroom_number: impl Into<String>) -> Self {
        Self {
            classroom_number: classroom_number.into(),
            ..self.clone()
        }
    }

    /// Whether the lesson sits in the given grid cell.
    #[inline]
    pub fn occupies(&self, day: DayOfWeek, slot: TimeSlot) -> bool {
        self.day_of_week == day && self.time_slot == slot
    }

    /// Whether both lessons sit in the same grid cell.
    #[inline]
    pub fn same_cell(&self, other: &Lesson) -> bool {
        self.occupies(other.day_of_week, other.time_slot)
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "course {} / professor {} / room {} / {} {}",
            self.course_id,
            self.professor_id,
            self.classroom_number,
            self.day_of_week,
            self.time_slot
        )
    }
}

impl ScheduleConflict {
    /// Professor collision with `lesson`.
    pub fn professor(lesson: Lesson) -> Self {
        Self {
            conflict_type: ConflictType::ProfessorConflict,
            lesson,
        }
    }

    /// Classroom collision with `lesson`.
    pub fn classroom(lesson: Lesson) -> Self {
        Self {
            conflict_type: ConflictType::ClassroomConflict,
            lesson,
        }
    }
}

impl fmt::Display for ScheduleConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.conflict_type {
            ConflictType::ProfessorConflict => write!(
                f,
                "professor {} is already teaching at {} {} ({})",
                self.lesson.professor_id, self.lesson.day_of_week, self.lesson.time_slot, self.lesson
            ),
            ConflictType::ClassroomConflict => write!(
                f,
                "room {} is already booked at {} {} ({})",
                self.lesson.classroom_number,
                self.lesson.day_of_week,
                self.lesson.time_slot,
                self.lesson
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algebra() -> Lesson {
        Lesson::new(1, 1, "101", DayOfWeek::Monday, TimeSlot::First)
    }

    #[test]
    fn test_with_classroom_keeps_other_fields() {
        let moved = algebra().with_classroom("102");
        assert_eq!(moved.classroom_number, "102");
        assert_eq!(moved.course_id, 1);
        assert_eq!(moved.professor_id, 1);
        assert!(moved.same_cell(&algebra()));
    }

    #[test]
    fn test_occupies() {
        let l = algebra();
        assert!(l.occupies(DayOfWeek::Monday, TimeSlot::First));
        assert!(!l.occupies(DayOfWeek::Monday, TimeSlot::Second));
        assert!(!l.occupies(DayOfWeek::Tuesday, TimeSlot::First));
    }

    #[test]
    fn test_conflict_factories() {
        let p = ScheduleConflict::professor(algebra());
        assert_eq!(p.conflict_type, ConflictType::ProfessorConflict);
        assert!(p.to_string().starts_with("professor 1 is already teaching"));

        let c = ScheduleConflict::classroom(algebra());
        assert_eq!(c.conflict_type, ConflictType::ClassroomConflict);
        assert!(c.to_string().contains("room 101"));
    }

    #[test]
    fn test_lesson_wire_shape() {
        let json = serde_json::to_value(algebra()).unwrap();
        assert_eq!(json["courseId"], 1);
        assert_eq!(json["classroomNumber"], "101");
        assert_eq!(json["dayOfWeek"], "Monday");
        assert_eq!(json["timeSlot"], "8:30-10:00");

        let conflict = serde_json::to_value(ScheduleConflict::professor(algebra())).unwrap();
        assert_eq!(conflict["type"], "ProfessorConflict");
        assert_eq!(conflict["lessonDetails"]["professorId"], 1);
    }
}
