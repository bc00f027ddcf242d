//! Timetable service: conflict-gated mutators and read-only queries.
//!
//! # Mutation Rules
//!
//! Every lesson mutation runs the conflict validator first and commits
//! only when it reports no collision. A rejected mutation leaves the
//! timetable untouched. Lessons are addressed by course id: reassignment
//! moves the first lesson of the course, cancellation removes all of them.
//!
//! # Queries
//!
//! Queries are linear scans over the lesson list in insertion order. The
//! grid is 5 days × 5 slots, so no index is kept.

use log::{debug, warn};
use std::collections::HashSet;

use crate::error::{Result, ScheduleError};
use crate::models::{
    Classroom, Course, CourseType, DayOfWeek, Lesson, Professor, ScheduleConflict, TimeSlot,
    WEEKLY_CELLS,
};
use crate::registry::Registry;
use crate::validation::{find_conflict, validate_lesson};

/// A weekly timetable.
///
/// Owns its [`Registry`]; separate instances share nothing. Mutators take
/// `&mut self`, so the validate-then-commit sequence cannot interleave with
/// another writer.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Classroom, DayOfWeek, Lesson, TimeSlot};
/// use u_timetable::scheduler::Timetable;
///
/// let mut timetable = Timetable::new();
/// timetable.add_classroom(Classroom::new("101", 30));
/// timetable.add_classroom(Classroom::new("102", 20));
///
/// timetable
///     .add_lesson(Lesson::new(1, 1, "101", DayOfWeek::Monday, TimeSlot::First))
///     .unwrap();
///
/// let free = timetable.find_available_classrooms(TimeSlot::First, DayOfWeek::Monday);
/// assert_eq!(free, ["102"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    registry: Registry,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying entity collections.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Placed lessons in insertion order.
    pub fn lessons(&self) -> &[Lesson] {
        self.registry.lessons()
    }

    /// Registers a professor. No duplicate check.
    pub fn add_professor(&mut self, professor: Professor) {
        self.registry.add_professor(professor);
    }

    /// Registers a classroom. No duplicate check.
    pub fn add_classroom(&mut self, classroom: Classroom) {
        self.registry.add_classroom(classroom);
    }

    /// Registers a course. No duplicate check.
    pub fn add_course(&mut self, course: Course) {
        self.registry.add_course(course);
    }

    /// Checks a candidate lesson without placing it.
    pub fn validate(&self, candidate: &Lesson) -> Option<ScheduleConflict> {
        validate_lesson(self.lessons(), candidate)
    }

    /// Places a lesson if it collides with nothing.
    ///
    /// # Errors
    /// [`ScheduleError::Conflict`] with the first collision found; the
    /// timetable is left unchanged.
    pub fn add_lesson(&mut self, lesson: Lesson) -> Result<()> {
        if let Some(conflict) = self.validate(&lesson) {
            warn!("Schedule conflict, lesson not added: {conflict}");
            return Err(conflict.into());
        }

        debug!("Added lesson: {lesson}");
        self.registry.lessons_mut().push(lesson);
        Ok(())
    }

    /// Moves the first lesson of `course_id` to another classroom.
    ///
    /// The moved lesson is validated against every other placed lesson.
    ///
    /// # Errors
    /// - [`ScheduleError::LessonNotFound`] if no lesson belongs to the course.
    /// - [`ScheduleError::Conflict`] if the new room is taken at that cell.
    pub fn reassign_classroom(
        &mut self,
        course_id: u32,
        new_classroom: impl Into<String>,
    ) -> Result<()> {
        let lessons = self.registry.lessons();
        let Some(index) = lessons.iter().position(|l| l.course_id == course_id) else {
            warn!("Cannot reassign classroom: no lesson for course {course_id}");
            return Err(ScheduleError::LessonNotFound { course_id });
        };

        let moved = lessons[index].with_classroom(new_classroom);
        let others = lessons
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != index)
            .map(|(_, l)| l);
        if let Some(conflict) = find_conflict(others, &moved) {
            warn!("Cannot reassign classroom due to conflict: {conflict}");
            return Err(conflict.into());
        }

        debug!(
            "Reassigned course {course_id} from room {} to room {}",
            lessons[index].classroom_number, moved.classroom_number
        );
        self.registry.lessons_mut()[index] = moved;
        Ok(())
    }

    /// Removes every lesson of `course_id`.
    ///
    /// Returns the number of lessons removed; zero is a no-op.
    pub fn cancel_lesson(&mut self, course_id: u32) -> usize {
        let lessons = self.registry.lessons_mut();
        let before = lessons.len();
        lessons.retain(|l| l.course_id != course_id);
        let removed = before - lessons.len();
        debug!("Cancelled {removed} lesson(s) of course {course_id}");
        removed
    }

    /// Lessons placed at the given cell.
    pub fn lessons_at(&self, day: DayOfWeek, slot: TimeSlot) -> Vec<&Lesson> {
        self.lessons()
            .iter()
            .filter(|l| l.occupies(day, slot))
            .collect()
    }

    /// Classroom numbers with no lesson at the given cell.
    ///
    /// Keeps registry order; duplicate registrations are returned as-is.
    pub fn find_available_classrooms(&self, slot: TimeSlot, day: DayOfWeek) -> Vec<&str> {
        let occupied: HashSet<&str> = self
            .lessons_at(day, slot)
            .into_iter()
            .map(|l| l.classroom_number.as_str())
            .collect();

        self.registry
            .classrooms()
            .iter()
            .map(|c| c.number.as_str())
            .filter(|number| !occupied.contains(number))
            .collect()
    }

    /// All lessons taught by a professor.
    pub fn professor_schedule(&self, professor_id: u32) -> Vec<&Lesson> {
        self.lessons()
            .iter()
            .filter(|l| l.professor_id == professor_id)
            .collect()
    }

    /// All lessons held in a classroom.
    pub fn classroom_schedule(&self, classroom_number: &str) -> Vec<&Lesson> {
        self.lessons()
            .iter()
            .filter(|l| l.classroom_number == classroom_number)
            .collect()
    }

    /// Share of the 25 weekly cells a classroom is booked for, in percent.
    pub fn classroom_utilization(&self, classroom_number: &str) -> f64 {
        let occupied = self.classroom_schedule(classroom_number).len();
        occupied as f64 / WEEKLY_CELLS as f64 * 100.0
    }

    /// The course type with the most placed lessons.
    ///
    /// Lessons whose course is not registered are skipped. Ties go to the
    /// type whose first lesson appears earliest. Returns `None` if no lesson
    /// maps to a registered course.
    pub fn most_popular_course_type(&self) -> Option<CourseType> {
        let mut tally: Vec<(CourseType, usize)> = Vec::new();
        for lesson in self.lessons() {
            let Some(course) = self.registry.course(lesson.course_id) else {
                continue;
            };
            match tally.iter_mut().find(|(t, _)| *t == course.course_type) {
                Some((_, count)) => *count += 1,
                None => tally.push((course.course_type, 1)),
            }
        }

        tally
            .into_iter()
            .reduce(|best, next| if next.1 > best.1 { next } else { best })
            .map(|(course_type, _)| course_type)
    }
}
