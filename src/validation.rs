//! Lesson conflict validation and registry audits.
//!
//! Two independent checks live here:
//!
//! - [`validate_lesson`] gates every lesson mutation. A candidate is
//!   admissible iff no placed lesson shares its professor or its classroom
//!   at the same day and slot. Professor collisions are checked first and
//!   win when both would occur; only the first collision in insertion
//!   order is reported.
//! - [`audit_registry`] reports structural problems the registry does not
//!   prevent: duplicate identities and lessons referencing unknown
//!   courses, professors or classrooms. It never gates a mutation.

use crate::models::{Lesson, ScheduleConflict};
use crate::registry::Registry;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same identity.
    DuplicateId,
    /// A lesson references a course that doesn't exist.
    UnknownCourse,
    /// A lesson references a professor that doesn't exist.
    UnknownProfessor,
    /// A lesson references a classroom that doesn't exist.
    UnknownClassroom,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks `candidate` against the placed `lessons`.
///
/// Returns `None` if the candidate can be admitted, or the first collision
/// found. Never mutates anything.
pub fn validate_lesson(lessons: &[Lesson], candidate: &Lesson) -> Option<ScheduleConflict> {
    find_conflict(lessons.iter(), candidate)
}

/// Conflict scan over an arbitrary ordered view of the placed lessons.
///
/// Used directly when a lesson must be validated against every lesson but
/// itself (classroom reassignment).
pub(crate) fn find_conflict<'a, I>(mut lessons: I, candidate: &Lesson) -> Option<ScheduleConflict>
where
    I: Iterator<Item = &'a Lesson> + Clone,
{
    if let Some(existing) = lessons
        .clone()
        .find(|l| l.professor_id == candidate.professor_id && l.same_cell(candidate))
    {
        return Some(ScheduleConflict::professor(existing.clone()));
    }

    lessons
        .find(|l| l.classroom_number == candidate.classroom_number && l.same_cell(candidate))
        .map(|existing| ScheduleConflict::classroom(existing.clone()))
}

/// Audits the registry for duplicate identities and dangling references.
///
/// Checks:
/// 1. No duplicate professor ids
/// 2. No duplicate classroom numbers
/// 3. No duplicate course ids
/// 4. Every lesson references a registered course, professor and classroom
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn audit_registry(registry: &Registry) -> ValidationResult {
    let mut errors = Vec::new();

    let mut professor_ids = HashSet::new();
    for p in registry.professors() {
        if !professor_ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate professor ID: {}", p.id),
            ));
        }
    }

    let mut classroom_numbers = HashSet::new();
    for c in registry.classrooms() {
        if !classroom_numbers.insert(c.number.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate classroom number: {}", c.number),
            ));
        }
    }

    let mut course_ids = HashSet::new();
    for c in registry.courses() {
        if !course_ids.insert(c.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", c.id),
            ));
        }
    }

    for lesson in registry.lessons() {
        if !course_ids.contains(&lesson.course_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCourse,
                format!("Lesson ({lesson}) references unknown course {}", lesson.course_id),
            ));
        }
        if !professor_ids.contains(&lesson.professor_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownProfessor,
                format!(
                    "Lesson ({lesson}) references unknown professor {}",
                    lesson.professor_id
                ),
            ));
        }
        if !classroom_numbers.contains(lesson.classroom_number.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownClassroom,
                format!(
                    "Lesson ({lesson}) references unknown classroom '{}'",
                    lesson.classroom_number
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classroom, ConflictType, Course, DayOfWeek, Professor, TimeSlot};
    use crate::scheduler::Timetable;

    fn placed() -> Vec<Lesson> {
        vec![
            Lesson::new(1, 1, "101", DayOfWeek::Monday, TimeSlot::First),
            Lesson::new(2, 2, "102", DayOfWeek::Tuesday, TimeSlot::Second),
        ]
    }

    fn sample_timetable() -> Timetable {
        let mut t = Timetable::new();
        t.add_professor(Professor::new(1, "Dr. Smith"));
        t.add_professor(Professor::new(2, "Dr. Brown"));
        t.add_classroom(Classroom::new("101", 30));
        t.add_classroom(Classroom::new("102", 20));
        t.add_course(Course::lecture(1, "Algebra"));
        t.add_course(Course::lecture(2, "Quantum Physics"));
        for lesson in placed() {
            t.add_lesson(lesson).unwrap();
        }
        t
    }

    #[test]
    fn test_no_conflict() {
        let candidate = Lesson::new(3, 3, "103", DayOfWeek::Monday, TimeSlot::First);
        assert!(validate_lesson(&placed(), &candidate).is_none());
    }

    #[test]
    fn test_empty_schedule_admits_anything() {
        let candidate = Lesson::new(1, 1, "101", DayOfWeek::Monday, TimeSlot::First);
        assert!(validate_lesson(&[], &candidate).is_none());
    }

    #[test]
    fn test_professor_conflict() {
        let candidate = Lesson::new(1, 1, "102", DayOfWeek::Monday, TimeSlot::First);
        let conflict = validate_lesson(&placed(), &candidate).unwrap();
        assert_eq!(conflict.conflict_type, ConflictType::ProfessorConflict);
        assert_eq!(conflict.lesson, placed()[0]);
    }

    #[test]
    fn test_classroom_conflict() {
        let candidate = Lesson::new(5, 9, "102", DayOfWeek::Tuesday, TimeSlot::Second);
        let conflict = validate_lesson(&placed(), &candidate).unwrap();
        assert_eq!(conflict.conflict_type, ConflictType::ClassroomConflict);
        assert_eq!(conflict.lesson, placed()[1]);
    }

    #[test]
    fn test_professor_checked_before_classroom() {
        // Candidate clashes with lesson 1 on room and lesson 2 on professor.
        let lessons = vec![
            Lesson::new(1, 1, "101", DayOfWeek::Friday, TimeSlot::Fifth),
            Lesson::new(2, 2, "102", DayOfWeek::Friday, TimeSlot::Fifth),
        ];
        let candidate = Lesson::new(3, 2, "101", DayOfWeek::Friday, TimeSlot::Fifth);
        let conflict = validate_lesson(&lessons, &candidate).unwrap();
        assert_eq!(conflict.conflict_type, ConflictType::ProfessorConflict);
        assert_eq!(conflict.lesson.course_id, 2);
    }

    #[test]
    fn test_same_resource_other_cell_is_fine() {
        let candidate = Lesson::new(1, 1, "101", DayOfWeek::Monday, TimeSlot::Second);
        assert!(validate_lesson(&placed(), &candidate).is_none());
    }

    #[test]
    fn test_audit_clean_registry() {
        assert!(audit_registry(sample_timetable().registry()).is_ok());
    }

    #[test]
    fn test_audit_duplicates() {
        let mut t = sample_timetable();
        t.add_professor(Professor::new(1, "Dr. Clone"));
        t.add_classroom(Classroom::new("101", 5));

        let errors = audit_registry(t.registry()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::DuplicateId));
        assert!(errors.iter().any(|e| e.message.contains("classroom")));
    }

    #[test]
    fn test_audit_dangling_references() {
        let mut t = sample_timetable();
        t.add_lesson(Lesson::new(42, 7, "999", DayOfWeek::Thursday, TimeSlot::Third))
            .unwrap();

        let errors = audit_registry(t.registry()).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            [
                ValidationErrorKind::UnknownCourse,
                ValidationErrorKind::UnknownProfessor,
                ValidationErrorKind::UnknownClassroom,
            ]
        );
    }
}
